use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::PHONE_NUMBERS;

#[derive(Properties, PartialEq)]
pub struct OrderCtaProps {
    pub on_order: Callback<MouseEvent>,
}

#[function_component(OrderCta)]
pub fn order_cta(props: &OrderCtaProps) -> Html {
    let call_label = format!(
        "📞 Gọi ngay: {} hoặc {}",
        PHONE_NUMBERS[0].number, PHONE_NUMBERS[1].number
    );

    html! {
        <section class="cta-band">
            <div class="cta-inner">
                <h2>{"Đặt Hàng Ngay Hôm Nay!"}</h2>
                <p>{"Gọi ngay để thưởng thức những món ăn ngon nhất tại Bống Xinh"}</p>
                <div class="cta-actions">
                    <button class="cta-call" onclick={props.on_order.clone()}>
                        {call_label}
                    </button>
                    <a href="#menu" class="cta-menu-link">{"Xem thực đơn"}</a>
                </div>
            </div>
            <style>
                {r#"
                .cta-band {
                    padding: 5rem 0;
                    background: var(--primary);
                    color: #fff;
                }

                .cta-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    text-align: center;
                }

                .cta-inner h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .cta-inner > p {
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .cta-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                }

                .cta-call {
                    background: #fff;
                    color: var(--primary);
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    transition: background 0.3s ease;
                }

                .cta-call:hover {
                    background: #f3f4f6;
                }

                .cta-menu-link {
                    border: 2px solid #fff;
                    color: #fff;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    transition: all 0.3s ease;
                }

                .cta-menu-link:hover {
                    background: #fff;
                    color: var(--primary);
                }

                @media (min-width: 640px) {
                    .cta-actions {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </section>
    }
}
