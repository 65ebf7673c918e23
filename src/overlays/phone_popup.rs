use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{tel_href, CHECK_CIRCLE_ICON, CHEVRON_ICON, CLOSE_ICON, PHONE_ICON, PHONE_NUMBERS};

#[derive(Properties, PartialEq)]
pub struct PhonePopupProps {
    pub on_close: Callback<MouseEvent>,
}

/// Phone-number chooser. Each entry is a `tel:` link; picking one hands the
/// call to the device and closes the popup.
#[function_component(PhonePopup)]
pub fn phone_popup(props: &PhonePopupProps) -> Html {
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="overlay-backdrop" onclick={props.on_close.clone()}>
            <div class="phone-card" onclick={stop_propagation}>
                <div class="phone-card-header">
                    <div class="phone-card-badge">
                        <svg fill="currentColor" viewBox="0 0 24 24">
                            <path d={PHONE_ICON} />
                        </svg>
                    </div>
                    <h3>{"Chọn số điện thoại"}</h3>
                    <p>{"Gọi ngay để đặt hàng nhanh chóng"}</p>
                </div>

                <div class="phone-entries">
                    {
                        PHONE_NUMBERS.iter().map(|phone| {
                            let on_pick = {
                                let on_close = props.on_close.clone();
                                let number = phone.number;
                                Callback::from(move |e: MouseEvent| {
                                    log::info!("placing call to {number}");
                                    on_close.emit(e);
                                })
                            };
                            html! {
                                <a
                                    key={phone.number}
                                    href={tel_href(phone.number)}
                                    class="phone-entry"
                                    onclick={on_pick}
                                >
                                    <div class="entry-main">
                                        <div class="entry-icon">
                                            <svg fill="currentColor" viewBox="0 0 24 24">
                                                <path d={PHONE_ICON} />
                                            </svg>
                                        </div>
                                        <div>
                                            <div class="entry-number">{phone.number}</div>
                                            <div class="entry-label">{phone.label}</div>
                                        </div>
                                    </div>
                                    <svg class="entry-chevron" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={CHEVRON_ICON} />
                                    </svg>
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="phone-hours">
                    <svg fill="currentColor" viewBox="0 0 24 24">
                        <path d={CHECK_CIRCLE_ICON} />
                    </svg>
                    <span>{"Thời gian hoạt động: 8:00 - 22:00 hàng ngày"}</span>
                </div>

                <button class="phone-dismiss" onclick={props.on_close.clone()}>
                    {"Đóng"}
                </button>

                <button class="phone-corner-close" onclick={props.on_close.clone()}>
                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={CLOSE_ICON} />
                    </svg>
                </button>
            </div>
            <style>
                {r#"
                .phone-card {
                    position: relative;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    max-width: 28rem;
                    width: 100%;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .phone-card-header {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }

                .phone-card-badge {
                    margin: 0 auto 1rem;
                    width: 4rem;
                    height: 4rem;
                    background: #f97316;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                }

                .phone-card-badge svg {
                    width: 2rem;
                    height: 2rem;
                }

                .phone-card-header h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }

                .phone-card-header p {
                    color: #4b5563;
                }

                .phone-entries {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .phone-entry {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: linear-gradient(to right, #f97316, #ea580c);
                    color: #fff;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    transition: all 0.3s ease;
                }

                .phone-entry:hover {
                    background: linear-gradient(to right, #ea580c, #c2410c);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transform: scale(1.05);
                }

                .entry-main {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .entry-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .entry-icon svg {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .entry-number {
                    font-weight: 600;
                    font-size: 1.125rem;
                }

                .entry-label {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                }

                .entry-chevron {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: rgba(255, 255, 255, 0.6);
                    transition: color 0.2s ease;
                }

                .phone-entry:hover .entry-chevron {
                    color: #fff;
                }

                .phone-hours {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #f9fafb;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                    color: #4b5563;
                    font-size: 0.875rem;
                }

                .phone-hours svg {
                    width: 1rem;
                    height: 1rem;
                    flex-shrink: 0;
                }

                .phone-dismiss {
                    width: 100%;
                    background: #e5e7eb;
                    color: #1f2937;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    font-weight: 500;
                    font-size: 1rem;
                    transition: background 0.3s ease;
                }

                .phone-dismiss:hover {
                    background: #d1d5db;
                }

                .phone-corner-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2rem;
                    height: 2rem;
                    background: #f3f4f6;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #6b7280;
                    transition: all 0.3s ease;
                }

                .phone-corner-close:hover {
                    background: #e5e7eb;
                    color: #374151;
                }

                .phone-corner-close svg {
                    width: 1rem;
                    height: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
