use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{HERO_SEQUENCE_MS, HERO_THRESHOLD};
use crate::hooks::{use_delayed_flag, use_in_view};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_order: Callback<MouseEvent>,
}

/// Hero banner. The four text blocks reveal in sequence once the section
/// first enters the viewport.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), HERO_THRESHOLD);

    let title_on = use_delayed_flag(in_view, HERO_SEQUENCE_MS[0]);
    let subtitle_on = use_delayed_flag(in_view, HERO_SEQUENCE_MS[1]);
    let description_on = use_delayed_flag(in_view, HERO_SEQUENCE_MS[2]);
    let buttons_on = use_delayed_flag(in_view, HERO_SEQUENCE_MS[3]);

    html! {
        <section id="home" ref={section} class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-shade"></div>

            <div class="hero-floaters">
                <div class="floater floater-one"></div>
                <div class="floater floater-two"></div>
                <div class="floater floater-three"></div>
            </div>

            <div class="hero-content">
                <h1 class={classes!("reveal", "hero-title", title_on.then(|| "is-visible"))}>
                    {"Mì & Trà Tắc"}
                </h1>
                <h2 class={classes!("reveal", "hero-subtitle", subtitle_on.then(|| "is-visible"))}>
                    {"Hương vị truyền thống, cảm xúc hiện đại"}
                </h2>
                <p class={classes!("reveal", "hero-description", description_on.then(|| "is-visible"))}>
                    {"Thưởng thức tô mì nóng hổi đậm đà cùng ly trà tắc mát lạnh tươi ngon. \
                      Nơi gặp gỡ của hương vị Việt Nam trong từng ngụm, từng miếng."}
                </p>
                <div class={classes!("reveal", "hero-actions", buttons_on.then(|| "is-visible"))}>
                    <a href="#menu" class="hero-menu-link">{"Xem Thực Đơn"}</a>
                    <button class="hero-order" onclick={props.on_order.clone()}>
                        {"Đặt Hàng Ngay"}
                    </button>
                </div>
            </div>

            <div class="hero-food-icons">
                <div class="food-bubble">{"🍜"}</div>
                <div class="food-bubble delayed-one">{"🥤"}</div>
                <div class="food-bubble delayed-two">{"🍋"}</div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #fb923c, #facc15, #4ade80);
                }

                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent);
                }

                .hero-floaters {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .floater {
                    position: absolute;
                    border-radius: 9999px;
                    opacity: 0.7;
                }

                .floater-one {
                    top: 5rem;
                    left: 2.5rem;
                    width: 4rem;
                    height: 4rem;
                    background: #fde047;
                    animation: hero-bounce 1.6s infinite;
                }

                .floater-two {
                    top: 8rem;
                    right: 4rem;
                    width: 3rem;
                    height: 4rem;
                    background: #4ade80;
                    animation: hero-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }

                .floater-three {
                    bottom: 8rem;
                    left: 5rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    background: #fdba74;
                    animation: hero-ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    color: #fff;
                    padding: 0 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .hero-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    transform: translateY(50px);
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    font-weight: 500;
                    margin-bottom: 2rem;
                    opacity: 0;
                    transform: translateY(30px);
                }

                .hero-subtitle.is-visible {
                    opacity: 0.9;
                }

                .hero-description {
                    font-size: 1.125rem;
                    margin-bottom: 2.5rem;
                    line-height: 1.7;
                    opacity: 0;
                    transform: translateY(30px);
                }

                .hero-description.is-visible {
                    opacity: 0.8;
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                    transform: translateY(30px);
                }

                .hero-menu-link,
                .hero-order {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 1rem;
                    color: #fff;
                    transition: all 0.3s ease;
                }

                .hero-menu-link {
                    background: #f97316;
                }

                .hero-menu-link:hover {
                    background: #ea580c;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    transform: scale(1.05);
                }

                .hero-order {
                    background: #22c55e;
                }

                .hero-order:hover {
                    background: #16a34a;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    transform: scale(1.05);
                }

                .hero-food-icons {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 1.5rem;
                }

                .food-bubble {
                    width: 4rem;
                    height: 4rem;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    animation: hero-bounce 1.6s infinite;
                }

                .food-bubble.delayed-one {
                    animation-delay: 0.3s;
                }

                .food-bubble.delayed-two {
                    animation-delay: 0.6s;
                }

                @keyframes hero-bounce {
                    0%, 100% {
                        transform: translateY(-25%);
                        animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
                    }
                    50% {
                        transform: translateY(0);
                        animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
                    }
                }

                @keyframes hero-pulse {
                    0%, 100% { opacity: 0.7; }
                    50% { opacity: 0.35; }
                }

                @keyframes hero-ping {
                    75%, 100% {
                        transform: scale(2);
                        opacity: 0;
                    }
                }

                @media (min-width: 640px) {
                    .hero-actions {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .hero-title {
                        font-size: 4.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.5rem;
                    }

                    .hero-description {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
