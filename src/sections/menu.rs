use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{MenuItem, MENU_ITEMS, MENU_THRESHOLD, MENU_TRAIL};
use crate::hooks::{use_delayed_flag, use_in_view};

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub on_preview: Callback<(String, String)>,
    pub on_order: Callback<MouseEvent>,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), MENU_THRESHOLD);

    html! {
        <section id="menu" ref={section} class="menu-section">
            <div class="menu-inner">
                <div class="menu-heading">
                    <h2>{"Thực Đơn Đặc Biệt"}</h2>
                    <p>{"Khám phá những món ăn đặc trưng của chúng tôi"}</p>
                </div>

                <div class="menu-grid">
                    {
                        MENU_ITEMS.iter().enumerate().map(|(index, item)| html! {
                            <MenuCard
                                key={item.name}
                                item={item}
                                in_view={in_view}
                                delay_ms={MENU_TRAIL.delay_for(index)}
                                on_preview={props.on_preview.clone()}
                                on_order={props.on_order.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .menu-section {
                    padding: 5rem 0;
                    background: #f9fafb;
                }

                .menu-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .menu-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .menu-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--secondary);
                    margin-bottom: 1rem;
                }

                .menu-heading p {
                    color: #4b5563;
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .menu-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                @media (min-width: 768px) {
                    .menu-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MenuCardProps {
    item: &'static MenuItem,
    in_view: bool,
    delay_ms: u32,
    on_preview: Callback<(String, String)>,
    on_order: Callback<MouseEvent>,
}

/// One dish card. Cards sharing the section latch reveal as a staggered
/// trail, earlier list entries first.
#[function_component(MenuCard)]
fn menu_card(props: &MenuCardProps) -> Html {
    let item = props.item;
    let visible = use_delayed_flag(props.in_view, props.delay_ms);

    let open_preview = {
        let on_preview = props.on_preview.clone();
        let src = item.image;
        let alt = item.alt;
        Callback::from(move |_: MouseEvent| {
            on_preview.emit((src.to_string(), alt.to_string()));
        })
    };

    html! {
        <div class={classes!("reveal", "menu-card", visible.then(|| "is-visible"))}>
            <div class="card-media" onclick={open_preview}>
                <img src={item.image} alt={item.alt} loading="lazy" />
                <div class="card-scrim"></div>
                <span class="card-badge">{item.badge}</span>
                <div class="card-zoom-hint">
                    <span>{"🔍 Xem chi tiết"}</span>
                </div>
            </div>
            <div class="card-body">
                <div class="card-title-row">
                    <h3>{item.name}</h3>
                    <span class="card-price">{item.price}</span>
                </div>
                <p>{item.description}</p>
                <button class="card-order" onclick={props.on_order.clone()}>
                    {"Đặt ngay"}
                </button>
            </div>
            <style>
                {r#"
                .menu-card {
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                    transform: translateY(50px);
                    transition-property: opacity, transform, box-shadow;
                }

                .menu-card:hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .card-media {
                    position: relative;
                    height: 20rem;
                    overflow: hidden;
                    cursor: pointer;
                }

                .card-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }

                .card-media:hover img {
                    transform: scale(1.05);
                }

                .card-scrim {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.1);
                    transition: background 0.3s ease;
                }

                .card-media:hover .card-scrim {
                    background: rgba(0, 0, 0, 0.2);
                }

                .card-badge {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    z-index: 10;
                    background: var(--primary);
                    color: #fff;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .card-zoom-hint {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .card-media:hover .card-zoom-hint {
                    opacity: 1;
                }

                .card-zoom-hint span {
                    background: rgba(255, 255, 255, 0.9);
                    color: #1f2937;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-weight: 600;
                }

                .card-body {
                    padding: 1.5rem;
                }

                .card-title-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 0.75rem;
                }

                .card-title-row h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--secondary);
                }

                .card-price {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--primary);
                }

                .card-body p {
                    color: #4b5563;
                    margin-bottom: 1rem;
                    line-height: 1.7;
                }

                .card-order {
                    width: 100%;
                    background: var(--primary);
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    transition: background 0.3s ease;
                }

                .card-order:hover {
                    background: #e65a24;
                }
                "#}
            </style>
        </div>
    }
}
