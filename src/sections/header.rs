use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::header_scrolled;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_order: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();
                let last = Cell::new(false);

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    let next = header_scrolled(offset);
                    // Only push state on an actual flip; scroll fires far more
                    // often than the flag changes.
                    if last.replace(next) != next {
                        scrolled.set(next);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("site-header", (*scrolled).then(|| "scrolled"))}>
            <div class="header-inner">
                <a href="/" class="brand">
                    {"Bống "}<span>{"Xinh"}</span>
                </a>
                <nav class="header-nav">
                    <a href="#home">{"Trang chủ"}</a>
                    <a href="#menu">{"Thực đơn"}</a>
                    <a href="#about">{"Về chúng tôi"}</a>
                    <a href="#contact">{"Liên hệ"}</a>
                </nav>
                <button class="header-order" onclick={props.on_order.clone()}>
                    {"Đặt hàng ngay"}
                </button>
            </div>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    padding: 1rem 0;
                    transition: all 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    padding: 0.75rem 0;
                }

                .header-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .brand {
                    font-weight: 700;
                    font-size: 1.5rem;
                    color: var(--primary);
                    transition: font-size 0.3s ease;
                }

                .brand span {
                    color: var(--secondary);
                }

                .site-header.scrolled .brand {
                    font-size: 1.25rem;
                }

                .header-nav {
                    display: none;
                }

                .header-nav a {
                    color: var(--dark);
                    transition: color 0.2s ease;
                }

                .header-nav a:hover {
                    color: var(--primary);
                }

                .header-order {
                    display: none;
                    background: var(--primary);
                    color: #fff;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 1rem;
                    padding: 0.75rem 1.25rem;
                    transition: all 0.3s ease;
                }

                .header-order:hover {
                    background: #e65a24;
                }

                .site-header.scrolled .header-order {
                    font-size: 0.875rem;
                    padding: 0.5rem 1rem;
                }

                @media (min-width: 768px) {
                    .header-nav {
                        display: flex;
                        gap: 2rem;
                    }

                    .header-order {
                        display: inline-block;
                    }
                }
                "#}
            </style>
        </header>
    }
}
