use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::PHONE_ICON;

#[derive(Properties, PartialEq)]
pub struct CallButtonProps {
    pub on_order: Callback<MouseEvent>,
}

/// Floating bottom-right call button; opens the phone-number chooser.
#[function_component(CallButton)]
pub fn call_button(props: &CallButtonProps) -> Html {
    html! {
        <div class="call-fab-anchor">
            <button class="call-fab" onclick={props.on_order.clone()}>
                <div class="fab-ping"></div>
                <div class="fab-ping fab-ping-late"></div>
                <svg class="fab-icon" fill="currentColor" viewBox="0 0 24 24">
                    <path d={PHONE_ICON} />
                </svg>
                <span class="fab-label">{"Gọi ngay"}</span>
            </button>
            <style>
                {r#"
                .call-fab-anchor {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 50;
                }

                .call-fab {
                    position: relative;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    background: #22c55e;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: visible;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                    animation: fab-shake 0.6s ease-in-out 4s infinite;
                }

                .call-fab:hover {
                    background: #16a34a;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                    animation: none;
                }

                .fab-ping {
                    position: absolute;
                    inset: 0;
                    border-radius: 9999px;
                    background: #22c55e;
                    opacity: 0.3;
                    animation: fab-ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                .fab-ping-late {
                    opacity: 0.2;
                    animation-delay: 0.5s;
                }

                .call-fab::before {
                    content: '';
                    position: absolute;
                    inset: -6px;
                    border-radius: 50%;
                    background: rgba(34, 197, 94, 0.3);
                    animation: fab-ripple 2.5s infinite;
                    z-index: -1;
                }

                .call-fab::after {
                    content: '';
                    position: absolute;
                    inset: -10px;
                    border-radius: 50%;
                    background: rgba(34, 197, 94, 0.2);
                    animation: fab-ripple 2.5s infinite;
                    animation-delay: 0.5s;
                    z-index: -2;
                }

                .fab-icon {
                    position: relative;
                    z-index: 10;
                    width: 1.75rem;
                    height: 1.75rem;
                    animation: fab-bounce 1.6s infinite;
                    transition: transform 0.3s ease;
                }

                .call-fab:hover .fab-icon {
                    animation: none;
                    transform: scale(1.1);
                }

                .fab-label {
                    position: absolute;
                    left: 100%;
                    margin-left: 0.75rem;
                    background: #22c55e;
                    color: #fff;
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    white-space: nowrap;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    pointer-events: none;
                }

                .call-fab:hover .fab-label {
                    opacity: 1;
                }

                @keyframes fab-shake {
                    0%, 100% { transform: translateX(0) rotate(0deg); }
                    25% { transform: translateX(-2px) rotate(-1deg); }
                    50% { transform: translateX(2px) rotate(1deg); }
                    75% { transform: translateX(-1px) rotate(-0.5deg); }
                }

                @keyframes fab-ripple {
                    0% {
                        transform: scale(1);
                        opacity: 0.6;
                    }
                    100% {
                        transform: scale(2.5);
                        opacity: 0;
                    }
                }

                @keyframes fab-ping {
                    75%, 100% {
                        transform: scale(2);
                        opacity: 0;
                    }
                }

                @keyframes fab-bounce {
                    0%, 100% {
                        transform: translateY(-15%);
                        animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
                    }
                    50% {
                        transform: translateY(0);
                        animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
                    }
                }
                "#}
            </style>
        </div>
    }
}
