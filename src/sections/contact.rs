use yew::prelude::*;

use crate::content::{ContactRow, CONTACT_DELAY_MS, CONTACT_ROWS, CONTACT_THRESHOLD, CONTACT_TRAIL};
use crate::hooks::{use_delayed_flag, use_in_view};

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), CONTACT_THRESHOLD);
    let visible = use_delayed_flag(in_view, CONTACT_DELAY_MS);

    html! {
        <section id="contact" ref={section} class="contact-section">
            <div class="contact-inner">
                <div class={classes!("reveal", "contact-content", visible.then(|| "is-visible"))}>
                    <div class="contact-heading">
                        <h2>{"Liên Hệ"}</h2>
                        <p>{"Hãy liên hệ với chúng tôi để đặt món hoặc biết thêm thông tin"}</p>
                    </div>

                    <div class="contact-grid">
                        <div>
                            <h3>{"Thông tin liên hệ"}</h3>
                            <div class="contact-rows">
                                {
                                    CONTACT_ROWS.iter().enumerate().map(|(index, row)| html! {
                                        <ContactInfoRow
                                            key={row.text}
                                            row={row}
                                            in_view={in_view}
                                            delay_ms={CONTACT_TRAIL.delay_for(index)}
                                        />
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div>
                            <h3>{"Gửi tin nhắn"}</h3>
                            // Display-only form, there is nothing to submit to.
                            <form class="contact-form">
                                <input type="text" placeholder="Họ và tên" />
                                <input type="tel" placeholder="Số điện thoại" />
                                <textarea placeholder="Tin nhắn" rows="4"></textarea>
                                <button type="submit">{"Gửi tin nhắn"}</button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 0;
                    background: #f9fafb;
                }

                .contact-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .contact-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    transform: translateY(40px);
                }

                .contact-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .contact-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--secondary);
                    margin-bottom: 1rem;
                }

                .contact-heading p {
                    color: #4b5563;
                    font-size: 1.125rem;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }

                .contact-grid h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: var(--secondary);
                    margin-bottom: 1.5rem;
                }

                .contact-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    transform: translateX(-20px);
                }

                .contact-row .row-icon {
                    color: var(--primary);
                    font-size: 1.25rem;
                }

                .contact-row .row-text {
                    color: #4b5563;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font-family: inherit;
                    font-size: 1rem;
                }

                .contact-form textarea {
                    resize: none;
                }

                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px var(--primary);
                }

                .contact-form button {
                    width: 100%;
                    background: var(--primary);
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    transition: background 0.3s ease;
                }

                .contact-form button:hover {
                    background: #e65a24;
                }

                @media (min-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactInfoRowProps {
    row: &'static ContactRow,
    in_view: bool,
    delay_ms: u32,
}

/// Info rows trail in from the left, one after another.
#[function_component(ContactInfoRow)]
fn contact_info_row(props: &ContactInfoRowProps) -> Html {
    let visible = use_delayed_flag(props.in_view, props.delay_ms);

    html! {
        <div class={classes!("reveal", "contact-row", visible.then(|| "is-visible"))}>
            <span class="row-icon">{props.row.icon}</span>
            <span class="row-text">{props.row.text}</span>
        </div>
    }
}
