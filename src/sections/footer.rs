use yew::prelude::*;

use crate::content::CONTACT_ROWS;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3>{"Bống Xinh"}</h3>
                        <p class="footer-blurb">
                            {"Mang đến cho bạn những món ăn đậm chất truyền thống Việt Nam với \
                              hương vị tuyệt vời."}
                        </p>
                    </div>

                    <div>
                        <h3>{"Liên kết nhanh"}</h3>
                        <ul class="footer-links">
                            <li><a href="#home">{"Trang chủ"}</a></li>
                            <li><a href="#menu">{"Thực đơn"}</a></li>
                            <li><a href="#about">{"Về chúng tôi"}</a></li>
                            <li><a href="#contact">{"Liên hệ"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3>{"Liên hệ"}</h3>
                        <div class="footer-contact">
                            {
                                CONTACT_ROWS.iter().map(|row| html! {
                                    <p key={row.text}>{format!("{} {}", row.icon, row.text)}</p>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <div class="footer-copyright">
                    <p>{"© 2024 Bống Xinh. Tất cả quyền được bảo lưu."}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--secondary);
                    color: #fff;
                    padding: 3rem 0;
                }

                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .footer-grid h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .footer-blurb {
                    color: #d1d5db;
                }

                .footer-links {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer-links a {
                    color: #d1d5db;
                    transition: color 0.2s ease;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: #d1d5db;
                }

                .footer-copyright {
                    border-top: 1px solid #4b5563;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    text-align: center;
                    color: #9ca3af;
                }

                @media (min-width: 768px) {
                    .footer-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </footer>
    }
}
