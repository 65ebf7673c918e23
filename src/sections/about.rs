use yew::prelude::*;

use crate::content::{ABOUT_DELAY_MS, ABOUT_THRESHOLD};
use crate::hooks::{use_delayed_flag, use_in_view};

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), ABOUT_THRESHOLD);
    let visible = use_delayed_flag(in_view, ABOUT_DELAY_MS);

    html! {
        <section id="about" ref={section} class="about-section">
            <div class="about-inner">
                <div class={classes!("reveal", "about-content", visible.then(|| "is-visible"))}>
                    <h2>{"Về Chúng Tôi"}</h2>

                    <div class="about-grid">
                        <div class="about-story">
                            <h3>{"Câu chuyện của Bống Xinh"}</h3>
                            <p>
                                {"Bống Xinh ra đời từ tình yêu với ẩm thực truyền thống Việt Nam. \
                                  Chúng tôi mong muốn mang đến cho khách hàng những trải nghiệm ẩm thực \
                                  đậm đà, gợi nhớ về hương vị tuổi thơ và sự ấm áp của gia đình."}
                            </p>
                            <p>
                                {"Với đội ngũ đầu bếp giàu kinh nghiệm và nguyên liệu tươi ngon được \
                                  chọn lọc kỹ càng, mỗi món ăn tại Bống Xinh đều được chế biến với tất \
                                  cả tình yêu và sự tận tâm."}
                            </p>
                        </div>

                        <div class="about-panel">
                            <div class="about-panel-icon">{"🏪"}</div>
                            <h4>{"Cam kết chất lượng"}</h4>
                            <p>{"Nguyên liệu tươi ngon • Chế biến tận tâm • Phục vụ chu đáo"}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-section {
                    padding: 5rem 0;
                    background: #fff;
                }

                .about-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .about-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                    transform: translateY(40px);
                }

                .about-content h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--secondary);
                    margin-bottom: 2rem;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .about-story {
                    text-align: left;
                }

                .about-story h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: var(--secondary);
                    margin-bottom: 1rem;
                }

                .about-story p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }

                .about-story p:last-child {
                    margin-bottom: 0;
                }

                .about-panel {
                    background: linear-gradient(to right, rgba(255, 107, 53, 0.2), rgba(46, 41, 78, 0.2));
                    padding: 2rem;
                    border-radius: 0.75rem;
                    text-align: center;
                }

                .about-panel-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .about-panel h4 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: var(--secondary);
                    margin-bottom: 0.5rem;
                }

                .about-panel p {
                    color: #4b5563;
                }

                @media (min-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
