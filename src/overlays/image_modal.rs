use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub src: String,
    pub alt: String,
    pub on_close: Callback<MouseEvent>,
}

/// Fullscreen image preview. The backdrop closes it; clicks on the image
/// itself must not bubble up to the backdrop handler.
#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="overlay-backdrop" onclick={props.on_close.clone()}>
            <div class="image-frame">
                <div class="image-stage" onclick={stop_propagation}>
                    <img src={props.src.clone()} alt={props.alt.clone()} />
                </div>

                <button class="image-close" onclick={props.on_close.clone()}>
                    {"×"}
                </button>

                <div class="image-caption">{props.alt.clone()}</div>
            </div>
            <style>
                {r#"
                .image-frame {
                    position: relative;
                    max-width: 56rem;
                    max-height: 90vh;
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .image-stage {
                    width: 100%;
                    height: 100%;
                    max-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .image-stage img {
                    max-width: 100%;
                    max-height: 80vh;
                    object-fit: contain;
                    border-radius: 0.5rem;
                }

                .image-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #1f2937;
                    font-weight: 700;
                    font-size: 1.25rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }

                .image-close:hover {
                    background: #fff;
                    transform: scale(1.1);
                }

                .image-caption {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: rgba(255, 255, 255, 0.9);
                    color: #1f2937;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    white-space: nowrap;
                }
                "#}
            </style>
        </div>
    }
}
