use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::content::image_src_allowed;
use crate::overlays::image_modal::ImageModal;
use crate::overlays::phone_popup::PhonePopup;
use crate::sections::about::About;
use crate::sections::call_button::CallButton;
use crate::sections::contact::Contact;
use crate::sections::footer::Footer;
use crate::sections::header::Header;
use crate::sections::hero::Hero;
use crate::sections::menu::Menu;
use crate::sections::order_cta::OrderCta;
use crate::state::{body_overflow, Overlay};

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

/// The single page. Owns the overlay state; sections receive it only through
/// callbacks.
#[function_component(Home)]
pub fn home() -> Html {
    let overlay = use_state(Overlay::default);

    // Scroll to top only on initial mount.
    use_effect_once(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    // Body scroll lock follows the overlay. The dependency is the derived
    // overflow value, so closing an already closed overlay changes nothing
    // and the lock cannot be released twice.
    use_effect_with_deps(
        move |overflow| {
            set_body_overflow(overflow);
            || set_body_overflow("unset")
        },
        body_overflow(&overlay),
    );

    let open_phone_menu = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(Overlay::PhoneMenu))
    };

    let open_preview = {
        let overlay = overlay.clone();
        Callback::from(move |(src, alt): (String, String)| {
            debug_assert!(
                image_src_allowed(&src),
                "image outside the asset bundle and allow-list: {src}"
            );
            overlay.set(Overlay::image_preview(src, alt));
        })
    };

    let close_overlay = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(Overlay::Closed))
    };

    html! {
        <main>
            <Header on_order={open_phone_menu.clone()} />
            <Hero on_order={open_phone_menu.clone()} />
            <Menu on_preview={open_preview} on_order={open_phone_menu.clone()} />
            <About />
            <OrderCta on_order={open_phone_menu.clone()} />
            <Contact />
            <Footer />
            <CallButton on_order={open_phone_menu} />
            {
                match &*overlay {
                    Overlay::Closed => html! {},
                    Overlay::ImagePreview { src, alt } => html! {
                        <ImageModal
                            src={src.clone()}
                            alt={alt.clone()}
                            on_close={close_overlay}
                        />
                    },
                    Overlay::PhoneMenu => html! {
                        <PhonePopup on_close={close_overlay} />
                    },
                }
            }
        </main>
    }
}
