use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod content;
mod hooks;
mod state;

mod overlays {
    pub mod image_modal;
    pub mod phone_popup;
}
mod pages {
    pub mod home;
}
mod sections {
    pub mod about;
    pub mod call_button;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod menu;
    pub mod order_cta;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
