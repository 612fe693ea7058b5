use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod contact;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use components::nav::Nav;
use pages::{
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Readable panics in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
