use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod scroll {
    pub mod choreographer;
    pub mod fade;
    pub mod gallery;
    mod hook;

    pub use hook::{use_scroll_choreography, ChoreographyRefs};
}
mod media {
    pub mod playback;
}
mod components {
    pub mod background_video;
    pub mod carousel;
    pub mod site_footer;
    pub mod site_header;
    pub mod typewriter;
}
mod pages {
    pub mod events;
    pub mod home;
}

use pages::{events::Events, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/events")]
    Events,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
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

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application ({:?} home)", config::home_variant());
    yew::Renderer::<App>::new().render();
}
