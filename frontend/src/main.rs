use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod head;
mod theme;
mod motion {
    pub mod error;
    pub mod reveal;
    pub mod count_up;
    pub mod frame;
}
mod components {
    pub mod reveal;
    pub mod count_up;
    pub mod navbar;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod support;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use pages::{
    landing::Landing,
    support::Support,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/support")]
    Support,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Support => {
            info!("Rendering Support page");
            html! { <Support /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{theme::GLOBAL_STYLES}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
