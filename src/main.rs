use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod components {
    pub mod scroll_fade;
}
mod pages {
    pub mod landing;
    pub mod survey;
}
mod survey {
    pub mod questions;
    pub mod state;
}

use pages::{landing::Landing, survey::SurveyPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/survey")]
    Survey,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::Survey => {
            info!("Rendering survey page");
            html! { <SurveyPage /> }
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

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
