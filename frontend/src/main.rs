use yew::prelude::*;
use log::info;

mod animation;
mod config;
mod contact {
    pub mod form;
    pub mod schema;
    pub mod submit;
}
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod content;
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing />
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
