use yew::prelude::*;

mod styles;
mod home;
mod design_votes;
mod storage;
mod config;

use crate::home::Home;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class={styles::BG_PAGE}>
            <Home />
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
