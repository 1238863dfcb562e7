mod api;
mod components;
mod config;
mod load;
mod model;
mod parents;
mod route;
mod selection;
mod view;

use components::PeoplePage;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main class="section">
            <div class="container">
                <PeoplePage />
            </div>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
