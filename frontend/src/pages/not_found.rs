use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::variant::Variant;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <Reveal variant={Variant::Bounce}>
                <h1>{"404"}</h1>
                <p>{"This page took the day off."}</p>
                <Link<Route> to={Route::Home} classes="package-cta">
                    {"Back to home"}
                </Link<Route>>
            </Reveal>
        </div>
    }
}
