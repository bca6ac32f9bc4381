use chrono::Datelike;
use log::{info, warn, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod motion {
    pub mod accordion;
    pub mod count_up;
    pub mod easing;
    pub mod magnetic;
    pub mod observer;
    pub mod parallax;
    pub mod reveal;
    pub mod variant;
    pub mod visibility;
}
mod hooks {
    pub mod raf;
    pub mod use_count_up;
    pub mod use_in_view;
    pub mod use_magnetic;
    pub mod use_parallax;
    pub mod use_reduced_motion;
    pub mod use_scroll_progress;
}
mod components {
    pub mod accordion;
    pub mod animated_text;
    pub mod count_up;
    pub mod layout;
    pub mod magnetic;
    pub mod parallax;
    pub mod price_display;
    pub mod reveal;
    pub mod scroll_progress;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod not_found;
    pub mod packages;
}

use components::scroll_progress::ScrollProgressBar;
use hooks::use_reduced_motion::MotionPreferenceProvider;
use pages::{landing::Landing, not_found::NotFound};

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
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

fn scroll_top() -> i32 {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_top())
        .unwrap_or(0)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(scroll_top() > config::NAV_SCROLL_THRESHOLD);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("nav: could not listen for scroll: {:?}", err);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"prepsite"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <a href="#benefits" class="nav-link">{"Why us"}</a>
                    <a href="#packages" class="nav-link">{"Packages"}</a>
                    <a href="#faq" class="nav-link">{"FAQ"}</a>
                    <a href="#register" class="nav-login-button">{"Sign up"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <p>{ format!("© {} prepsite. Practice today, pass tomorrow.", year) }</p>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <MotionPreferenceProvider>
            <BrowserRouter>
                <ScrollProgressBar />
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </MotionPreferenceProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    let level = if config::is_dev() { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
