use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod scroll;
mod visibility;
mod pages {
    pub mod home;
    pub mod not_found;
}
mod components {
    pub mod section_title;
    pub mod splash;
    pub mod hero;
    pub mod services;
    pub mod portfolio;
    pub mod about;
    pub mod testimonials;
    pub mod contact;
    pub mod footer;
}

use content::NAV_LINKS;
use pages::{
    home::Home,
    not_found::NotFound,
};
use scroll::use_scrolled_past;


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
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::NAV_SCROLL_OFFSET);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |class: &'static str, onclick: Option<Callback<MouseEvent>>| -> Html {
        NAV_LINKS.iter().map(|(href, label)| html! {
            <a key={*href} href={*href} class={class} onclick={onclick.clone()}>{*label}</a>
        }).collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo__icon">{"⌂"}</span>
                    <span>{config::BUSINESS_NAME}</span>
                </Link<Route>>

                <div class="nav-links">
                    { links("nav-link", None) }
                </div>

                <button class="burger-menu" onclick={open_menu} aria-label="Open Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <div class="mobile-menu__header">
                    <span class="mobile-menu__brand">
                        <span class="nav-logo__icon">{"⌂"}</span>
                        {config::BUSINESS_NAME}
                    </span>
                    <button class="mobile-menu__close" onclick={close_menu.clone()} aria-label="Close Menu">
                        {"✕"}
                    </button>
                </div>
                <div class="mobile-menu__links">
                    { links("mobile-link", Some(close_menu)) }
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 300ms ease;
                    font-family: Inter, ui-sans-serif, system-ui, sans-serif;
                }

                .top-nav.scrolled {
                    background: #fff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 0.5rem 0;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-logo__icon {
                    color: #FFEE58;
                    font-size: 1.75rem;
                }

                .top-nav.scrolled .nav-logo {
                    color: #1f2937;
                }

                .top-nav.scrolled .nav-logo__icon {
                    color: #FFD700;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    position: relative;
                    font-weight: 500;
                    color: #fff;
                    text-decoration: none;
                    transition: color 300ms ease;
                }

                .top-nav.scrolled .nav-link {
                    color: #1f2937;
                }

                .nav-link:hover {
                    color: #FFD700;
                }

                .nav-link::after {
                    content: '';
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: #FFD700;
                    transform: scaleX(0);
                    transform-origin: right;
                    transition: transform 300ms ease;
                }

                .nav-link:hover::after {
                    transform: scaleX(1);
                    transform-origin: left;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }

                .top-nav.scrolled .burger-menu span {
                    background: #1f2937;
                }

                .mobile-menu {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100%;
                    width: 100%;
                    background: #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
                    transform: translateX(100%);
                    transition: transform 300ms ease-in-out;
                    z-index: 50;
                    padding: 1.5rem;
                }

                .mobile-menu.open {
                    transform: translateX(0);
                }

                .mobile-menu__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }

                .mobile-menu__brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .mobile-menu__close {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .mobile-menu__links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .mobile-link {
                    color: #1f2937;
                    font-weight: 500;
                    text-decoration: none;
                }

                .mobile-link:hover {
                    color: #FFD700;
                }

                @media (min-width: 640px) {
                    .mobile-menu {
                        width: 66%;
                    }
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
