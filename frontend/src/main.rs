use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod events;
mod styles;
mod animation {
    pub mod observer;
    pub mod parallax;
    pub mod reveal;
}
mod components {
    pub mod footer;
    pub mod instagram_live;
}
mod subscribe {
    pub mod form;
    pub mod models;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod service;
    pub mod subscribe;
}

use components::footer::Footer;
use events::WindowListener;
use pages::{about::About, contact::Contact, home::Home, service::Service, subscribe::Subscribe};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/service")]
    Service,
    #[at("/contact")]
    Contact,
    #[at("/subscribe")]
    Subscribe,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Service => {
            info!("Rendering Service page");
            html! { <Service /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Subscribe => {
            info!("Rendering Subscribe page");
            html! { <Subscribe /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Service, "Service"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::passive("scroll", move |_| {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 50.0);
                });
                move || drop(listener)
            },
            (),
        );
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
        <header class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-left">
                <Link<Route> to={Route::Home} classes="logo-container">
                    <img src="/assets/Images/logo.png" alt="Urban Desiii Logo" class="logo-image" />
                    <span class="logo-text">{"Urban Desiii"}</span>
                </Link<Route>>
            </div>

            <button class="burger-menu" onclick={toggle_menu}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav class={menu_class}>
                { for NAV_LINKS.iter().map(|(route, label)| html! {
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={route.clone()} classes="nav-link">{*label}</Link<Route>>
                    </div>
                }) }
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Subscribe} classes="btn btn-primary">
                        {"Subscribe"}
                    </Link<Route>>
                </div>
            </nav>
            <style>
                {r#"
                .navbar {
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 2rem;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.3s ease;
                }
                .navbar.scrolled {
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
                }
                .logo-container {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    text-decoration: none;
                    color: inherit;
                    font-weight: 800;
                }
                .logo-image {
                    height: 36px;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: inherit;
                    text-decoration: none;
                    font-weight: 500;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--ink);
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: #fff;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::BASE_CSS}</style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
