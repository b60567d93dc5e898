use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct FooterColumn {
    title: &'static str,
    links: &'static [&'static str],
}

const COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Company",
        links: &["Agencies", "Brands", "Login", "Sign up", "Get Help"],
    },
    FooterColumn {
        title: "Urban Desiii",
        links: &["For Creators", "For Businesses"],
    },
    FooterColumn {
        title: "Info",
        links: &["Affiliate Program", "Free Migration"],
    },
    FooterColumn {
        title: "Legal",
        links: &["Privacy Policy", "Terms of Service"],
    },
    FooterColumn {
        title: "Socials",
        links: &["X", "Instagram", "Facebook", "TikTok", "LinkedIn"],
    },
];

fn copyright(year: i32) -> String {
    format!("© {} Urban Desiii. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer" data-animate="fade-up">
            <div class="footer-top">
                <div class="footer-brand" data-animate="fade-up" data-animate-child="">
                    <Link<Route> to={Route::Home} classes="logo-container-small">
                        <img src="/assets/Images/logo.png" alt="Urban Desiii Logo" class="logo-image small" />
                        <span class="logo-text">{"Urban Desiii"}</span>
                    </Link<Route>>
                </div>
                <div class="footer-columns">
                    { for COLUMNS.iter().map(|col| html! {
                        <div class="footer-col" data-animate="fade-up" data-animate-child="">
                            <h4>{col.title}</h4>
                            { for col.links.iter().map(|link| html! {
                                <a href="#" class="footer-link">{*link}</a>
                            }) }
                        </div>
                    }) }
                </div>
            </div>
            <div class="footer-bottom">
                <span>{copyright(year)}</span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright(2026), "© 2026 Urban Desiii. All rights reserved.");
    }

    #[test]
    fn every_column_has_links() {
        assert!(COLUMNS.iter().all(|c| !c.links.is_empty()));
    }
}
