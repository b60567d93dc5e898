use yew::prelude::*;

use crate::animation::observer::use_scroll_reveal;
use crate::components::instagram_live::InstagramLive;
use crate::config;

fn mailto(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_reveal();

    html! {
        <main class="contact-page">
            <section class="contact-hero" data-animate="fade-up">
                <h2 data-animate-child="">{"Contact us"}</h2>
                <p data-animate-child="">
                    {"Brands, creators and small businesses: drop us a line and a representative will reach out."}
                </p>
                <a class="btn btn-primary" data-animate-child=""
                    href={mailto(config::CONTACT_EMAIL, "Working with Urban Desiii")}>
                    {config::CONTACT_EMAIL}
                </a>
            </section>

            <section class="contact-social" data-animate="fade-up">
                <h3 data-animate-child="">{"Latest from @urbandesiii"}</h3>
                <div data-animate-child="">
                    <InstagramLive />
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto("hi@example.com", "Brand deal & more"),
            "mailto:hi@example.com?subject=Brand%20deal%20%26%20more"
        );
    }
}
