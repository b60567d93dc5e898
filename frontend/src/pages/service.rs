use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::observer::use_scroll_reveal;
use crate::Route;

const SERVICES: &[(&str, &str)] = &[
    (
        "Influencer Management",
        "We represent creators across fashion, beauty, music and lifestyle, and negotiate the brand deals that fit them.",
    ),
    (
        "Content Creation",
        "Shoots, edits and short-form video built for the platforms your audience actually uses.",
    ),
    (
        "Small Business Branding",
        "Logos, voice and launch campaigns for South Asian owned brands getting their first big push.",
    ),
    (
        "Community & Engagement",
        "Daily engagement with your niche audience so growth stays organic.",
    ),
];

#[function_component(Service)]
pub fn service() -> Html {
    use_scroll_reveal();

    html! {
        <main class="service-page">
            <section class="service-hero" data-animate="fade-up">
                <h2 data-animate-child="">{"What we do"}</h2>
                <p data-animate-child="">
                    {"From the first collab to a full campaign, our team handles the work behind the feed."}
                </p>
            </section>

            <section class="service-grid" data-animate="fade-up">
                { for SERVICES.iter().map(|(title, desc)| html! {
                    <div class="service-card card-hover-effect" data-animate-child="">
                        <h3>{*title}</h3>
                        <p>{*desc}</p>
                    </div>
                }) }
            </section>

            <section class="cta" data-animate="fade-up">
                <h2 data-animate-child="">{"Want to work with us?"}</h2>
                <div data-animate-child="">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary cta-button">
                        {"Get in touch"}
                        <span class="btn-arrow">{"→"}</span>
                    </Link<Route>>
                </div>
            </section>
        </main>
    }
}
