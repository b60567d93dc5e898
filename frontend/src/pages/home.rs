use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::observer::use_scroll_reveal;
use crate::animation::parallax::use_hero_parallax;
use crate::Route;

struct Card {
    title: &'static str,
    desc: &'static str,
}

const USE_CASES: &[Card] = &[
    Card {
        title: "Create & Sell Digital Products",
        desc: "Create an editable first draft for your next digital product and sell it in minutes.",
    },
    Card {
        title: "Drag & Drop \"Link-In-Bio\" Store",
        desc: "Build, host, and sell any digital product from your link in bio store.",
    },
    Card {
        title: "Media Kits & Campaign Reports",
        desc: "Stop manually updating stats. Share live media kits with brands.",
    },
    Card {
        title: "Landing Pages & Funnels",
        desc: "Launch dedicated landing pages and high-converting funnels.",
    },
    Card {
        title: "Customer Analytics & CRM",
        desc: "Turn followers into customers & manage every relationship.",
    },
    Card {
        title: "Email Marketing",
        desc: "Engage your audience with targeted broadcasts & sequences.",
    },
];

const INTEGRATIONS: &[&str] = &["Stripe", "Shopify", "Notion", "Google Calendar", "Zoom"];

const FEATURES: &[Card] = &[
    Card {
        title: "Calendar",
        desc: "Automate bookings and replace tools like Calendly or Acuity Scheduling.",
    },
    Card {
        title: "Webinars",
        desc: "Host and sell webinars on Zoom or Google Meet.",
    },
    Card {
        title: "Funnels",
        desc: "Build high-converting sales funnels with our drag-and-drop builder.",
    },
    Card {
        title: "Courses",
        desc: "Create, host, and sell online courses with a complete platform.",
    },
    Card {
        title: "Links",
        desc: "Get more clicks with tiles, carousels, lists, and animations.",
    },
    Card {
        title: "Media Kits",
        desc: "Get inbound brand deals with a self-updating media kit.",
    },
    Card {
        title: "Digital Products",
        desc: "Sell e-books, templates, and guides with 1-tap checkout.",
    },
    Card {
        title: "Landing Pages",
        desc: "Create simple, beautiful landing pages in minutes.",
    },
];

const STATS: &[(&str, &str)] = &[
    ("100k+", "Creator Stores"),
    ("1B+", "Followers of members"),
    ("$10M+", "Earned by creators"),
];

const FLOATING_BADGES: &[(&str, &str, &str, &str)] = &[
    ("hero-floating--top", "📅", "Coaching", "0.8s"),
    ("hero-floating--right", "⬇️", "Downloads", "1s"),
    ("hero-floating--bottom", "✉️", "Email Flows", "1.2s"),
];

fn feature_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[function_component(Hero)]
fn hero() -> Html {
    let parallax = use_hero_parallax();

    html! {
        <section class="hero" data-animate="fade-up">
            <div class="hero-content">
                <p class="hero-kicker" data-animate-child="">{"All in one Creator Store"}</p>
                <h1 data-animate-child="">
                    <span class="hero-text-reveal">{"All in one"}</span>
                    <br />
                    <span class="hero-text-reveal" style="animation-delay: 0.2s">{"Creator Store"}</span>
                </h1>
                <p class="hero-sub" data-animate-child="">
                    {"Turn followers into customers & brands into partners with just one platform."}
                </p>
                <div class="hero-actions" data-animate-child="">
                    <Link<Route> to={Route::Subscribe} classes="btn btn-primary hero-cta animate-bounce-in">
                        {"Get Started for free"}
                        <span class="btn-shine"></span>
                    </Link<Route>>
                </div>
                <div class="hero-logos-block" data-animate-child="">
                    <p class="hero-trust-label">
                        {"OVER 100,000 CREATORS & COACHES RUN THEIR BUSINESSES ON Urban Desiii"}
                    </p>
                    <div class="hero-logos">
                        <span class="logo-item">{"Business Insider"}</span>
                        <span class="logo-item">{"TechCrunch"}</span>
                        <span class="logo-item">{"Forbes"}</span>
                    </div>
                </div>
            </div>

            <div class="hero-visual" data-animate="fade-left">
                <div class="hero-diamond-gray" data-animate-child="" style={parallax.diamond_style()} />

                { for FLOATING_BADGES.iter().enumerate().map(|(i, (modifier, icon, title, delay))| html! {
                    <div class={classes!("hero-floating", *modifier, "animate-float")} data-animate-child=""
                        style={format!("animation-delay: {}; {}", delay, parallax.floating_style(i))}>
                        <div class="floating-icon">{*icon}</div>
                        <div class="floating-text">
                            <div class="floating-title">{*title}</div>
                        </div>
                    </div>
                }) }

                <div class="hero-card animate-card-hover hero-card-delayed" data-animate-child="" style="animation-delay: 1.5s">
                    <div class="hero-card-image">
                        <img src="/assets/Images/@urbandesiii.png" alt="Urban Desiii Profile" class="hero-card-profile-image" />
                    </div>
                    <div class="creator-header">
                        <div class="avatar animate-pulse-slow" />
                        <div>
                            <div class="creator-name">{"Lucille"}</div>
                            <div class="creator-handle">{"@lucileugc"}</div>
                        </div>
                    </div>
                    <div class="creator-tags">
                        <span class="tag-item">{"Coaching"}</span>
                        <span class="tag-item">{"Email Flows"}</span>
                        <span class="tag-item">{"Downloads"}</span>
                    </div>
                    <div class="creator-stat-row">
                        <span>{"Join 100,000+ creators"}</span>
                        <span class="creator-pill animate-typing">{"urbandesiii.com/creators/mediakit"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_reveal();

    html! {
        <main class="home">
            <Hero />

            <section class="use-pillar" data-animate="fade-up">
                <h2 data-animate-child="">{"Use Urban Desiii for"}</h2>
                <div class="use-grid">
                    { for USE_CASES.iter().map(|item| html! {
                        <div class="use-card card-hover-effect" data-animate="fade-up" data-animate-child="">
                            <h3>{item.title}</h3>
                            <p>{item.desc}</p>
                            <div class="card-glow"></div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="integrations" data-animate="fade-up">
                <h2 data-animate-child="">{"Integrates with your favorite apps"}</h2>
                <p data-animate-child="">{"Urban Desiii connects to the tools you already use to run your business."}</p>
                <div class="integration-row" data-animate-child="">
                    { for INTEGRATIONS.iter().enumerate().map(|(i, name)| html! {
                        <span class="integration-item" style={format!("animation-delay: {:.1}s", i as f64 * 0.1)}>
                            {*name}
                        </span>
                    }) }
                </div>
            </section>

            <section class="features" data-animate="fade-up">
                <h2 data-animate-child="">{"Everything you need to run your business"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, item)| html! {
                        <div class="feature-item feature-hover-effect" data-animate="fade-up" data-animate-child="">
                            <h3>{item.title}</h3>
                            <p>{item.desc}</p>
                            <div class="feature-number">{feature_number(i)}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="stats" data-animate="fade-up">
                <h2 data-animate="fade-up" data-animate-child="">{"Trusted by a global community of creators"}</h2>
                <div class="stats-row">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="stat-item" data-animate="fade-up" data-animate-child="">
                            <div class="stat-number animate-count">{*number}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="cta animate-gradient-shift" data-animate="fade-up">
                <h2 data-animate-child="">{"Ready to get started?"}</h2>
                <p data-animate-child="">
                    {"Turn followers into customers & brands into partners with just one platform."}
                </p>
                <div data-animate-child="">
                    <Link<Route> to={Route::Subscribe} classes="btn btn-primary cta-button">
                        {"Get started for free"}
                        <span class="btn-arrow">{"→"}</span>
                    </Link<Route>>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_numbered_with_two_digits() {
        assert_eq!(feature_number(0), "01");
        assert_eq!(feature_number(7), "08");
        assert_eq!(feature_number(FEATURES.len() - 1), "08");
    }
}
