use yew::prelude::*;

use crate::animation::observer::use_scroll_reveal;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_reveal();

    html! {
        <main class="about-page">
            <section class="about-hero" data-animate="fade-up">
                <div class="about-content">
                    <div class="about-intro" data-animate-child="">
                        <h2>{"About Urban Desiii"}</h2>
                        <p class="about-description">
                            {"Urban Desiii is a social media and marketing agency that specializes in organic growth, and personal branding."}
                        </p>
                        <p>
                            {"We handle everything from managing influencers, to creating content, branding small businesses, and engaging with your niche audience to reach your goals."}
                        </p>
                        <p>
                            {"We keep you up to date on all of the latest South Asian news in Bollywood, and through creators, delivering the hottest trends from clothing brands, to upcoming music artists."}
                        </p>
                    </div>
                </div>

                <div class="about-stats" data-animate-child="">
                    <div class="about-stat-card">
                        <h3>{"Founded in 2018"}</h3>
                        <p>{"Urban Desiii has grown into a team of 10 - based all around the world!"}</p>
                    </div>
                    <div class="about-stat-card">
                        <h3>{"Global Team"}</h3>
                        <p>{"Our representatives specialize in any, and all audiences - from clothing brands, music artists, influencers/creators, services, and more!"}</p>
                    </div>
                </div>

                <div class="about-story" data-animate-child="">
                    <div class="story-highlight">
                        <h3>{"Our Story"}</h3>
                        <p>
                            {"Urban Desiii was the first South Asian influencer management agency, that represents creators from a variety of niches."}
                        </p>
                        <p>
                            {"We were inspired to start our agency from the lack of representation that South Asian brands and creators had within the industry."}
                        </p>
                        <p>
                            {"While we have expanded to different demographics, our roots will always highlight South Asian creators and small businesses."}
                        </p>
                    </div>
                </div>
            </section>
        </main>
    }
}
