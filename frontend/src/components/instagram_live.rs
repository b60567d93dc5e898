use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

/// The widget script tag for as long as it lives in `<body>`.
struct EmbedScript(Element);

impl EmbedScript {
    fn inject(src: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        let script = document.create_element("script").ok()?;
        script.set_attribute("src", src).ok()?;
        script.set_attribute("async", "").ok()?;
        if let Err(e) = body.append_child(&script) {
            warn!("Could not load Instagram embed: {:?}", e);
            return None;
        }
        Some(Self(script))
    }
}

impl Drop for EmbedScript {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Placeholder that Instagram's embed script fills with the latest post.
#[function_component(InstagramLive)]
pub fn instagram_live() -> Html {
    use_effect_with_deps(
        |_| {
            let script = EmbedScript::inject(config::INSTAGRAM_EMBED_SCRIPT);
            move || drop(script)
        },
        (),
    );

    html! {
        <div class="instagram-live-container">
            <blockquote
                class="instagram-media"
                data-instgrm-permalink={config::INSTAGRAM_PROFILE_URL}
                data-instgrm-version="14"
                style="background: #FFF; border: 0; border-radius: 16px; box-shadow: 0 10px 30px rgba(0,0,0,0.1); margin: 1rem; max-width: 320px; min-width: 280px; padding: 0; width: 100%;"
            ></blockquote>
        </div>
    }
}
