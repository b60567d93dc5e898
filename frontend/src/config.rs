/// Where the subscription form posts to. Set `URBANDESIII_SUBSCRIBE_ENDPOINT`
/// at build time to wire it up; without it the form only validates.
pub fn get_subscribe_endpoint() -> Option<&'static str> {
    non_empty(option_env!("URBANDESIII_SUBSCRIBE_ENDPOINT"))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

pub const INSTAGRAM_EMBED_SCRIPT: &str = "//www.instagram.com/embed.js";
pub const INSTAGRAM_PROFILE_URL: &str = "https://www.instagram.com/urbandesiii/";
pub const CONTACT_EMAIL: &str = "hello@urbandesiii.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_endpoint_counts_as_unset() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(
            non_empty(Some(" https://api.example.com/subscribe ")),
            Some("https://api.example.com/subscribe")
        );
    }
}
