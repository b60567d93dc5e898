use serde::Serialize;
use thiserror::Error;

pub const NICHES: &[&str] = &[
    "Fashion",
    "Beauty",
    "Music",
    "Food",
    "Lifestyle",
    "Fitness",
    "Comedy",
    "Tech",
    "Other",
];

/// Raw values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub niche: String,
    pub instagram: String,
    pub tiktok: String,
    pub youtube: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SocialHandles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl SocialHandles {
    fn is_empty(&self) -> bool {
        self.instagram.is_none() && self.tiktok.is_none() && self.youtube.is_none()
    }
}

/// JSON body posted to the subscription endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubscriptionRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub niche: String,
    pub handles: SocialHandles,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubscribeError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{0} handle can't contain spaces")]
    InvalidHandle(&'static str),
    #[error("Add at least one social handle")]
    NoHandles,
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Subscription was rejected (status {0})")]
    Rejected(u16),
}

fn required(value: &str, field: &'static str) -> Result<String, SubscribeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SubscribeError::Missing(field));
    }
    Ok(value.to_string())
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn handle(value: &str, network: &'static str) -> Result<Option<String>, SubscribeError> {
    let value = value.trim();
    let value = value.strip_prefix('@').unwrap_or(value);
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(SubscribeError::InvalidHandle(network));
    }
    Ok(Some(value.to_string()))
}

impl SubscriptionForm {
    pub fn validate(&self) -> Result<SubscriptionRequest, SubscribeError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let email = required(&self.email, "Email")?;
        if !is_valid_email(&email) {
            return Err(SubscribeError::InvalidEmail);
        }
        let niche = required(&self.niche, "Niche")?;

        let handles = SocialHandles {
            instagram: handle(&self.instagram, "Instagram")?,
            tiktok: handle(&self.tiktok, "TikTok")?,
            youtube: handle(&self.youtube, "YouTube")?,
        };
        if handles.is_empty() {
            return Err(SubscribeError::NoHandles);
        }

        Ok(SubscriptionRequest {
            first_name,
            last_name,
            email,
            niche,
            handles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubscriptionForm {
        SubscriptionForm {
            first_name: " Priya ".into(),
            last_name: "Shah".into(),
            email: "priya@example.com".into(),
            niche: "Fashion".into(),
            instagram: "@priya.styles".into(),
            tiktok: String::new(),
            youtube: "  ".into(),
        }
    }

    #[test]
    fn valid_form_is_trimmed_and_normalized() {
        let req = filled().validate().unwrap();
        assert_eq!(req.first_name, "Priya");
        assert_eq!(req.handles.instagram.as_deref(), Some("priya.styles"));
        assert_eq!(req.handles.tiktok, None);
        assert_eq!(req.handles.youtube, None);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = filled();
        form.first_name.clear();
        form.niche.clear();
        assert_eq!(form.validate(), Err(SubscribeError::Missing("First name")));

        let mut form = filled();
        form.niche = "   ".into();
        assert_eq!(form.validate(), Err(SubscribeError::Missing("Niche")));
    }

    #[test]
    fn rejects_malformed_email() {
        let invalid = [
            "priya",
            "@example.com",
            "priya@example",
            "priya@.com",
            "pri ya@example.com",
            "a@b..com",
            "a@@b.com",
            "a@b@c.com",
        ];
        for email in invalid {
            let form = SubscriptionForm {
                email: email.into(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(SubscribeError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn needs_at_least_one_handle() {
        let form = SubscriptionForm {
            instagram: "@".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SubscribeError::NoHandles));

        let form = SubscriptionForm {
            tiktok: "two words".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SubscribeError::InvalidHandle("TikTok")));
    }

    #[test]
    fn request_body_omits_empty_handles() {
        let body = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "first_name": "Priya",
                "last_name": "Shah",
                "email": "priya@example.com",
                "niche": "Fashion",
                "handles": { "instagram": "priya.styles" }
            })
        );
    }

    #[test]
    fn errors_read_as_user_messages() {
        assert_eq!(SubscribeError::Missing("Email").to_string(), "Email is required");
        assert_eq!(
            SubscribeError::Rejected(422).to_string(),
            "Subscription was rejected (status 422)"
        );
    }
}
