//! Newsletter subscriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterSubscription {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(
        email(message = "Enter a valid email address"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,
}

impl SubscribeRequest {
    /// Stored form of the address. Uniqueness is checked on this value.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_email_is_lowercase() {
        let req = SubscribeRequest {
            email: "Reader@Example.ORG".into(),
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.normalized_email(), "reader@example.org");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let req = SubscribeRequest {
            email: "reader-at-example".into(),
        };
        assert!(req.validate().is_err());
    }
}
