//! Contact form messages and the organization's contact details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A message submitted through the public contact form.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_handled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactMessageRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Subject must be at most 255 characters"))]
    pub subject: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Public view of a contact message. Handling state stays internal.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            subject: m.subject,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

/// Postal, phone and map details shown on the contact page.
#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub id: i64,
    pub organization: String,
    pub organization_si: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub address_si: String,
    pub map_url: String,
    pub map_embed: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub map_zoom: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_map_zoom() -> i16 {
    15
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactInfoRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Organization must be at most 255 characters"))]
    pub organization: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Organization must be at most 255 characters"))]
    pub organization_si: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Phone must be at most 100 characters"))]
    pub phone: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_email"))]
    pub email: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub address_si: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub map_url: String,

    #[serde(default)]
    pub map_embed: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,

    #[serde(default = "default_map_zoom")]
    #[validate(custom(function = "shared::validation::validate_map_zoom"))]
    pub map_zoom: i16,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactInfoRequest {
    #[validate(length(max = 255, message = "Organization must be at most 255 characters"))]
    pub organization: Option<String>,

    #[validate(length(max = 255, message = "Organization must be at most 255 characters"))]
    pub organization_si: Option<String>,

    #[validate(length(max = 100, message = "Phone must be at most 100 characters"))]
    pub phone: Option<String>,

    #[validate(custom(function = "shared::validation::validate_blank_or_email"))]
    pub email: Option<String>,

    pub address: Option<String>,

    pub address_si: Option<String>,

    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub map_url: Option<String>,

    pub map_embed: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<Option<f64>>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<Option<f64>>,

    #[validate(custom(function = "shared::validation::validate_map_zoom"))]
    pub map_zoom: Option<i16>,
}
