//! Newsletter, contact message and contact info entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{ContactInfo, ContactMessage, NewsletterSubscription};

/// Database row mapping for the newsletter_subscriptions table.
#[derive(Debug, Clone, FromRow)]
pub struct NewsletterSubscriptionEntity {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsletterSubscriptionEntity> for NewsletterSubscription {
    fn from(entity: NewsletterSubscriptionEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the contact_messages table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_handled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessageEntity> for ContactMessage {
    fn from(entity: ContactMessageEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            is_handled: entity.is_handled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the contact_infos table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactInfoEntity {
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

impl From<ContactInfoEntity> for ContactInfo {
    fn from(entity: ContactInfoEntity) -> Self {
        Self {
            id: entity.id,
            organization: entity.organization,
            organization_si: entity.organization_si,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
            address_si: entity.address_si,
            map_url: entity.map_url,
            map_embed: entity.map_embed,
            latitude: entity.latitude,
            longitude: entity.longitude,
            map_zoom: entity.map_zoom,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
