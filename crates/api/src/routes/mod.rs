//! HTTP route handlers, one module per content area.

pub mod albums;
pub mod books;
pub mod contact;
pub mod events;
pub mod health;
pub mod hero;
pub mod links;
pub mod news;
pub mod newsletter;
pub mod notices;
pub mod publications;
pub mod site_text;
pub mod uploads;
pub mod videos;
