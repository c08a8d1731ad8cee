pub mod client;
pub mod models;

pub use client::{ApiClient, ContactStore};
pub use models::{Contact, NewContact};
