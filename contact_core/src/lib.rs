//! Contact manager core: REST client, form validation, list presentation and
//! the application state the GTK front end renders.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod flash;
pub mod form;
pub mod presenter;
pub mod state;
pub mod utils;

pub use api::{ApiClient, Contact, ContactStore, NewContact};
pub use config::Settings;
pub use controller::execute;
pub use error::{ApiError, ConfigError};
pub use form::{ContactForm, Field, FieldError};
pub use presenter::{AvatarColor, ContactCard, SortKey};
pub use state::{AppState, Command, CopyKind, CopyTarget, Event, FlashKind, Request};
