//! Request-handling boundary for Formsmith.
//!
//! [`FormService`] re-expresses every operation of the form-builder API as a
//! library call over injected capabilities: a [`FormStore`] for persistence,
//! an [`Authenticator`] for caller identity, and an optional schema
//! generator. Every failure maps onto a stable HTTP-equivalent status so a
//! web adapter can relay it verbatim.
//!
//! [`FormStore`]: formsmith_store::FormStore

pub mod auth;
pub mod error;
pub mod service;
pub mod slug;

pub use auth::{Authenticator, Identity, StaticAuthenticator};
pub use error::{Result, ServiceError};
pub use service::{CreatedForm, FormService};
pub use slug::form_slug;
