//! Persistence boundary for Formsmith forms and responses.
//!
//! [`FormStore`] is the capability the service layer depends on. The crate
//! ships a Postgres implementation and an in-memory one so service and CLI
//! tests never need a database.

pub mod errors;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use errors::{Result, StoreError};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use record::{FormRecord, FormWithCount, NewForm, ResponseRecord};
pub use store::FormStore;
