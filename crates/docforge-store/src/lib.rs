//! Persistence backends for templates and generated documents.
//!
//! Backends only create and read; nothing here updates or deletes an entity
//! once stored.

pub mod atomic;
pub mod error;
pub mod file;
pub mod memory;
pub mod postgres;
pub mod store;

pub use atomic::write_bytes_new;
pub use error::{EntityKind, Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{DocumentStore, Store, TemplateStore};
