//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts the persistence adapter: the contact
//! sequence is always read and written as a whole. This is a whole-file
//! read/rewrite model, not an append log — every mutation re-reads and
//! re-writes the entire record set.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON-file storage. The backing file is a
//!   pretty-printed JSON array of contact objects; its path is injected at
//!   construction.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, fast isolated test execution.
//!
//! Storage is abstracted behind a trait so command logic can be tested
//! without a filesystem and so future backends don't touch core logic.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for contact persistence.
pub trait DataStore {
    /// Load the full contact sequence from the backing store.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Persist the full contact sequence, replacing previous contents.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
