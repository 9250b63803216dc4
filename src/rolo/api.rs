//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! contact operations, regardless of the UI in front of it. The facade
//! only dispatches; business logic lives in `commands/*.rs` and nothing
//! here touches stdout or stderr.
//!
//! `ContactsApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

pub struct ContactsApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ContactsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_contact(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn add_contact(
        &mut self,
        name: String,
        email: String,
        phone: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, email, phone)
    }

    pub fn remove_contact(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
