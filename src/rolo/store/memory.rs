use super::DataStore;
use crate::error::Result;
use crate::model::Contact;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        Ok(())
    }
}
