//! Contact Storage
//!
//! The directory keeps every contact in process memory. Nothing is persisted: the store
//! starts empty and is dropped with the process.
//!
//! ## Id assignment
//! A new contact gets `number of stored contacts + 1`. Ids freed by a delete are therefore
//! handed out again, and a create that lands on an id still in use replaces that entry.

use super::error::ContactError;
use super::types::Contact;

use std::collections::HashMap;
use std::future::Future;
use tokio::sync::RwLock;

/// Storage operations behind the `/contacts` route.
///
/// Handlers are generic over this trait and receive the repository through an
/// `Extension`, so every router (and every test) owns its own instance.
pub trait ContactRepository: Send + Sync + 'static {
    /// Stores `contact` under a freshly computed id and returns the stored record.
    fn create(&self, contact: Contact) -> impl Future<Output = Contact> + Send;

    fn list(&self) -> impl Future<Output = Vec<Contact>> + Send;

    fn get(&self, id: u32) -> impl Future<Output = Result<Contact, ContactError>> + Send;

    /// Replaces every field of the contact stored under `id`. The stored `id` never changes.
    fn update(
        &self,
        id: u32,
        contact: Contact,
    ) -> impl Future<Output = Result<(), ContactError>> + Send;

    fn delete(&self, id: u32) -> impl Future<Output = Result<(), ContactError>> + Send;

    fn len(&self) -> impl Future<Output = usize> + Send;

    fn is_empty(&self) -> impl Future<Output = bool> + Send;
}

/// `HashMap` backed repository.
///
/// A single `RwLock` guards the map, so the count read and the insert of a create are
/// one atomic step and concurrent writers cannot lose updates.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<HashMap<u32, Contact>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for InMemoryContactStore {
    async fn create(&self, mut contact: Contact) -> Contact {
        let mut contacts = self.contacts.write().await;

        let id = contacts.len() as u32 + 1;
        contact.id = id;

        if contacts.insert(id, contact.clone()).is_some() {
            tracing::warn!("Contact {} replaced by a new contact with the same id", id);
        }
        tracing::debug!("Created contact {}", id);

        contact
    }

    async fn list(&self) -> Vec<Contact> {
        let contacts = self.contacts.read().await;

        let mut all: Vec<Contact> = contacts.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        all
    }

    async fn get(&self, id: u32) -> Result<Contact, ContactError> {
        self.contacts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ContactError::NotFound)
    }

    async fn update(&self, id: u32, mut contact: Contact) -> Result<(), ContactError> {
        let mut contacts = self.contacts.write().await;

        let slot = contacts.get_mut(&id).ok_or(ContactError::NotFound)?;
        contact.id = id;
        *slot = contact;

        tracing::debug!("Updated contact {}", id);
        Ok(())
    }

    async fn delete(&self, id: u32) -> Result<(), ContactError> {
        match self.contacts.write().await.remove(&id) {
            Some(_) => {
                tracing::debug!("Deleted contact {}", id);
                Ok(())
            }
            None => Err(ContactError::NotFound),
        }
    }

    async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}
