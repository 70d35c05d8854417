use crate::contacts::models::Contact;
use crate::contacts::requests::SaveContactRequest;
use crate::storage::interface::{ContactsRepo, IContactsStorage};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct ContactsTable {
    contacts: HashMap<u64, Contact>,
    last_id: u64,
}

#[derive(Clone, Default)]
pub struct HashMapContactsStorage {
    storage: Arc<RwLock<ContactsTable>>,
}

impl IContactsStorage for HashMapContactsStorage {}

impl ContactsRepo for HashMapContactsStorage {
    async fn all(&self) -> Vec<Contact> {
        let table = self.storage.read().await;
        let mut contacts: Vec<Contact> = table.contacts.values().cloned().collect();
        contacts.sort_by_key(|contact| contact.id);
        contacts
    }

    async fn get(&self, contact_id: u64) -> Option<Contact> {
        self.storage.read().await.contacts.get(&contact_id).cloned()
    }

    async fn create(&self, details: SaveContactRequest) -> Contact {
        let mut table = self.storage.write().await;
        table.last_id += 1;
        let contact = Contact {
            id: table.last_id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone: details.phone,
        };
        table.contacts.insert(contact.id, contact.clone());
        contact
    }

    async fn update(&self, contact_id: u64, details: SaveContactRequest) -> Option<Contact> {
        let mut table = self.storage.write().await;
        let contact = table.contacts.get_mut(&contact_id)?;
        contact.first_name = details.first_name;
        contact.last_name = details.last_name;
        contact.email = details.email;
        contact.phone = details.phone;
        Some(contact.clone())
    }

    async fn delete(&self, contact_id: u64) -> bool {
        self.storage
            .write()
            .await
            .contacts
            .remove(&contact_id)
            .is_some()
    }
}
