use crate::contacts::models::Contact;
use crate::contacts::requests::SaveContactRequest;

pub trait IContactsStorage: ContactsRepo {}

pub trait ContactsRepo {
    async fn all(&self) -> Vec<Contact>;

    async fn get(&self, contact_id: u64) -> Option<Contact>;

    async fn create(&self, details: SaveContactRequest) -> Contact;

    async fn update(&self, contact_id: u64, details: SaveContactRequest) -> Option<Contact>;

    async fn delete(&self, contact_id: u64) -> bool;
}
