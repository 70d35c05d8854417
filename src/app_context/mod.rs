use crate::storage::contacts::HashMapContactsStorage;
use crate::storage::interface::IContactsStorage;

#[derive(Clone, Default)]
pub struct AppContext<CS: IContactsStorage> {
    pub contacts: CS,
}

pub fn init() -> AppContext<HashMapContactsStorage> {
    AppContext::default()
}
