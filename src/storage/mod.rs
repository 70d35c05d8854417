pub mod contacts;
pub mod interface;
