//! The address book: a directory of records keyed by contact name.

pub mod address_book;

pub use address_book::{AddressBook, Iter};
