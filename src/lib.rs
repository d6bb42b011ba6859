//! Address Book - an in-memory contact directory with validated phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact names and phone numbers
//! - **models**: The contact record and its phone operations
//! - **book**: The address book mapping names to records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut john = Record::new("John");
//! john.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! let john = book.find_mut("John").unwrap();
//! john.edit_phone("1234567890", "1112223333").unwrap();
//! assert_eq!(john.to_string(), "Contact name: John, phones: 1112223333");
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::Record;
