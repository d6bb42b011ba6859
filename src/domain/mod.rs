//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. Phone numbers are
//! validated at construction time, so an invalid number can never be stored
//! in a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
