//! Record model: a named contact and its phone numbers.

use crate::domain::{Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact in the address book.
///
/// Phones keep insertion order and may contain duplicates. The name is fixed
/// at creation; it is the key the record is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Validation` if `phone` is not 10 digits.
    /// The phone list is left untouched in that case.
    pub fn add_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let phone = Phone::new(phone).map_err(|e| {
            debug!(contact = %self.name, "Rejected phone: {}", e);
            e
        })?;
        debug!(contact = %self.name, phone = %phone, "Added phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        if removed > 0 {
            debug!(contact = %self.name, phone, removed, "Removed phone");
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// On any error the phone list is unchanged.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::NotFound` if no phone equals `old`, whatever `new` is
    /// - `AddressBookError::Validation` if `new` is not 10 digits
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| AddressBookError::NotFound(old.to_string()))?;

        let replacement = Phone::new(new)?;

        debug!(contact = %self.name, old, new, "Edited phone");
        self.phones[idx] = replacement;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
