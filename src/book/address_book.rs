//! Address book keyed by contact name.
//!
//! Lookups are exact-name hash lookups. Iteration follows insertion order;
//! overwriting a name keeps the entry where it was first inserted.
//! Deleting scans the order list, so it is linear in the number of records.

use crate::domain::Name;
use crate::models::Record;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A directory of contact records, one per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<Name, Record>,
    order: Vec<Name>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced wholesale; phones
    /// are not merged.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().clone();
        match self.records.insert(name.clone(), record) {
            Some(_) => debug!(contact = %name, "Overwrote record"),
            None => {
                debug!(contact = %name, "Added record");
                self.order.push(name);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for in-place editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`.
    ///
    /// Missing names are a no-op and yield `None`. O(n) in the number of
    /// records, since the insertion order list is scanned.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|n| n.as_str() != name);
        debug!(contact = name, "Deleted record");
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.order.iter()
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            names: self.order.iter(),
            records: &self.records,
        }
    }
}

/// Insertion-ordered iterator over an [`AddressBook`].
pub struct Iter<'a> {
    names: std::slice::Iter<'a, Name>,
    records: &'a HashMap<Name, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Name, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        self.records.get(name).map(|record| (name, record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a Name, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, record) in self {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name);
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));

        let found = book.find("John").unwrap();
        assert_eq!(found.name().as_str(), "John");
        assert!(book.find("john").is_none());
        assert!(book.contains("John"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_duplicate_name_overwrites_without_merge() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));
        book.add_record(record("Jane", &["9876543210"]));
        book.add_record(record("John", &["5555555555"]));

        assert_eq!(book.len(), 2);
        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 5555555555"
        );
        let names: Vec<&str> = book.names().map(Name::as_str).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", &["9876543210"]));

        assert!(book.delete("Jane").is_some());
        assert!(book.delete("Jane").is_none());
        assert!(book.is_empty());
        assert_eq!(book.iter().count(), 0);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Zoe", "Adam", "Mia"] {
            book.add_record(Record::new(name));
        }
        book.delete("Adam");
        book.add_record(Record::new("Adam"));

        let names: Vec<&str> = book.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Mia", "Adam"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890"]));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();

        assert!(book.find("John").unwrap().find_phone("1112223333").is_some());
    }

    #[test]
    fn test_display_lists_records() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1234567890", "5555555555"]));
        book.add_record(record("Jane", &["9876543210"]));

        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555\n\
             Contact name: Jane, phones: 9876543210\n"
        );
    }
}
