//! Address Book - demo driver
//!
//! Builds a small address book, edits it, and prints the results to stdout.
//! Logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Log level: {}", config.log_level);

    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    for (_, record) in &book {
        println!("{}", record);
    }

    let john = book.find_mut("John").context("John is missing")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    if let Some(phone) = john.find_phone("5555555555") {
        println!("{}: {}", john.name(), phone);
    }

    book.delete("Jane");
    info!("{} record(s) left", book.len());

    Ok(())
}
