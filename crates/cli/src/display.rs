//! Column rendering and user-facing messages.

use std::io::{self, Write};

use stockroom_core::DomainError;
use stockroom_inventory::Record;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const QTY_WIDTH: usize = 10;
const LOCATION_WIDTH: usize = 15;
const RULE_WIDTH: usize = 50;

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<QTY_WIDTH$}{:<LOCATION_WIDTH$}",
        "ID", "Name", "Qty", "Location"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<QTY_WIDTH$}{:<LOCATION_WIDTH$}",
        record.id().to_string(),
        record.name(),
        record.quantity(),
        record.location()
    )
}

/// Header followed by one row per record.
pub fn write_table<'a, W, I>(out: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    write_header(out)?;
    for record in records {
        write_record(out, record)?;
    }
    Ok(())
}

/// Message shown for a rejected command.
pub fn describe(error: &DomainError) -> &'static str {
    match error {
        DomainError::DuplicateId(_) => "ID already exists!",
        DomainError::DuplicateName(_) => "Product name already exists!",
        DomainError::NotFound(_) => "Product not found.",
        DomainError::NothingToUndo => "Nothing to undo.",
        DomainError::ConflictId(_) => "Cannot undo: ID already exists in current inventory.",
        DomainError::ConflictName(_) => {
            "Cannot undo: Product name already exists in current inventory."
        }
        DomainError::InvalidId(_) => "Invalid number.",
    }
}
