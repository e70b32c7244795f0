//! Top-level menu numbering and rendering.

use std::io::{self, Write};

/// Top-level menu entries, numbered as shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    ViewAll,
    SortByName,
    Search,
    LowStock,
    UpdateQuantity,
    Undo,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::ViewAll,
        MenuChoice::SortByName,
        MenuChoice::Search,
        MenuChoice::LowStock,
        MenuChoice::UpdateQuantity,
        MenuChoice::Undo,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Remove => 2,
            MenuChoice::ViewAll => 3,
            MenuChoice::SortByName => 4,
            MenuChoice::Search => 5,
            MenuChoice::LowStock => 6,
            MenuChoice::UpdateQuantity => 7,
            MenuChoice::Undo => 8,
            MenuChoice::Exit => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Product",
            MenuChoice::Remove => "Remove Product (Full)",
            MenuChoice::ViewAll => "View All Products",
            MenuChoice::SortByName => "Sort Products by Name",
            MenuChoice::Search => "Search Product by Name",
            MenuChoice::LowStock => "Show Low Stock Products",
            MenuChoice::UpdateQuantity => "Update Product Quantity",
            MenuChoice::Undo => "Undo Last Removed Product",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a typed menu number; anything else is `None`.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let n: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == n)
    }

    /// Whether the entry acts on existing items (and so is pointless on an empty store).
    pub fn needs_items(self) -> bool {
        !matches!(self, MenuChoice::Add | MenuChoice::Undo | MenuChoice::Exit)
    }
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "========== INVENTORY MANAGEMENT SYSTEM ==========")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    writeln!(out, "=================================================")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}
