//! Domain model for the shopping list. Items are plain value records: the
//! store never mutates one in place, it swaps in a rebuilt copy instead, so
//! any `Item` handed to the UI stays a faithful snapshot of the moment it was
//! read.

use std::fmt;

/// Identifier handed out by the store. Ids come from a counter that only ever
/// grows, so a deleted item's id is never seen again.
pub type ItemId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single shopping-list entry.
pub struct Item {
    /// Unique for the lifetime of the store that created it.
    pub id: ItemId,
    /// What to buy, as the user typed it (surrounding whitespace trimmed).
    pub name: String,
    /// How many to buy. Unparseable input is stored as `0`.
    pub quantity: i64,
    /// Whether the item currently has the edit dialog open. At most one item
    /// in a list carries `true`.
    pub is_editing: bool,
}

impl Item {
    /// Build a fresh, non-editing item.
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            is_editing: false,
        }
    }

    /// Copy of this item with the edit flag set to `editing`.
    pub fn with_editing(&self, editing: bool) -> Self {
        Self {
            is_editing: editing,
            ..self.clone()
        }
    }

    /// Quantity label shown next to the name in list rows.
    pub fn quantity_label(&self) -> String {
        format!("Qty: {}", self.quantity)
    }
}

impl fmt::Display for Item {
    /// Render as `name (Qty: n)`, which is what status messages refer to.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.quantity_label())
    }
}
