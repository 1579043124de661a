//! In-memory item list backing the shopping-list screen.
//!
//! Every mutation rebuilds the sequence with append/map/filter and swaps it in
//! whole. Nothing here can fail: input the list cannot use is ignored, and ids
//! that do not match anything turn the call into a no-op.

use tracing::debug;

use crate::models::{Item, ItemId};

/// Ordered list of items plus the id counter that feeds new entries.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Empty list; the first item added receives id 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new item built from the raw dialog fields.
    ///
    /// A blank name or blank quantity declines the add and returns `None`.
    /// Any other quantity text that is not an integer is stored as `0`.
    pub fn add(&mut self, name: &str, quantity: &str) -> Option<ItemId> {
        let name = name.trim();
        if name.is_empty() || quantity.trim().is_empty() {
            debug!("ignoring add with blank name or quantity");
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        let item = Item::new(id, name, parse_quantity(quantity));
        debug!(id, name = %item.name, quantity = item.quantity, "item added");

        self.items = self
            .items
            .iter()
            .cloned()
            .chain(std::iter::once(item))
            .collect();
        Some(id)
    }

    /// Put `id` into edit mode and take every other item out of it. An unknown
    /// id therefore leaves nothing in edit mode.
    pub fn begin_edit(&mut self, id: ItemId) {
        debug!(id, "begin edit");
        self.items = self
            .items
            .iter()
            .map(|item| item.with_editing(item.id == id))
            .collect();
    }

    /// Write the edited fields back to the item with `id` and close its edit
    /// mode. Other items are left exactly as they were.
    pub fn commit_edit(&mut self, id: ItemId, new_name: &str, new_quantity: i64) {
        if self.get(id).is_none() {
            debug!(id, "commit for unknown item ignored");
            return;
        }
        debug!(id, name = new_name, quantity = new_quantity, "edit committed");
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item::new(id, new_name, new_quantity)
                } else {
                    item.clone()
                }
            })
            .collect();
    }

    /// Close edit mode on `id` without touching its name or quantity.
    pub fn cancel_edit(&mut self, id: ItemId) {
        if self.get(id).is_none() {
            return;
        }
        debug!(id, "edit cancelled");
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    item.with_editing(false)
                } else {
                    item.clone()
                }
            })
            .collect();
    }

    /// Remove the item with `id`, if present.
    pub fn delete(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        if self.items.len() < before {
            debug!(id, "item deleted");
        } else {
            debug!(id, "delete for unknown item ignored");
        }
    }

    /// Current list in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parse a quantity field the way the add dialog does: surrounding whitespace
/// is ignored and anything that is not an integer counts as `0`.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> ItemStore {
        let mut store = ItemStore::new();
        for name in names {
            store.add(name, "1");
        }
        store
    }

    fn editing_ids(store: &ItemStore) -> Vec<ItemId> {
        store
            .items()
            .iter()
            .filter(|item| item.is_editing)
            .map(|item| item.id)
            .collect()
    }

    #[test]
    fn add_appends_one_item_with_fresh_id() {
        let mut store = store_with(&["Milk", "Eggs"]);
        let existing: Vec<ItemId> = store.items().iter().map(|item| item.id).collect();

        let id = store.add("Bread", "3").expect("valid add");

        assert_eq!(store.len(), 3);
        assert!(!existing.contains(&id));
        let last = store.items().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, "Bread");
        assert_eq!(last.quantity, 3);
        assert!(!last.is_editing);
    }

    #[test]
    fn add_with_blank_fields_is_ignored() {
        let mut store = store_with(&["Milk"]);

        assert_eq!(store.add("", "5"), None);
        assert_eq!(store.add("   ", "5"), None);
        assert_eq!(store.add("Eggs", ""), None);
        assert_eq!(store.add("Eggs", "  "), None);

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].name, "Milk");
    }

    #[test]
    fn add_with_non_numeric_quantity_stores_zero() {
        let mut store = ItemStore::new();
        let id = store.add("Apples", "a dozen").unwrap();
        assert_eq!(store.get(id).unwrap().quantity, 0);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store_with(&["Milk", "Eggs"]);
        store.delete(1);
        let id = store.add("Bread", "1").unwrap();

        assert_eq!(id, 3);
        let ids: Vec<ItemId> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn begin_edit_keeps_a_single_editor() {
        let mut store = store_with(&["Milk", "Eggs", "Bread"]);

        store.begin_edit(1);
        assert_eq!(editing_ids(&store), vec![1]);

        store.begin_edit(3);
        assert_eq!(editing_ids(&store), vec![3]);
    }

    #[test]
    fn begin_edit_on_unknown_id_clears_all_editors() {
        let mut store = store_with(&["Milk", "Eggs"]);
        store.begin_edit(2);

        store.begin_edit(99);

        assert!(editing_ids(&store).is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn commit_edit_touches_only_the_matching_item() {
        let mut store = store_with(&["Milk", "Eggs", "Bread"]);
        let before = store.items().to_vec();
        store.begin_edit(2);

        store.commit_edit(2, "Free-range eggs", 12);

        let items = store.items();
        assert_eq!(items[0], before[0]);
        assert_eq!(items[2], before[2]);
        assert_eq!(items[1], Item::new(2, "Free-range eggs", 12));
    }

    #[test]
    fn commit_edit_finds_item_by_id_after_reordering_deletes() {
        let mut store = store_with(&["Milk", "Eggs", "Bread"]);
        store.delete(1);
        store.begin_edit(3);

        store.commit_edit(3, "Rye bread", 2);

        assert_eq!(store.items()[0].name, "Eggs");
        assert_eq!(store.items()[1], Item::new(3, "Rye bread", 2));
    }

    #[test]
    fn commit_edit_on_unknown_id_is_ignored() {
        let mut store = store_with(&["Milk"]);
        let before = store.items().to_vec();

        store.commit_edit(42, "Ghost", 1);

        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn cancel_edit_keeps_committed_values() {
        let mut store = store_with(&["Milk"]);
        store.begin_edit(1);

        store.cancel_edit(1);

        assert_eq!(store.items()[0], Item::new(1, "Milk", 1));
    }

    #[test]
    fn delete_removes_only_that_id() {
        let mut store = store_with(&["Milk", "Eggs", "Bread"]);

        store.delete(2);

        assert_eq!(store.len(), 2);
        assert!(store.get(2).is_none());
        assert!(store.items().iter().all(|item| item.id != 2));
    }

    #[test]
    fn delete_unknown_id_leaves_list_unchanged() {
        let mut store = store_with(&["Milk", "Eggs"]);
        let before = store.items().to_vec();

        store.delete(7);

        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn milk_walkthrough() {
        let mut store = ItemStore::new();

        store.add("Milk", "2");
        assert_eq!(store.items(), &[Item::new(1, "Milk", 2)]);

        store.add("", "5");
        assert_eq!(store.items(), &[Item::new(1, "Milk", 2)]);

        store.begin_edit(1);
        assert_eq!(store.items(), &[Item::new(1, "Milk", 2).with_editing(true)]);

        store.commit_edit(1, "Milk", 3);
        assert_eq!(store.items(), &[Item::new(1, "Milk", 3)]);

        store.delete(1);
        assert!(store.is_empty());
    }

    #[test]
    fn parse_quantity_trims_and_defaults() {
        assert_eq!(parse_quantity(" 4 "), 4);
        assert_eq!(parse_quantity("-2"), -2);
        assert_eq!(parse_quantity("two"), 0);
        assert_eq!(parse_quantity(""), 0);
    }
}
