use std::fmt;

use serde::{Deserialize, Serialize};

/// A carryable object. Identity is the name: two items with the same name
/// are the same kind of item, and the inventory matches on nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The player's held items, in pickup order. Duplicates are allowed and
/// insertion order is the display order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff any held item has this name.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// True iff at least one of the given items is currently held.
    /// This is an "any", not an "all".
    pub fn has_any(&self, items: &[Item]) -> bool {
        items.iter().any(|item| self.has_item(&item.name))
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_items(&mut self, items: &[Item]) {
        self.items.extend_from_slice(items);
    }

    /// Remove the first item with this name. No-op if none is held.
    pub fn remove_item(&mut self, name: &str) {
        if let Some(pos) = self.items.iter().position(|item| item.name == name) {
            self.items.remove(pos);
        }
    }

    /// Held items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_has_then_remove() {
        let mut inv = Inventory::new();
        assert!(!inv.has_item("Lantern"));

        inv.add_item(Item::new("Lantern"));
        assert!(inv.has_item("Lantern"));

        inv.remove_item("Lantern");
        assert!(!inv.has_item("Lantern"));
    }

    #[test]
    fn remove_absent_is_a_no_op() {
        let mut inv = Inventory::new();
        inv.add_item(Item::new("Rope"));

        inv.remove_item("Lantern");
        assert_eq!(inv.len(), 1);
        assert!(inv.has_item("Rope"));
    }

    #[test]
    fn duplicates_kept_in_insertion_order() {
        let mut inv = Inventory::new();
        inv.add_items(&[Item::new("Coin"), Item::new("Rope"), Item::new("Coin")]);

        let names: Vec<&str> = inv.items().iter().map(Item::name).collect();
        assert_eq!(names, ["Coin", "Rope", "Coin"]);
    }

    #[test]
    fn remove_takes_only_the_first_duplicate() {
        let mut inv = Inventory::new();
        inv.add_items(&[Item::new("Coin"), Item::new("Coin")]);

        inv.remove_item("Coin");
        assert_eq!(inv.len(), 1);
        assert!(inv.has_item("Coin"));
    }

    #[test]
    fn has_any_matches_on_at_least_one() {
        let mut inv = Inventory::new();
        inv.add_item(Item::new("Rope"));

        assert!(inv.has_any(&[Item::new("Lantern"), Item::new("Rope")]));
        assert!(!inv.has_any(&[Item::new("Lantern"), Item::new("Coin")]));
        assert!(!inv.has_any(&[]));
    }
}
