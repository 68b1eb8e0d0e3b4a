use serde::{Deserialize, Serialize};

use crate::inventory::{Inventory, Item};

// ---------------------------------------------------------------------------
// Action tag
// ---------------------------------------------------------------------------

/// What an effect does to the inventory. A bare tag: the items involved are
/// supplied at execution time, so one `Action` value serves any number of
/// nodes and choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Add items to the inventory.
    Pickup,
    /// Consume one held item.
    Use,
    /// No action attached.
    #[default]
    None,
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Result of executing an action: whether it took effect, and the line to
/// show the player (if any). Failure is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub succeeded: bool,
    pub message: Option<String>,
}

impl ActionOutcome {
    fn success(message: String) -> Self {
        Self {
            succeeded: true,
            message: Some(message),
        }
    }

    fn failure() -> Self {
        Self {
            succeeded: false,
            message: None,
        }
    }

    fn failure_with(message: String) -> Self {
        Self {
            succeeded: false,
            message: Some(message),
        }
    }
}

impl Action {
    /// Apply this action to the inventory. The only side effect is the
    /// inventory mutation described; everything else is reported back in
    /// the outcome.
    pub fn execute(
        self,
        inventory: &mut Inventory,
        pickup_items: &[Item],
        use_item: Option<&Item>,
    ) -> ActionOutcome {
        match self {
            Action::Pickup => {
                if pickup_items.is_empty() {
                    return ActionOutcome::failure();
                }
                inventory.add_items(pickup_items);
                let message = if pickup_items.len() == 1 {
                    format!("\n[INFO] You picked up a {}!", pickup_items[0])
                } else {
                    let mut lines = String::from("\nYou picked up:");
                    for item in pickup_items {
                        lines.push_str(&format!("\n- {item}"));
                    }
                    lines.push('\n');
                    lines
                };
                ActionOutcome::success(message)
            }
            Action::Use => match use_item {
                Some(item) if inventory.has_item(item.name()) => {
                    inventory.remove_item(item.name());
                    ActionOutcome::success(format!("\n[INFO] You used a {item}!"))
                }
                Some(item) => ActionOutcome::failure_with(format!(
                    "\n[INFO] You don't have a {item} to use."
                )),
                // A Use effect with no item configured can never succeed.
                None => ActionOutcome::failure(),
            },
            Action::None => ActionOutcome::failure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_with_empty_list_fails_without_mutating() {
        let mut inv = Inventory::new();
        let outcome = Action::Pickup.execute(&mut inv, &[], None);

        assert!(!outcome.succeeded);
        assert!(outcome.message.is_none());
        assert!(inv.is_empty());
    }

    #[test]
    fn pickup_single_item_reports_it_by_name() {
        let mut inv = Inventory::new();
        let outcome = Action::Pickup.execute(&mut inv, &[Item::new("Plank")], None);

        assert!(outcome.succeeded);
        assert!(outcome.message.unwrap().contains("You picked up a Plank!"));
        assert!(inv.has_item("Plank"));
    }

    #[test]
    fn pickup_many_items_lists_them_all() {
        let mut inv = Inventory::new();
        let items = [Item::new("Rope"), Item::new("Lantern")];
        let outcome = Action::Pickup.execute(&mut inv, &items, None);

        assert!(outcome.succeeded);
        let message = outcome.message.unwrap();
        assert!(message.contains("You picked up:"));
        assert!(message.contains("- Rope"));
        assert!(message.contains("- Lantern"));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn use_consumes_exactly_one_matching_item() {
        let mut inv = Inventory::new();
        inv.add_items(&[Item::new("Key"), Item::new("Key")]);

        let key = Item::new("Key");
        let outcome = Action::Use.execute(&mut inv, &[], Some(&key));

        assert!(outcome.succeeded);
        assert!(outcome.message.unwrap().contains("You used a Key!"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn use_without_the_item_fails_and_leaves_inventory_alone() {
        let mut inv = Inventory::new();
        inv.add_item(Item::new("Rope"));

        let key = Item::new("Key");
        let outcome = Action::Use.execute(&mut inv, &[], Some(&key));

        assert!(!outcome.succeeded);
        assert!(outcome
            .message
            .unwrap()
            .contains("You don't have a Key to use."));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn use_with_no_item_configured_fails_silently() {
        let mut inv = Inventory::new();
        let outcome = Action::Use.execute(&mut inv, &[], None);

        assert!(!outcome.succeeded);
        assert!(outcome.message.is_none());
    }

    #[test]
    fn none_always_fails() {
        let mut inv = Inventory::new();
        let outcome = Action::None.execute(&mut inv, &[Item::new("Rope")], None);

        assert!(!outcome.succeeded);
        assert!(inv.is_empty());
    }
}
