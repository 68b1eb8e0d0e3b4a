use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::inventory::Item;
use crate::story::graph::NodeId;

/// An inventory mutation attached to a trigger point: either a node's entry
/// or a choice the player takes. The action itself is a bare tag; the items
/// it operates on live here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effect {
    pub action: Action,
    /// Items granted when `action` is `Pickup`.
    pub pickup_items: Vec<Item>,
    /// Item consumed when `action` is `Use`.
    pub use_item: Option<Item>,
}

impl Effect {
    /// No action attached.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn pickup(items: Vec<Item>) -> Self {
        Self {
            action: Action::Pickup,
            pickup_items: items,
            use_item: None,
        }
    }

    pub fn use_item(item: Item) -> Self {
        Self {
            action: Action::Use,
            pickup_items: Vec::new(),
            use_item: Some(item),
        }
    }
}

/// A labeled choice attached to one outgoing edge of its owning node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// The line shown in the numbered choice list.
    pub text: String,
    /// Applied when the player selects this choice.
    pub effect: Effect,
}

impl Choice {
    pub fn new(text: impl Into<String>, effect: Effect) -> Self {
        Self {
            text: text.into(),
            effect,
        }
    }
}

/// One point in the story. `choices` and `next` are positionally paired:
/// selecting `choices[i]` advances the cursor to `next[i]`. Both are only
/// ever appended to together, through [`StoryGraph::connect`].
///
/// [`StoryGraph::connect`]: crate::story::graph::StoryGraph::connect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub text: String,
    /// Applied on arrival, before choices are shown.
    pub on_enter: Effect,
    pub choices: Vec<Choice>,
    pub next: Vec<NodeId>,
}

impl Node {
    pub(super) fn new(text: impl Into<String>, on_enter: Effect) -> Self {
        Self {
            text: text.into(),
            on_enter,
            choices: Vec::new(),
            next: Vec::new(),
        }
    }

    /// A node with no outgoing edges ends the story.
    pub fn is_end_node(&self) -> bool {
        self.next.is_empty()
    }
}
