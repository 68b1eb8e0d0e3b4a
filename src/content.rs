//! Hand-authored demo stories. Everything here is content, not engine:
//! each function just builds a graph with the public builder calls.

use crate::inventory::Item;
use crate::story::graph::{NodeId, StoryGraph};
use crate::story::node::{Choice, Effect};

/// A playable story: a graph plus where to start it.
pub struct Scenario {
    pub title: &'static str,
    pub graph: StoryGraph,
    pub root: NodeId,
}

/// Look up a demo scenario by name.
pub fn scenario(name: &str) -> Option<Scenario> {
    match name {
        "river" => Some(river_crossing()),
        "vault" => Some(sunken_vault()),
        _ => None,
    }
}

/// Names accepted by [`scenario`], for usage messages.
pub const SCENARIO_NAMES: &[&str] = &["river", "vault"];

// ---------------------------------------------------------------------------
// The River Crossing
// ---------------------------------------------------------------------------

/// A forest walk home. The plank from the clearing is needed at the river;
/// the ridge is a detour with an optional hatchet. Backtracking edges make
/// the fork revisitable.
pub fn river_crossing() -> Scenario {
    let plank = Item::new("Plank");
    let hatchet = Item::new("Hatchet");

    let mut graph = StoryGraph::new();

    let fork = graph.add_node(
        "Dusk settles over the pinewood and the trail splits in front of you. \
         One branch disappears into bracken, the other climbs toward a bare ridge.",
        Effect::none(),
    );

    let clearing = graph.add_node(
        "The overgrown branch opens into a clearing. A storm-felled cabin has \
         collapsed here, and one sound plank juts from the wreckage. Somewhere \
         ahead you can hear running water.",
        Effect::pickup(vec![plank.clone()]),
    );

    let ridge = graph.add_node(
        "The climb ends at a sheer drop with no way forward. Half-buried by the \
         cairn at the top lies a rusted hatchet.",
        Effect::pickup(vec![hatchet]),
    );

    let riverbank = graph.add_node(
        "The river runs fast and cold between you and the far bank. It is too \
         wide to jump and too strong to swim, but the narrows look bridgeable.",
        Effect::none(),
    );

    let home = graph.add_node(
        "The plank holds. You cross the narrows one careful step at a time, and \
         from the far bank you can already see the lights of the village. You \
         made it home.",
        Effect::none(),
    );

    graph.connect(fork, clearing, Choice::new("Follow the overgrown branch", Effect::none()));
    graph.connect(fork, ridge, Choice::new("Climb toward the ridge", Effect::none()));

    graph.connect(
        clearing,
        riverbank,
        Choice::new("Walk toward the sound of water", Effect::none()),
    );
    graph.connect(clearing, fork, Choice::new("Go back to the fork", Effect::none()));

    graph.connect(ridge, fork, Choice::new("Head back down to the fork", Effect::none()));

    graph.connect(
        riverbank,
        home,
        Choice::new(
            "Lay a plank across the narrows",
            Effect::use_item(plank),
        ),
    );
    graph.connect(
        riverbank,
        clearing,
        Choice::new("Go back to the clearing", Effect::none()),
    );

    Scenario {
        title: "The River Crossing",
        graph,
        root: fork,
    }
}

// ---------------------------------------------------------------------------
// The Sunken Vault
// ---------------------------------------------------------------------------

/// A short cellar crawl. Wading down grabs the key and candle in one go;
/// the chest wants the key back.
pub fn sunken_vault() -> Scenario {
    let key = Item::new("Brass Key");
    let candle = Item::new("Tallow Candle");
    let idol = Item::new("Golden Idol");

    let mut graph = StoryGraph::new();

    let gate = graph.add_node(
        "A flooded stair descends beneath the ruined chapel. Cold water laps at \
         the third step, and an iron grate in the floor looks down into the dark.",
        Effect::none(),
    );

    let antechamber = graph.add_node(
        "You wade in up to your waist. Silt swirls around an iron-bound chest \
         lashed to the far wall, its lock green with age.",
        Effect::none(),
    );

    let grate = graph.add_node(
        "Through the grate you can make out the antechamber below, and the \
         glint of something metal on the chest. No way through here.",
        Effect::none(),
    );

    let vault = graph.add_node(
        "The lock gives and the lid swings up on a dry inner vault. Resting on \
         rotted velvet is a golden idol, untouched by the flood.",
        Effect::pickup(vec![idol]),
    );

    graph.connect(
        gate,
        antechamber,
        Choice::new(
            "Wade down the stair",
            Effect::pickup(vec![key.clone(), candle]),
        ),
    );
    graph.connect(gate, grate, Choice::new("Peer through the grate", Effect::none()));

    graph.connect(
        antechamber,
        vault,
        Choice::new("Unlock the chest", Effect::use_item(key)),
    );
    graph.connect(
        antechamber,
        gate,
        Choice::new("Climb back up the stair", Effect::none()),
    );

    graph.connect(grate, gate, Choice::new("Step back from the grate", Effect::none()));

    Scenario {
        title: "The Sunken Vault",
        graph,
        root: gate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_lookup_covers_all_names() {
        for name in SCENARIO_NAMES {
            assert!(scenario(name).is_some(), "missing scenario {name}");
        }
        assert!(scenario("moon").is_none());
    }

    #[test]
    fn demo_graphs_keep_the_pairing_invariant() {
        for name in SCENARIO_NAMES {
            let s = scenario(name).unwrap();
            assert!(!s.graph.is_empty());
            for node in s.graph.nodes() {
                assert_eq!(node.choices.len(), node.next.len(), "in {name}");
            }
            assert!(!s.graph.node(s.root).is_end_node());
        }
    }

    #[test]
    fn each_demo_has_an_ending() {
        for name in SCENARIO_NAMES {
            let s = scenario(name).unwrap();
            assert!(
                s.graph.nodes().any(|node| node.is_end_node()),
                "{name} has no end node"
            );
        }
    }
}
