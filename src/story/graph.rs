use serde::{Deserialize, Serialize};

use crate::story::node::{Choice, Effect, Node};

/// Handle to a node inside its [`StoryGraph`]. Only valid for the graph
/// that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

/// Arena of story nodes. Edges are stored as ids, so cycles and
/// reconvergent paths (several nodes sharing a successor) need no reference
/// counting: the arena owns every node for the life of the program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryGraph {
    nodes: Vec<Node>,
}

impl StoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node and return its handle.
    pub fn add_node(&mut self, text: impl Into<String>, on_enter: Effect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(text, on_enter));
        id
    }

    /// Append an outgoing edge to `from`: taking `choice` advances to `to`.
    /// Choices and successors are appended together, which is what keeps
    /// them positionally paired.
    pub fn connect(&mut self, from: NodeId, to: NodeId, choice: Choice) {
        let node = self.nodes.get_mut(from.0).expect("node id must exist in graph");
        node.next.push(to);
        node.choices.push(choice);
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.0).expect("node id must exist in graph")
    }

    /// All nodes, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Item;

    #[test]
    fn connect_keeps_choices_and_successors_paired() {
        let mut graph = StoryGraph::new();
        let a = graph.add_node("A", Effect::none());
        let b = graph.add_node("B", Effect::none());
        let c = graph.add_node("C", Effect::none());

        graph.connect(a, b, Choice::new("to B", Effect::none()));
        graph.connect(a, c, Choice::new("to C", Effect::pickup(vec![Item::new("Rope")])));
        // Backtracking edge, making a cycle.
        graph.connect(b, a, Choice::new("back to A", Effect::none()));

        let node_a = graph.node(a);
        assert_eq!(node_a.choices.len(), node_a.next.len());
        assert_eq!(node_a.choices[0].text, "to B");
        assert_eq!(node_a.next[0], b);
        assert_eq!(node_a.choices[1].text, "to C");
        assert_eq!(node_a.next[1], c);

        assert_eq!(graph.node(b).next[0], a);
    }

    #[test]
    fn terminal_classification_follows_edge_count() {
        let mut graph = StoryGraph::new();
        let a = graph.add_node("A", Effect::none());
        let b = graph.add_node("B", Effect::none());

        assert!(graph.node(a).is_end_node());
        graph.connect(a, b, Choice::new("go", Effect::none()));
        assert!(!graph.node(a).is_end_node());
        assert!(graph.node(b).is_end_node());
    }

    #[test]
    fn shared_successors_are_allowed() {
        let mut graph = StoryGraph::new();
        let a = graph.add_node("A", Effect::none());
        let b = graph.add_node("B", Effect::none());
        let merge = graph.add_node("Merge", Effect::none());

        graph.connect(a, merge, Choice::new("down", Effect::none()));
        graph.connect(b, merge, Choice::new("around", Effect::none()));

        assert_eq!(graph.node(a).next[0], graph.node(b).next[0]);
    }

    #[test]
    fn get_rejects_out_of_range_ids() {
        let mut graph = StoryGraph::new();
        let a = graph.add_node("A", Effect::none());
        assert!(graph.get(a).is_some());
        assert!(graph.get(NodeId(7)).is_none());
    }
}
