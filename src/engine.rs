use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use log::{debug, info};

use crate::action::Action;
use crate::inventory::Inventory;
use crate::save::{SaveData, SaveStore};
use crate::story::graph::{NodeId, StoryGraph};
use crate::story::node::{Effect, Node};

// ---------------------------------------------------------------------------
// Run outcome
// ---------------------------------------------------------------------------

/// How a run ended. Both variants are normal terminations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The player reached an end node.
    Finished { steps: usize },
    /// The player left early: `-2` at a choice prompt, or Quit at the menu.
    Quit,
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

const ALREADY_HAVE_HERE: &str = "You already have some of the items trying to be picked up here.";
const ALREADY_HAVE_OPTION: &str =
    "You already have some of the items trying to be picked up by this option.";

/// The interactive shell around a story graph: the startup menu and the
/// traversal loop. Generic over its streams so tests can script a whole
/// session; `main` hands it stdin and stdout.
pub struct Game<R, W> {
    title: String,
    input: R,
    output: W,
    did_exit: bool,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(title: impl Into<String>, input: R, output: W) -> Self {
        Self {
            title: title.into(),
            input,
            output,
            did_exit: false,
        }
    }

    // -- input ---------------------------------------------------------------

    /// Block until the player supplies a syntactically valid integer.
    /// Anything unparseable is discarded and re-prompted. EOF means the
    /// interactive contract is broken, so it surfaces as an error instead
    /// of spinning.
    fn read_int(&mut self) -> Result<i32> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input stream closed while waiting for a choice");
            }
            match line.trim().parse::<i32>() {
                Ok(value) => {
                    debug!("read choice {value}");
                    return Ok(value);
                }
                Err(_) => {
                    write!(self.output, "Invalid input. Please enter a number: ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    // -- display helpers -----------------------------------------------------

    fn print_banner(&mut self) -> Result<()> {
        let pad = "=".repeat(self.title.len());
        writeln!(self.output, "+======{pad}+")?;
        writeln!(self.output, "|   {}   |", self.title)?;
        write!(self.output, "+{pad}======+")?;
        Ok(())
    }

    fn print_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        writeln!(self.output, "--- INVENTORY ---")?;
        if inventory.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
        } else {
            for (i, item) in inventory.items().iter().enumerate() {
                writeln!(self.output, "{}. {item}", i + 1)?;
            }
        }
        writeln!(self.output, "-----------------")?;
        Ok(())
    }

    fn print_node_text(&mut self, node: &Node) -> Result<()> {
        writeln!(self.output, "\n---------\n{}", node.text)?;
        Ok(())
    }

    fn print_choices(&mut self, node: &Node) -> Result<()> {
        for (i, choice) in node.choices.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.text)?;
        }
        Ok(())
    }

    // -- effects -------------------------------------------------------------

    /// Run an effect through the overlap gate: if any of its pickup items is
    /// already held, the whole action is suppressed, with a notice only when
    /// the action is a pickup.
    fn apply_effect(
        &mut self,
        effect: &Effect,
        inventory: &mut Inventory,
        already_have: &str,
    ) -> Result<()> {
        if effect.action == Action::None {
            return Ok(());
        }
        if inventory.has_any(&effect.pickup_items) {
            if effect.action == Action::Pickup {
                writeln!(self.output, "\n[INFO] {already_have}")?;
            }
            return Ok(());
        }
        let outcome = effect
            .action
            .execute(inventory, &effect.pickup_items, effect.use_item.as_ref());
        debug!(
            "effect {:?} {}",
            effect.action,
            if outcome.succeeded { "succeeded" } else { "failed" }
        );
        if let Some(message) = outcome.message {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }

    // -- menu ----------------------------------------------------------------

    /// Startup menu. Returns a save to resume from, if the player picked
    /// Load Game and the store had one. Quit sets the exit flag, which makes
    /// [`run`](Self::run) return immediately.
    pub fn init(&mut self, store: &mut dyn SaveStore) -> Result<Option<SaveData>> {
        loop {
            self.print_banner()?;
            write!(
                self.output,
                "\n1. New Game\n2. Load Game\n3. Quit\n\nEnter your choice: "
            )?;
            self.output.flush()?;

            match self.read_int()? {
                1 => return Ok(None),
                2 => match store.load()? {
                    Some(save) => {
                        info!("resuming from a saved run");
                        return Ok(Some(save));
                    }
                    None => writeln!(self.output, "[INFO] Load game not implemented yet.")?,
                },
                3 => {
                    self.did_exit = true;
                    return Ok(None);
                }
                _ => writeln!(self.output, "\nPlease enter a valid input (1-3).\n")?,
            }
        }
    }

    // -- run loop ------------------------------------------------------------

    /// Walk the graph from `root` until an end node or an explicit exit.
    /// The inventory is the caller's; it keeps whatever state the run left
    /// it with.
    pub fn run(
        &mut self,
        graph: &StoryGraph,
        root: NodeId,
        inventory: &mut Inventory,
    ) -> Result<RunOutcome> {
        if self.did_exit {
            return Ok(RunOutcome::Quit);
        }

        let mut current = root;
        let mut steps = 0usize;
        info!("run started at {current:?}");

        loop {
            let node = graph.node(current).clone();
            self.print_node_text(&node)?;

            self.apply_effect(&node.on_enter, inventory, ALREADY_HAVE_HERE)?;

            if node.is_end_node() {
                writeln!(self.output, "\n---------\nEnd of the game.")?;
                info!("end node reached after {steps} steps");
                return Ok(RunOutcome::Finished { steps });
            }

            self.print_choices(&node)?;

            let selected = loop {
                write!(
                    self.output,
                    "\n(-1 to see inventory, -2 to exit)\nEnter your choice: "
                )?;
                self.output.flush()?;

                match self.read_int()? {
                    -1 => {
                        writeln!(self.output)?;
                        self.print_inventory(inventory)?;
                        self.print_node_text(&node)?;
                        self.print_choices(&node)?;
                    }
                    -2 => {
                        info!("player exited after {steps} steps");
                        return Ok(RunOutcome::Quit);
                    }
                    value if value >= 1 && (value as usize) <= node.choices.len() => {
                        break (value - 1) as usize;
                    }
                    _ => writeln!(
                        self.output,
                        "Please enter an existing option number (1 - {}).",
                        node.choices.len()
                    )?,
                }
            };

            let choice = &node.choices[selected];
            debug!("selected choice {}: {}", selected + 1, choice.text);
            self.apply_effect(&choice.effect, inventory, ALREADY_HAVE_OPTION)?;

            // Advancement is unconditional: a failed action still moves the
            // cursor to the paired successor.
            current = node.next[selected];
            steps += 1;
            info!("advanced to {current:?}");
        }
    }
}
