/// Undo/redo over serialized positions.
///
/// Two stacks: `past` always holds at least one entry (the current state),
/// `future` holds states available to redo. Pushing a new state discards
/// any undone future; branching history is not supported.
#[derive(Clone, Debug)]
pub struct GameHistory {
    past: Vec<String>,
    future: Vec<String>,
}

impl GameHistory {
    pub fn new(initial: String) -> GameHistory {
        GameHistory {
            past: vec![initial],
            future: Vec::new(),
        }
    }

    /// The serialization of the current state. Using the stored copy is
    /// cheaper than re-serializing the live board.
    pub fn current(&self) -> &str {
        self.past
            .last()
            .expect("past stack holds at least one entry")
    }

    /// Records a new current state and discards any redo history.
    pub fn push(&mut self, state: String) {
        self.past.push(state);
        self.future.clear();
    }

    /// Steps back one state. Returns the new current state, or `None` when
    /// only the initial state remains (nothing to undo; not a fault).
    pub fn undo(&mut self) -> Option<&str> {
        if self.past.len() == 1 {
            return None;
        }
        let undone = self.past.pop().expect("checked non-initial");
        self.future.push(undone);
        Some(self.current())
    }

    /// Steps forward one previously undone state. Returns the new current
    /// state, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&str> {
        let state = self.future.pop()?;
        self.past.push(state);
        Some(self.current())
    }

    /// Whether at least two moves can be undone. The surrounding
    /// application uses this to step over an AI reply and a player move in
    /// one go.
    pub fn can_undo_twice(&self) -> bool {
        self.past.len() > 2
    }

    /// Whether at least two moves can be redone.
    pub fn can_redo_twice(&self) -> bool {
        self.future.len() >= 2
    }

    /// Clears everything and starts over from the given state.
    pub fn reset(&mut self, initial: String) {
        self.past.clear();
        self.future.clear();
        self.past.push(initial);
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
