use super::*;

fn history_with_two_moves() -> GameHistory {
    let mut history = GameHistory::new("I".to_string());
    history.push("A".to_string());
    history.push("B".to_string());
    history
}

#[test]
fn undo_then_redo_walks_the_same_states() {
    let mut history = history_with_two_moves();
    assert_eq!(history.current(), "B");
    assert_eq!(history.undo(), Some("A"));
    assert_eq!(history.current(), "A");
    assert_eq!(history.redo(), Some("B"));
    assert_eq!(history.current(), "B");
}

#[test]
fn undo_stops_at_the_initial_state() {
    let mut history = history_with_two_moves();
    assert_eq!(history.undo(), Some("A"));
    assert_eq!(history.undo(), Some("I"));
    // Only the initial entry remains; undoing further is a no-op.
    assert_eq!(history.undo(), None);
    assert_eq!(history.current(), "I");
}

#[test]
fn pushing_discards_the_future() {
    let mut history = history_with_two_moves();
    history.undo();
    history.push("C".to_string());
    assert_eq!(history.current(), "C");
    assert_eq!(history.redo(), None);
}

#[test]
fn redo_on_fresh_history_is_a_no_op() {
    let mut history = GameHistory::new("I".to_string());
    assert_eq!(history.redo(), None);
    assert_eq!(history.current(), "I");
}

#[test]
fn twice_checks_count_full_round_trips() {
    let mut history = GameHistory::new("I".to_string());
    assert!(!history.can_undo_twice());
    history.push("A".to_string());
    assert!(!history.can_undo_twice());
    history.push("B".to_string());
    assert!(history.can_undo_twice());

    assert!(!history.can_redo_twice());
    history.undo();
    assert!(!history.can_redo_twice());
    history.undo();
    assert!(history.can_redo_twice());
}

#[test]
fn reset_returns_to_a_single_entry() {
    let mut history = history_with_two_moves();
    history.undo();
    history.reset("NEW".to_string());
    assert_eq!(history.current(), "NEW");
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), None);
}
