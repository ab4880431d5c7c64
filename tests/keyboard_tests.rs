// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

// Re-implement the pure functions for testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    ToggleMode,
    ToggleCamera,
    ToggleMusic,
    DrawWish,
    Dismiss,
    RemoveFocused,
    ToggleFullscreen,
}

#[inline]
fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::ToggleMode),
        "c" | "C" => Some(KeyAction::ToggleCamera),
        "m" | "M" => Some(KeyAction::ToggleMusic),
        "w" | "W" => Some(KeyAction::DrawWish),
        "Escape" => Some(KeyAction::Dismiss),
        "Delete" => Some(KeyAction::RemoveFocused),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        _ => None,
    }
}

#[inline]
fn wish_for_roll(roll: f64) -> &'static str {
    let idx = ((roll * constants::WISHES.len() as f64).floor() as usize)
        .min(constants::WISHES.len() - 1);
    constants::WISHES[idx]
}

#[test]
fn action_for_key_valid_keys() {
    assert_eq!(action_for_key(" "), Some(KeyAction::ToggleMode));
    assert_eq!(action_for_key("c"), Some(KeyAction::ToggleCamera));
    assert_eq!(action_for_key("C"), Some(KeyAction::ToggleCamera));
    assert_eq!(action_for_key("m"), Some(KeyAction::ToggleMusic));
    assert_eq!(action_for_key("M"), Some(KeyAction::ToggleMusic));
    assert_eq!(action_for_key("w"), Some(KeyAction::DrawWish));
    assert_eq!(action_for_key("W"), Some(KeyAction::DrawWish));
    assert_eq!(action_for_key("Escape"), Some(KeyAction::Dismiss));
    assert_eq!(action_for_key("Delete"), Some(KeyAction::RemoveFocused));
    assert_eq!(action_for_key("Enter"), Some(KeyAction::ToggleFullscreen));
}

#[test]
fn action_for_key_ignores_unmapped_keys() {
    // Letters with no binding
    assert_eq!(action_for_key("a"), None);
    assert_eq!(action_for_key("x"), None);
    assert_eq!(action_for_key("Z"), None);

    // Named keys with no binding
    assert_eq!(action_for_key("Tab"), None);
    assert_eq!(action_for_key("Shift"), None);
    assert_eq!(action_for_key("ArrowUp"), None);
    assert_eq!(action_for_key("Backspace"), None);

    // KeyboardEvent.key for the space bar is " ", never "Space"
    assert_eq!(action_for_key("Space"), None);
    assert_eq!(action_for_key(""), None);
}

#[test]
fn wish_for_roll_covers_every_entry() {
    let n = constants::WISHES.len();
    for (i, expected) in constants::WISHES.iter().enumerate() {
        // Mid-bucket roll lands on entry i
        let roll = (i as f64 + 0.5) / n as f64;
        assert_eq!(wish_for_roll(roll), *expected, "bucket {i}");
    }
}

#[test]
fn wish_for_roll_edge_rolls_stay_in_bounds() {
    let wishes = constants::WISHES;
    assert_eq!(wish_for_roll(0.0), wishes[0]);
    assert_eq!(wish_for_roll(0.999_999), wishes[wishes.len() - 1]);
    // Math.random never returns 1.0, but the clamp holds anyway
    assert_eq!(wish_for_roll(1.0), wishes[wishes.len() - 1]);
    assert_eq!(wish_for_roll(1.5), wishes[wishes.len() - 1]);
}

#[test]
fn wish_buckets_split_evenly_at_boundaries() {
    let n = constants::WISHES.len() as f64;
    // Exactly on a boundary the roll belongs to the upper bucket
    for i in 1..constants::WISHES.len() {
        let roll = i as f64 / n;
        assert_eq!(wish_for_roll(roll), constants::WISHES[i]);
    }
}
