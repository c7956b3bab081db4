use serde::{Deserialize, Serialize};

/// The three optional rule variants read by move generation.
///
/// Supplied fresh by the caller at every invocation; the engine never
/// caches these. All toggles default to off, which gives standard casual
/// checkers rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Kings may relocate along an open diagonal ray (2..7 squares).
    pub flying_kings: bool,
    /// Captures launched from columns 1/6 over an enemy on the edge
    /// column, landing back on the launch column two rows further.
    pub butterfly_captures: bool,
    /// A man promoted mid-chain may keep capturing in the same turn.
    pub capture_after_kinging: bool,
}
