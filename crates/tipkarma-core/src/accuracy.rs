//! Display-accuracy gating for computed amounts.
//!
//! Amounts are only recomputed when the user presses the TIP button, so
//! the amounts on screen go stale as soon as the live inputs change. The
//! gate compares the last committed result against a fresh computation
//! and tells the UI to hide the labels until they match again.

use serde::{Deserialize, Serialize};

use crate::tip::TipResult;

/// Whether the displayed amounts should be hidden.
///
/// Hidden when `last` no longer matches `current` (either field differs),
/// or when `hide_if_zero` is set and `last` is the all-zero state:
/// nothing has ever been computed, so there is nothing trustworthy to show.
pub fn should_hide(last: &TipResult, current: &TipResult, hide_if_zero: bool) -> bool {
    last != current || (hide_if_zero && last.is_zero())
}

/// The most recently *displayed* result, owned by the primary screen.
///
/// `commit` is called only from the explicit recompute action; reads never
/// mutate the gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccuracyGate {
    last: TipResult,
}

impl AccuracyGate {
    /// The last committed result.
    pub fn last(&self) -> TipResult {
        self.last
    }

    /// Record a freshly displayed result.
    pub fn commit(&mut self, result: TipResult) {
        self.last = result;
    }

    /// Whether amounts computed from the live inputs should be hidden.
    pub fn should_hide(&self, current: &TipResult, hide_if_zero: bool) -> bool {
        should_hide(&self.last, current, hide_if_zero)
    }
}

// ── Tests ───────────────────────────────────────────────────────
