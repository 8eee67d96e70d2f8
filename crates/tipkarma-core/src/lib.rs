//! TipKarma Core - Tip math and karma-wheel scheduling
//!
//! This crate provides the logic underneath the TipKarma screens:
//! - Tip and total computation (TipResult)
//! - Display-accuracy gating for stale amounts (AccuracyGate)
//! - Spin planning for the karma wheel (SpinPlan, KarmaWheel)
//!
//! Everything here is pure: no I/O, no clocks, no UI types. The host UI
//! feeds in parsed numbers and plays back the plans this crate produces.

pub mod accuracy;
pub mod spin;
pub mod tip;

pub use accuracy::{should_hide, AccuracyGate};
pub use spin::{
    plan, KarmaWheel, SpinDirection, SpinPlan, SpinSegment, WheelColor, GOOD_KARMA_MIN_PERCENT,
    MAX_SEGMENT_DEGREES, MAX_SPINS, NOMINAL_SPIN_SECONDS, SPINS_PER_PERCENT_STEP,
};
pub use tip::{compute, TipResult};
