//! Scoring module - tap cost and match refund
//!
//! Every accepted tap costs one point and a completed group refunds
//! `match_size - 1`, so finding a group costs exactly one point net. Lower is
//! better; a perfect game scores `group_count`.

/// Points charged for a single accepted tap.
pub const TAP_COST: u32 = 1;

/// Points returned when a group of `match_size` tiles locks.
pub fn match_refund(match_size: u32) -> u32 {
    match_size.saturating_sub(1)
}

/// Apply a refund without wrapping below zero.
///
/// The tap cost of a group is always charged before its refund, so the
/// saturation never triggers in play.
pub fn apply_refund(score: u32, match_size: u32) -> u32 {
    score.saturating_sub(match_refund(match_size))
}

/// Best possible final score for a configuration: one point per group.
pub fn perfect_score(group_count: u32) -> u32 {
    group_count.saturating_mul(TAP_COST)
}
