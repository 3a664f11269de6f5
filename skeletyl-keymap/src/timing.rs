//! Per-key tap/hold tuning consulted by the host's dual-role engine.
//! The decision timer itself lives in the host; these callbacks only
//! supply the windows and flags for each binding.

use skeletyl_common::globals::{
    HOME_ROW_TAPPING_TERM_MS, QUICK_TAP_TERM_MS, TAPPING_TERM_MS, THUMB_TAPPING_TERM_MS,
};
use skeletyl_common::KeyAction;

/// Overlap resolution: a key released before the dual-role key counts as
/// a tap of both.
pub const PERMISSIVE_HOLD: bool = true;

pub fn tapping_term(action: &KeyAction) -> u16 {
    if action.is_home_row_mod() {
        HOME_ROW_TAPPING_TERM_MS
    } else if action.is_tapping_thumb() {
        THUMB_TAPPING_TERM_MS
    } else {
        TAPPING_TERM_MS
    }
}

/// A second tap inside this window repeats the tap key instead of
/// holding. Enabled on the home-row mods only, for double letters.
pub fn quick_tap_term(action: &KeyAction) -> u16 {
    if action.is_home_row_mod() {
        QUICK_TAP_TERM_MS
    } else {
        0
    }
}

/// Rolling from a home-row mod into the next key stays a tap.
pub fn ignore_mod_tap_interrupt(action: &KeyAction) -> bool {
    action.is_home_row_mod()
}

/// Never auto-promote to hold on overlap.
pub fn hold_on_other_key_press(_action: &KeyAction) -> bool {
    false
}

#[cfg(test)]
#[path = "timing_test.rs"]
mod test;
