use super::*;
use skeletyl_common::keycodes::{self as kc, modifiers};
use skeletyl_common::Layer;

use crate::keymap::{THUMB_INNER, THUMB_MIDDLE, THUMB_OUTER};

const HRM: KeyAction = KeyAction::ModTap { mods: modifiers::LGUI, tap: kc::D };
const SHIFT_TAP: KeyAction = KeyAction::ModTap { mods: modifiers::LSFT, tap: kc::Z };
const PLAIN: KeyAction = KeyAction::key(kc::Q);

#[test]
fn tapping_terms() {
    assert_eq!(tapping_term(&HRM), HOME_ROW_TAPPING_TERM_MS);
    assert_eq!(tapping_term(&THUMB_OUTER), THUMB_TAPPING_TERM_MS);
    assert_eq!(tapping_term(&THUMB_MIDDLE), THUMB_TAPPING_TERM_MS);

    // the inner thumb is a plain momentary; no tap to time
    assert_eq!(tapping_term(&THUMB_INNER), TAPPING_TERM_MS);
    assert_eq!(tapping_term(&SHIFT_TAP), TAPPING_TERM_MS);
    assert_eq!(tapping_term(&PLAIN), TAPPING_TERM_MS);
}

#[test]
fn quick_tap_only_on_home_row() {
    assert_eq!(quick_tap_term(&HRM), QUICK_TAP_TERM_MS);
    assert_eq!(quick_tap_term(&SHIFT_TAP), 0);
    assert_eq!(quick_tap_term(&THUMB_OUTER), 0);
    assert_eq!(quick_tap_term(&PLAIN), 0);
}

#[test]
fn interrupt_flags() {
    assert!(ignore_mod_tap_interrupt(&HRM));
    assert!(!ignore_mod_tap_interrupt(&SHIFT_TAP));
    assert!(!ignore_mod_tap_interrupt(&THUMB_OUTER));

    assert!(!hold_on_other_key_press(&HRM));
    assert!(!hold_on_other_key_press(&KeyAction::Momentary(Layer::Num)));
    assert!(PERMISSIVE_HOLD);
}
