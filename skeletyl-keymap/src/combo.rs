//! Chord recognition for the two board combos: outer thumb + Enter
//! toggles the persisted default layer, all three thumbs jump to the
//! bootloader. Members must land within [`COMBO_TERM_MS`] of the first;
//! a combo fires once, on the final member's press.

use skeletyl_common::globals::COMBO_TERM_MS;
use skeletyl_common::{keycodes as kc, KeyAction};

use crate::keymap::{THUMB_INNER, THUMB_MIDDLE, THUMB_OUTER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComboOutput {
    ToggleDefaultLayer,
    ResetKeyboard,
}

struct ComboDef {
    members: &'static [KeyAction],
    output: ComboOutput,
}

const COMBO_COUNT: usize = 2;

static COMBOS: [ComboDef; COMBO_COUNT] = [
    ComboDef {
        members: &[THUMB_OUTER, KeyAction::key(kc::ENTER)],
        output: ComboOutput::ToggleDefaultLayer,
    },
    ComboDef {
        members: &[THUMB_OUTER, THUMB_MIDDLE, THUMB_INNER],
        output: ComboOutput::ResetKeyboard,
    },
];

#[derive(Default, Clone, Copy)]
struct PendingCombo {
    down_mask: u8,
    window_start: u64,
    /// Set once an unrelated press lands or the combo has fired; stays
    /// set until every member is back up.
    broken: bool,
}

/// Tracks member presses per combo against the chord window.
#[derive(Default)]
pub struct ComboRecognizer {
    pending: [PendingCombo; COMBO_COUNT],
}

impl ComboRecognizer {
    pub const fn new() -> Self {
        Self {
            pending: [PendingCombo {
                down_mask: 0,
                window_start: 0,
                broken: false,
            }; COMBO_COUNT],
        }
    }

    /// Feed a resolved press. Returns the combo output when this press
    /// completes a chord; the caller must then swallow the press.
    pub fn key_down(&mut self, action: KeyAction, now: u64) -> Option<ComboOutput> {
        let mut fired = None;

        for (def, pending) in COMBOS.iter().zip(self.pending.iter_mut()) {
            let Some(member) = def.members.iter().position(|m| *m == action) else {
                // an unrelated key inside the window cancels the chord
                pending.broken = true;
                continue;
            };

            if pending.down_mask == 0 {
                pending.window_start = now;
                pending.broken = false;
            }
            pending.down_mask |= 1 << member;

            let full = (1u8 << def.members.len()) - 1;
            if !pending.broken
                && pending.down_mask == full
                && now.saturating_sub(pending.window_start) <= COMBO_TERM_MS as u64
            {
                crate::info!("combo fired: {:?}", def.output);
                pending.broken = true;
                fired = Some(def.output);
            }
        }

        fired
    }

    /// Feed a resolved release so the chord state can rearm.
    pub fn key_up(&mut self, action: KeyAction) {
        for (def, pending) in COMBOS.iter().zip(self.pending.iter_mut()) {
            if let Some(member) = def.members.iter().position(|m| *m == action) {
                pending.down_mask &= !(1 << member);
                if pending.down_mask == 0 {
                    pending.broken = false;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "combo_test.rs"]
mod test;
