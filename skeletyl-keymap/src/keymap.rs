//! The five layer tables and the position-to-action lookup.
//!
//! Matrix geometry: rows 0-2 are the left half, rows 3-5 the right half,
//! columns 0-4 the finger keys and column 5 the thumb cluster.

use skeletyl_common::keycodes::{self as kc, modifiers};
use skeletyl_common::{DefaultLayerKey, KeyAction, Layer, COLS, ROWS};

use crate::host::LayerHost;
use crate::layers::LayerState;

pub type KeymapLayer = [[KeyAction; COLS]; ROWS];

/// Outer thumb: Nav while held, Esc when tapped.
pub const THUMB_OUTER: KeyAction = KeyAction::LayerTap {
    layer: Layer::Nav,
    tap: kc::ESC,
};
/// Middle thumb: Spec while held, Tab when tapped.
pub const THUMB_MIDDLE: KeyAction = KeyAction::LayerTap {
    layer: Layer::Spec,
    tap: kc::TAB,
};
/// Inner thumb: Num while held.
pub const THUMB_INNER: KeyAction = KeyAction::Momentary(Layer::Num);

/// The latch toggle: pressing C while a thumb layer is held converts the
/// hold into a standing latch; pressing it again releases the latch.
/// While a latch target exists the literal character is traded away.
pub const LATCH_TOGGLE: KeyAction = KeyAction::key(kc::C);

pub const DEFAULT_QWERTY: KeyAction = KeyAction::DefaultLayer(DefaultLayerKey::Qwerty);
pub const DEFAULT_COLEMAK_DH: KeyAction = KeyAction::DefaultLayer(DefaultLayerKey::ColemakDh);
pub const DEFAULT_TOGGLE: KeyAction = KeyAction::DefaultLayer(DefaultLayerKey::Toggle);

const ____: KeyAction = KeyAction::Transparent;
const XXXX: KeyAction = KeyAction::None;

const fn k(code: u8) -> KeyAction {
    KeyAction::key(code)
}

const fn s(code: u8) -> KeyAction {
    KeyAction::shifted(code)
}

const fn c(code: u8) -> KeyAction {
    KeyAction::ctrl(code)
}

const fn mt(mods: u8, tap: u8) -> KeyAction {
    KeyAction::ModTap { mods, tap }
}

/// Lays out one layer in the visual order of the physical board: per
/// visual row, five left finger keys, the left thumb key, the right
/// thumb key, then five right finger keys.
macro_rules! split_3x5_3 {
    (
        $l00:expr, $l01:expr, $l02:expr, $l03:expr, $l04:expr, $lt0:expr, $rt0:expr, $r00:expr, $r01:expr, $r02:expr, $r03:expr, $r04:expr,
        $l10:expr, $l11:expr, $l12:expr, $l13:expr, $l14:expr, $lt1:expr, $rt1:expr, $r10:expr, $r11:expr, $r12:expr, $r13:expr, $r14:expr,
        $l20:expr, $l21:expr, $l22:expr, $l23:expr, $l24:expr, $lt2:expr, $rt2:expr, $r20:expr, $r21:expr, $r22:expr, $r23:expr, $r24:expr $(,)?
    ) => {
        [
            [$l00, $l01, $l02, $l03, $l04, $lt0],
            [$l10, $l11, $l12, $l13, $l14, $lt1],
            [$l20, $l21, $l22, $l23, $l24, $lt2],
            [$r00, $r01, $r02, $r03, $r04, $rt0],
            [$r10, $r11, $r12, $r13, $r14, $rt1],
            [$r20, $r21, $r22, $r23, $r24, $rt2],
        ]
    };
}

use modifiers::{LALT, LCTL, LGUI, LSFT, RALT, RCTL, RGUI, RSFT};

#[rustfmt::skip]
static BASE: KeymapLayer = split_3x5_3!(
    k(kc::Q),           k(kc::W),           k(kc::E),           k(kc::R),           k(kc::T),           THUMB_OUTER,    k(kc::ENTER),     k(kc::Y),   k(kc::U),           k(kc::I),           k(kc::O),           k(kc::P),
    k(kc::A),           mt(LCTL, kc::S),    mt(LGUI, kc::D),    mt(LALT, kc::F),    k(kc::G),           THUMB_MIDDLE,   k(kc::SPACE),     k(kc::H),   mt(RALT, kc::J),    mt(RGUI, kc::K),    mt(RCTL, kc::L),    k(kc::DELETE),
    mt(LSFT, kc::Z),    k(kc::X),           k(kc::C),           k(kc::V),           k(kc::B),           THUMB_INNER,    k(kc::BACKSPACE), k(kc::N),   k(kc::M),           k(kc::COMMA),       k(kc::DOT),         mt(RSFT, kc::SLASH),
);

#[rustfmt::skip]
static DH: KeymapLayer = split_3x5_3!(
    k(kc::Q),           k(kc::W),           k(kc::F),           k(kc::P),           k(kc::B),           THUMB_OUTER,    k(kc::ENTER),     k(kc::J),   k(kc::L),           k(kc::U),           k(kc::Y),           k(kc::P),
    k(kc::A),           mt(LCTL, kc::R),    mt(LGUI, kc::S),    mt(LALT, kc::T),    k(kc::G),           THUMB_MIDDLE,   k(kc::SPACE),     k(kc::H),   mt(RALT, kc::N),    mt(RGUI, kc::E),    mt(RCTL, kc::I),    k(kc::O),
    mt(LSFT, kc::Z),    k(kc::X),           k(kc::C),           k(kc::D),           k(kc::V),           THUMB_INNER,    k(kc::BACKSPACE), k(kc::K),   k(kc::M),           k(kc::COMMA),       k(kc::DOT),         mt(RSFT, kc::SLASH),
);

#[rustfmt::skip]
static NUM: KeymapLayer = split_3x5_3!(
    k(kc::F1),          k(kc::F2),          k(kc::F3),          k(kc::F4),          k(kc::F5),          ____,           ____,             k(kc::KP_ASTERISK), k(kc::N7),  k(kc::N8),          k(kc::N9),          k(kc::KP_MINUS),
    k(kc::F6),          k(kc::F7),          k(kc::F8),          k(kc::F9),          k(kc::F10),         ____,           ____,             k(kc::KP_SLASH),    k(kc::N4),  k(kc::N5),          k(kc::N6),          k(kc::KP_PLUS),
    k(kc::F11),         k(kc::F12),         ____,               XXXX,               XXXX,               XXXX,           ____,             k(kc::N0),          k(kc::N1),  k(kc::N2),          k(kc::N3),          k(kc::DOT),
);

#[rustfmt::skip]
static SPEC: KeymapLayer = split_3x5_3!(
    s(kc::N1),          s(kc::N2),          s(kc::N3),          s(kc::N4),          s(kc::N5),          ____,           ____,             s(kc::N6),          s(kc::N7),          s(kc::N8),          s(kc::N9),          s(kc::N0),
    k(kc::GRAVE),       XXXX,               k(kc::INSERT),      XXXX,               XXXX,               XXXX,           ____,             k(kc::LEFT_BRACKET), k(kc::RIGHT_BRACKET), k(kc::BACKSLASH), k(kc::SEMICOLON),   k(kc::QUOTE),
    ____,               k(kc::CAPS_LOCK),   ____,               XXXX,               XXXX,               ____,           ____,             k(kc::MINUS),       k(kc::EQUAL),       ____,               ____,               ____,
);

#[rustfmt::skip]
static NAV: KeymapLayer = split_3x5_3!(
    XXXX,               XXXX,               XXXX,               XXXX,               XXXX,               XXXX,           ____,             k(kc::HOME),        k(kc::PAGE_UP),     c(kc::LEFT),        c(kc::RIGHT),       XXXX,
    XXXX,               XXXX,               XXXX,               XXXX,               XXXX,               ____,           ____,             k(kc::LEFT),        k(kc::DOWN),        k(kc::UP),          k(kc::RIGHT),       c(kc::W),
    ____,               XXXX,               ____,               XXXX,               XXXX,               ____,           ____,             XXXX,               k(kc::PAGE_DOWN),   c(kc::N6),          c(kc::RIGHT_BRACKET), k(kc::END),
);

/// Indexed by [`Layer::index`].
pub static KEYMAP: [&KeymapLayer; Layer::COUNT] = [&BASE, &DH, &NUM, &SPEC, &NAV];

/// Tap-dance slots: rapid-tap count selects the action. None are bound;
/// the table stays so slots can be added without new plumbing.
pub struct TapDance {
    pub taps: &'static [KeyAction],
}

pub static TAP_DANCE: [TapDance; 0] = [];

/// The raw table entry, `KeyAction::None` when out of range.
pub fn action_at(layer: Layer, row: usize, col: usize) -> KeyAction {
    KEYMAP[layer.index()]
        .get(row)
        .and_then(|r| r.get(col))
        .copied()
        .unwrap_or(KeyAction::None)
}

/// Resolves a position against the active layer stack: highest thumb
/// layer first, transparent entries fall through, the persisted base
/// layer is the floor. Total over the full position space.
pub fn resolve(layers: &LayerState, row: usize, col: usize) -> KeyAction {
    const TOP_DOWN: [Layer; 3] = [Layer::Nav, Layer::Spec, Layer::Num];

    for layer in TOP_DOWN {
        if !layers.is_layer_on(layer) {
            continue;
        }
        match action_at(layer, row, col) {
            KeyAction::Transparent => {}
            action => return action,
        }
    }

    match action_at(layers.default_base().layer(), row, col) {
        KeyAction::Transparent => KeyAction::None,
        action => action,
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
