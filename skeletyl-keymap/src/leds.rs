//! Per-layer underglow feedback. Five priority slots over the eight-LED
//! strip: a soft Colemak-DH hint at the bottom, caps lock above it, then
//! one color per thumb layer. Only slot visibility is decided here;
//! composition and rendering belong to the host.

use skeletyl_common::globals::RGBLED_COUNT;
use skeletyl_common::{BaseLayer, Layer};

use crate::host::{KeyboardHost, LayerHost};
use crate::layers::LayerState;

pub const DH_HINT_SLOT: u8 = 0;
pub const CAPS_SLOT: u8 = 1;
pub const NUM_SLOT: u8 = 2;
pub const SPEC_SLOT: u8 = 3;
pub const NAV_SLOT: u8 = 4;

pub const SLOT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

pub const HSV_CYAN: Hsv = Hsv { h: 128, s: 255, v: 255 };
pub const HSV_MAGENTA: Hsv = Hsv { h: 213, s: 255, v: 255 };
pub const HSV_RED: Hsv = Hsv { h: 0, s: 255, v: 255 };
pub const HSV_GREEN: Hsv = Hsv { h: 85, s: 255, v: 255 };
pub const HSV_BLUE: Hsv = Hsv { h: 170, s: 255, v: 255 };

/// One slot's segment: which LEDs it claims and in what color.
pub struct LedSegment {
    pub start: u8,
    pub count: u8,
    pub color: Hsv,
}

/// Indexed by slot; priority grows with the index.
pub static LED_LAYERS: [LedSegment; SLOT_COUNT] = [
    LedSegment { start: 0, count: RGBLED_COUNT, color: HSV_CYAN },
    LedSegment { start: 0, count: RGBLED_COUNT, color: HSV_MAGENTA },
    LedSegment { start: 0, count: RGBLED_COUNT, color: HSV_RED },
    LedSegment { start: 0, count: RGBLED_COUNT, color: HSV_GREEN },
    LedSegment { start: 0, count: RGBLED_COUNT, color: HSV_BLUE },
];

/// Pushes slot visibility to the host, once per observed transition.
#[derive(Default)]
pub struct Indicators {
    shown: [bool; SLOT_COUNT],
}

impl Indicators {
    pub const fn new() -> Self {
        Self {
            shown: [false; SLOT_COUNT],
        }
    }

    /// Boot-time seeding: all slots forced off, then the DH hint set
    /// from the persisted default layer.
    pub fn post_init(&mut self, base: BaseLayer, host: &mut impl KeyboardHost) {
        for slot in 0..SLOT_COUNT as u8 {
            host.set_layer_indicator(slot, false);
        }
        self.shown = [false; SLOT_COUNT];
        self.default_layer_changed(base, host);
    }

    pub fn layer_state_changed(&mut self, layers: &LayerState, host: &mut impl KeyboardHost) {
        self.set(NUM_SLOT, layers.is_layer_on(Layer::Num), host);
        self.set(SPEC_SLOT, layers.is_layer_on(Layer::Spec), host);
        self.set(NAV_SLOT, layers.is_layer_on(Layer::Nav), host);
    }

    pub fn default_layer_changed(&mut self, base: BaseLayer, host: &mut impl KeyboardHost) {
        self.set(DH_HINT_SLOT, base == BaseLayer::ColemakDh, host);
    }

    pub fn lock_changed(&mut self, caps_lock: bool, host: &mut impl KeyboardHost) {
        self.set(CAPS_SLOT, caps_lock, host);
    }

    fn set(&mut self, slot: u8, active: bool, host: &mut impl KeyboardHost) {
        let shown = &mut self.shown[slot as usize];
        if *shown != active {
            *shown = active;
            host.set_layer_indicator(slot, active);
        }
    }
}

#[cfg(test)]
#[path = "leds_test.rs"]
mod test;
