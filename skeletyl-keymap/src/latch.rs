//! The thumb-key hold/latch controller.
//!
//! Holding a thumb key gives the usual momentary layer. Pressing the
//! latch toggle while a thumb is held converts that hold into a standing
//! latch which survives the thumb's release; pressing the toggle again
//! releases it. The controller decides per key event whether the default
//! handling may proceed, and swallows exactly the release of a thumb
//! whose layer is latched so the host's layer-off never fires.

use skeletyl_common::{KeyAction, Layer};

use crate::host::LayerHost;
use crate::keymap::{THUMB_INNER, THUMB_MIDDLE, THUMB_OUTER};

/// The three left-cluster thumb keys, each bound to one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThumbKey {
    Outer,
    Middle,
    Inner,
}

impl ThumbKey {
    pub const ALL: [ThumbKey; 3] = [ThumbKey::Outer, ThumbKey::Middle, ThumbKey::Inner];

    pub const fn layer(self) -> Layer {
        match self {
            ThumbKey::Outer => Layer::Nav,
            ThumbKey::Middle => Layer::Spec,
            ThumbKey::Inner => Layer::Num,
        }
    }

    pub fn from_action(action: KeyAction) -> Option<ThumbKey> {
        if action == THUMB_OUTER {
            Some(ThumbKey::Outer)
        } else if action == THUMB_MIDDLE {
            Some(ThumbKey::Middle)
        } else if action == THUMB_INNER {
            Some(ThumbKey::Inner)
        } else {
            None
        }
    }

    const fn index(self) -> usize {
        match self {
            ThumbKey::Outer => 0,
            ThumbKey::Middle => 1,
            ThumbKey::Inner => 2,
        }
    }
}

/// Per-event verdict: swallow the event, or let the default handling run.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decision {
    Consume,
    Continue,
}

impl Decision {
    pub fn consumed(self) -> bool {
        matches!(self, Decision::Consume)
    }
}

#[derive(Debug, Default)]
pub struct LatchController {
    held: [bool; 3],
    held_layer: Option<Layer>,
    latched: Option<Layer>,
}

impl LatchController {
    pub const fn new() -> Self {
        Self {
            held: [false; 3],
            held_layer: None,
            latched: None,
        }
    }

    pub fn latched(&self) -> Option<Layer> {
        self.latched
    }

    pub fn held_layer(&self) -> Option<Layer> {
        self.held_layer
    }

    pub fn any_thumb_down(&self) -> bool {
        self.held.iter().any(|h| *h)
    }

    /// Track a thumb key edge. Presses never consume; the host's own
    /// tap/hold handling still owns the key. A release is consumed only
    /// when its layer is the latched one.
    pub fn thumb_event(&mut self, thumb: ThumbKey, is_down: bool) -> Decision {
        let layer = thumb.layer();
        self.held[thumb.index()] = is_down;

        if is_down {
            self.held_layer = Some(layer);
            return Decision::Continue;
        }

        // held_layer must not outlive the gesture; a stale value would
        // let a later toggle latch a layer no thumb is touching.
        if !self.any_thumb_down() {
            self.held_layer = None;
        }

        if self.latched == Some(layer) {
            crate::debug!("latch: swallowing release of {:?}", thumb);
            Decision::Consume
        } else {
            Decision::Continue
        }
    }

    /// Handle a press of the latch toggle key. The target is the held
    /// thumb's layer when one is down, otherwise the standing latch; with
    /// no target at all the key falls through and types normally.
    pub fn toggle_key(&mut self, host: &mut impl LayerHost) -> Decision {
        let target = if self.any_thumb_down() {
            self.held_layer
        } else {
            self.latched
        };
        let Some(target) = target else {
            return Decision::Continue;
        };

        if self.latched == Some(target) {
            host.layer_off(target);
            self.latched = None;
            crate::debug!("latch: released {:?}", target);
        } else {
            // at most one latch at a time
            if let Some(previous) = self.latched {
                host.layer_off(previous);
            }
            host.layer_on(target);
            self.latched = Some(target);
            crate::debug!("latch: holding {:?}", target);
        }
        Decision::Consume
    }
}

#[cfg(test)]
#[path = "latch_test.rs"]
mod test;
