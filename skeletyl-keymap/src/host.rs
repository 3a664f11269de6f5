//! Seams toward the hosting firmware. The latch controller and the LED
//! hooks only ever issue commands through these traits, which keeps them
//! testable without any hardware behind them.

use skeletyl_common::{BaseLayer, Layer};

/// The externally owned layer activation vector. Implementations must
/// make `layer_on`/`layer_off` idempotent.
pub trait LayerHost {
    fn layer_on(&mut self, layer: Layer);
    fn layer_off(&mut self, layer: Layer);
    fn is_layer_on(&self, layer: Layer) -> bool;
}

/// Board services outside the keymap: persisting the default layer and
/// driving the per-layer underglow slots. Rendering and storage live in
/// the host.
pub trait KeyboardHost {
    /// Persist the default base layer; assumed atomic and reliable.
    fn set_default_layer(&mut self, base: BaseLayer);

    /// Show or hide one indicator slot. Slots are priority-ordered; the
    /// host composes the visible result.
    fn set_layer_indicator(&mut self, slot: u8, active: bool);
}
