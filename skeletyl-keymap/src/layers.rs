use skeletyl_common::{BaseLayer, Layer};

use crate::host::LayerHost;

/// Layer activation bitset plus the default base layer selection.
///
/// The thumb layers are the only ones toggled at runtime; the base is
/// switched by replacing `default_base`, never by activation bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerState {
    active: u8,
    default_base: BaseLayer,
}

impl Default for LayerState {
    fn default() -> Self {
        Self::new(BaseLayer::Qwerty)
    }
}

impl LayerState {
    pub const fn new(default_base: BaseLayer) -> Self {
        Self {
            active: 0,
            default_base,
        }
    }

    pub fn set_default(&mut self, base: BaseLayer) {
        self.default_base = base;
    }

    pub fn default_base(&self) -> BaseLayer {
        self.default_base
    }

    pub fn active_mask(&self) -> u8 {
        self.active
    }

    pub fn clear_layers(&mut self) {
        self.active = 0;
    }
}

impl LayerHost for LayerState {
    fn layer_on(&mut self, layer: Layer) {
        self.active |= 1 << layer.index();
    }

    fn layer_off(&mut self, layer: Layer) {
        self.active &= !(1 << layer.index());
    }

    fn is_layer_on(&self, layer: Layer) -> bool {
        self.active & (1 << layer.index()) != 0
    }
}

#[cfg(test)]
#[path = "layers_test.rs"]
mod test;
