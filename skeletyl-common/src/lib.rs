#![no_std]
pub mod globals;
pub mod keycodes;

use keycodes::modifiers;

/// Physical matrix rows: three per half, left half first.
pub const ROWS: usize = 6;
/// Physical matrix columns: five finger columns plus the thumb column.
pub const COLS: usize = 6;
/// The thumb cluster lives in the last column of each half.
pub const THUMB_COL: usize = 5;

/// Logical layers of the keymap, in firmware layer order. `Base` and `Dh`
/// are the two selectable default layers; the rest are thumb layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base,
    Dh,
    Num,
    Spec,
    Nav,
}

impl Layer {
    pub const COUNT: usize = 5;

    pub const fn index(self) -> usize {
        match self {
            Layer::Base => 0,
            Layer::Dh => 1,
            Layer::Num => 2,
            Layer::Spec => 3,
            Layer::Nav => 4,
        }
    }

    pub const fn from_index(index: usize) -> Option<Layer> {
        match index {
            0 => Some(Layer::Base),
            1 => Some(Layer::Dh),
            2 => Some(Layer::Num),
            3 => Some(Layer::Spec),
            4 => Some(Layer::Nav),
            _ => None,
        }
    }

    pub const fn is_base(self) -> bool {
        matches!(self, Layer::Base | Layer::Dh)
    }
}

/// The default layer persisted across power cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaseLayer {
    #[default]
    Qwerty,
    ColemakDh,
}

impl BaseLayer {
    pub const fn layer(self) -> Layer {
        match self {
            BaseLayer::Qwerty => Layer::Base,
            BaseLayer::ColemakDh => Layer::Dh,
        }
    }

    pub const fn toggled(self) -> BaseLayer {
        match self {
            BaseLayer::Qwerty => BaseLayer::ColemakDh,
            BaseLayer::ColemakDh => BaseLayer::Qwerty,
        }
    }
}

/// A HID usage id paired with the modifiers that must be held for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPlusMod(pub u8, pub u8);

impl KeyPlusMod {
    pub const fn new(code: u8, mods: u8) -> Self {
        Self(code, mods)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    pub const fn mods(self) -> u8 {
        self.1
    }
}

/// Default-layer control keys. These never type anything; they select
/// which base layer is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DefaultLayerKey {
    Qwerty,
    ColemakDh,
    Toggle,
}

/// Everything a keymap position can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Dead key; blocks fall-through.
    #[default]
    None,
    /// Falls through to the next active layer below.
    Transparent,
    Key(KeyPlusMod),
    /// Modifier when held, plain key when tapped (home-row mods).
    ModTap { mods: u8, tap: u8 },
    /// Momentary layer when held, plain key when tapped.
    LayerTap { layer: Layer, tap: u8 },
    /// Momentary layer only.
    Momentary(Layer),
    DefaultLayer(DefaultLayerKey),
}

impl KeyAction {
    pub const fn key(code: u8) -> Self {
        KeyAction::Key(KeyPlusMod::new(code, 0))
    }

    pub const fn shifted(code: u8) -> Self {
        KeyAction::Key(KeyPlusMod::new(code, modifiers::LSFT))
    }

    pub const fn ctrl(code: u8) -> Self {
        KeyAction::Key(KeyPlusMod::new(code, modifiers::LCTL))
    }

    /// True for the home-row mod-taps. The bottom-row shift taps carry
    /// only a shift bit and keep the default timing; every other mod-tap
    /// sits on the home row.
    pub const fn is_home_row_mod(self) -> bool {
        match self {
            KeyAction::ModTap { mods, .. } => {
                mods & !(modifiers::LSFT | modifiers::RSFT) != 0
            }
            _ => false,
        }
    }

    pub const fn is_tapping_thumb(self) -> bool {
        matches!(self, KeyAction::LayerTap { .. })
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
