//! Timing and board constants shared by the keymap logic and the board
//! glue. Values carried over from the board's tuned configuration.

/// Tap-vs-hold decision window for ordinary dual-role keys, in ms.
pub const TAPPING_TERM_MS: u16 = 175;

/// Longer window for the home-row mod-taps; cuts accidental holds while
/// typing rolls.
pub const HOME_ROW_TAPPING_TERM_MS: u16 = 215;

/// Shorter window for the Esc/Tab thumb layer-taps.
pub const THUMB_TAPPING_TERM_MS: u16 = 160;

/// Repeated tap within this window repeats the tap key instead of
/// holding; applied to home-row mod-taps only (double letters).
pub const QUICK_TAP_TERM_MS: u16 = 90;

/// All members of a combo must be down within this window.
pub const COMBO_TERM_MS: u16 = 50;

/// Matrix debounce settle time, in ms. Applied upstream of this crate.
pub const DEBOUNCE_MS: u16 = 5;

/// Underglow strip: eight LEDs, four per half.
pub const RGBLED_COUNT: u8 = 8;
pub const RGBLED_SPLIT: [u8; 2] = [4, 4];

/// Brightness cap for the underglow driver.
pub const RGBLIGHT_LIMIT_VAL: u8 = 180;
