use super::*;
use skeletyl_common::{BaseLayer, THUMB_COL};

fn with_layers(base: BaseLayer, on: &[Layer]) -> LayerState {
    let mut layers = LayerState::new(base);
    for layer in on {
        layers.layer_on(*layer);
    }
    layers
}

#[test]
fn thumb_cluster_placement() {
    // outer/middle/inner occupy the left-half thumb column, top to bottom
    assert_eq!(BASE[0][THUMB_COL], THUMB_OUTER);
    assert_eq!(BASE[1][THUMB_COL], THUMB_MIDDLE);
    assert_eq!(BASE[2][THUMB_COL], THUMB_INNER);
    assert_eq!(DH[0][THUMB_COL], THUMB_OUTER);
    assert_eq!(DH[1][THUMB_COL], THUMB_MIDDLE);
    assert_eq!(DH[2][THUMB_COL], THUMB_INNER);

    // right-half thumbs: Enter, Space, Backspace
    assert_eq!(BASE[3][THUMB_COL], k(kc::ENTER));
    assert_eq!(BASE[4][THUMB_COL], k(kc::SPACE));
    assert_eq!(BASE[5][THUMB_COL], k(kc::BACKSPACE));
}

#[test]
fn latch_toggle_reachable_from_every_thumb_layer() {
    // the C position stays transparent on the thumb layers, otherwise a
    // held layer would shadow its own latch toggle
    for layer in [Layer::Num, Layer::Spec, Layer::Nav] {
        assert_eq!(action_at(layer, 2, 2), KeyAction::Transparent);
    }
    assert_eq!(action_at(Layer::Base, 2, 2), LATCH_TOGGLE);
    assert_eq!(action_at(Layer::Dh, 2, 2), LATCH_TOGGLE);
}

#[test]
fn resolve_uses_default_base() {
    let qwerty = with_layers(BaseLayer::Qwerty, &[]);
    assert_eq!(resolve(&qwerty, 0, 0), k(kc::Q));
    assert_eq!(resolve(&qwerty, 0, 2), k(kc::E));

    let dh = with_layers(BaseLayer::ColemakDh, &[]);
    assert_eq!(resolve(&dh, 0, 2), k(kc::F));
    assert_eq!(
        resolve(&dh, 1, 1),
        KeyAction::ModTap { mods: modifiers::LCTL, tap: kc::R }
    );
}

#[test]
fn transparent_falls_through_to_base() {
    let layers = with_layers(BaseLayer::Qwerty, &[Layer::Num]);
    // top-left is overridden
    assert_eq!(resolve(&layers, 0, 0), k(kc::F1));
    // the C position falls through
    assert_eq!(resolve(&layers, 2, 2), k(kc::C));
    // right thumb row falls through to Backspace
    assert_eq!(resolve(&layers, 5, THUMB_COL), k(kc::BACKSPACE));
}

#[test]
fn dead_keys_block_fall_through() {
    let layers = with_layers(BaseLayer::Qwerty, &[Layer::Nav]);
    // left-half letters are masked off on the nav layer
    assert_eq!(resolve(&layers, 0, 0), KeyAction::None);
    assert_eq!(resolve(&layers, 1, 3), KeyAction::None);
    // while the arrows resolve
    assert_eq!(resolve(&layers, 4, 0), k(kc::LEFT));
    assert_eq!(resolve(&layers, 3, 2), c(kc::LEFT));
}

#[test]
fn higher_layer_wins_when_stacked() {
    let layers = with_layers(BaseLayer::Qwerty, &[Layer::Num, Layer::Nav]);
    // nav is above num and masks its function keys
    assert_eq!(resolve(&layers, 0, 0), KeyAction::None);
    // where nav is transparent the lookup continues into num
    assert_eq!(resolve(&layers, 2, 0), k(kc::F11));
}

#[test]
fn out_of_range_is_none() {
    let layers = LayerState::default();
    assert_eq!(resolve(&layers, ROWS, 0), KeyAction::None);
    assert_eq!(resolve(&layers, 0, COLS), KeyAction::None);
    assert_eq!(action_at(Layer::Base, 9, 9), KeyAction::None);
}

#[test]
fn keymap_covers_all_layers() {
    for (i, table) in KEYMAP.iter().enumerate() {
        let layer = Layer::from_index(i).unwrap();
        assert_eq!(action_at(layer, 0, 0), table[0][0]);
    }
}
