//! Event pump: consumes debounced key transitions, resolves them against
//! the layer stack and runs the per-record hooks (default-layer keys,
//! thumb tracking, the latch toggle, combos). Events the hooks do not
//! swallow are forwarded to the host's tap/hold and HID path untouched.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::{NoopRawMutex, RawMutex};
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::Instant;

use skeletyl_common::{BaseLayer, DefaultLayerKey, KeyAction, COLS, ROWS};

use crate::combo::{ComboOutput, ComboRecognizer};
use crate::firmware_functions;
use crate::host::{KeyboardHost, LayerHost};
use crate::keymap::{self, LATCH_TOGGLE};
use crate::latch::{LatchController, ThumbKey};
use crate::layers::LayerState;
use crate::leds::Indicators;

/// One debounced key transition from the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanKey {
    pub row: u8,
    pub col: u8,
    pub is_down: bool,
}

impl ScanKey {
    pub const fn new(row: u8, col: u8, is_down: bool) -> Self {
        Self { row, col, is_down }
    }
}

/// A scan key stamped with its arrival time in milliseconds.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedKey(pub ScanKey, pub u64);

/// What the host receives back from the pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostEvent {
    /// Run the default handling (tap/hold decision, HID report) for this
    /// resolved action.
    Key { action: KeyAction, is_down: bool },
    /// The event queue overflowed; the host must release everything.
    Clear,
}

pub enum ControlMessage {
    /// Host lock-LED report; drives the caps indicator slot.
    LockLeds { caps_lock: bool },
    Exit,
}

#[derive(Default)]
pub struct ControlSignal(Signal<NoopRawMutex, ControlMessage>);

impl ControlSignal {
    pub fn lock_leds(&self, caps_lock: bool) {
        self.0.signal(ControlMessage::LockLeds { caps_lock });
    }

    pub fn exit(&self) {
        self.0.signal(ControlMessage::Exit);
    }
}

pub struct KeyChannel<M: RawMutex, const N: usize>(Channel<M, ScanKey, N>);

impl<M: RawMutex, const N: usize> Default for KeyChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}

impl<M: RawMutex, const N: usize> KeyChannel<M, N> {
    pub async fn receive(&self) -> ScanKey {
        self.0.receive().await
    }

    pub fn try_send(&self, key: ScanKey) {
        self.0.try_send(key).ok();
    }
}

pub struct MapperChannel<M: RawMutex, const N: usize> {
    events: Channel<M, HostEvent, N>,
    ctl: ControlSignal,
}

impl<M: RawMutex, const N: usize> Default for MapperChannel<M, N> {
    fn default() -> Self {
        Self {
            events: Channel::new(),
            ctl: ControlSignal::default(),
        }
    }
}

impl<M: RawMutex, const N: usize> MapperChannel<M, N> {
    pub async fn receive(&self) -> HostEvent {
        self.events.receive().await
    }

    pub fn control(&self) -> &ControlSignal {
        &self.ctl
    }

    async fn wait_control(&self) -> ControlMessage {
        self.ctl.0.wait().await
    }

    fn report(&self, event: HostEvent) {
        if self.events.try_send(event).is_err() {
            self.events.clear();
            let _ = self.events.try_send(HostEvent::Clear);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ActiveKey {
    action: KeyAction,
    /// The press was swallowed; drop the matching release too so the
    /// host never sees an unbalanced pair.
    swallowed: bool,
}

pub struct Mapper<'c, H: KeyboardHost, M: RawMutex, const N: usize> {
    layers: LayerState,
    latch: LatchController,
    combos: ComboRecognizer,
    indicators: Indicators,
    /// Action resolved at press time, so the release pairs up even when
    /// the layer stack changed in between.
    active: [[ActiveKey; COLS]; ROWS],
    host: H,
    channel: &'c MapperChannel<M, N>,
    now: u64,
}

impl<'c, H: KeyboardHost, M: RawMutex, const N: usize> Mapper<'c, H, M, N> {
    pub fn new(host: H, channel: &'c MapperChannel<M, N>, default_base: BaseLayer) -> Self {
        Self {
            layers: LayerState::new(default_base),
            latch: LatchController::new(),
            combos: ComboRecognizer::new(),
            indicators: Indicators::new(),
            active: [[ActiveKey::default(); COLS]; ROWS],
            host,
            channel,
            now: 0,
        }
    }

    /// Seed the indicator slots from the persisted default layer.
    pub fn post_init(&mut self) {
        let base = self.layers.default_base();
        self.indicators.post_init(base, &mut self.host);
    }

    pub fn layer_state(&self) -> &LayerState {
        &self.layers
    }

    pub fn latched(&self) -> Option<skeletyl_common::Layer> {
        self.latch.latched()
    }

    pub async fn run<const S: usize>(&mut self, keys: &KeyChannel<M, S>) {
        loop {
            match select(keys.receive(), self.channel.wait_control()).await {
                Either::First(key) => {
                    self.key_switch(TimedKey(key, Instant::now().as_millis()));
                }
                Either::Second(ControlMessage::LockLeds { caps_lock }) => {
                    self.indicators.lock_changed(caps_lock, &mut self.host);
                }
                Either::Second(ControlMessage::Exit) => return,
            }
        }
    }

    pub fn key_switch(&mut self, k: TimedKey) {
        let TimedKey(key, time) = k;
        let (row, col) = (key.row as usize, key.col as usize);
        if row >= ROWS || col >= COLS {
            crate::error!("invalid scan key {},{}", key.row, key.col);
            return;
        }
        self.now = time;

        if key.is_down {
            let action = keymap::resolve(&self.layers, row, col);
            let mut swallowed = true;
            if let Some(output) = self.combos.key_down(action, self.now) {
                self.fire_combo(output);
            } else if self.process_record(action, true) {
                self.apply_default(action, true);
                self.channel.report(HostEvent::Key {
                    action,
                    is_down: true,
                });
                swallowed = false;
            }
            self.active[row][col] = ActiveKey { action, swallowed };
        } else {
            let ActiveKey { action, swallowed } = self.active[row][col];
            self.active[row][col] = ActiveKey::default();
            self.combos.key_up(action);
            if !swallowed && self.process_record(action, false) {
                self.apply_default(action, false);
                self.channel.report(HostEvent::Key {
                    action,
                    is_down: false,
                });
            }
        }

        self.sync_indicators();
    }

    /// The per-record hook: default-layer keys, thumb tracking and the
    /// latch toggle. Returns true to continue default handling.
    fn process_record(&mut self, action: KeyAction, is_down: bool) -> bool {
        if let KeyAction::DefaultLayer(key) = action {
            if is_down {
                let base = match key {
                    DefaultLayerKey::Qwerty => BaseLayer::Qwerty,
                    DefaultLayerKey::ColemakDh => BaseLayer::ColemakDh,
                    DefaultLayerKey::Toggle => self.layers.default_base().toggled(),
                };
                self.set_default_layer(base);
            }
            return false;
        }

        if let Some(thumb) = ThumbKey::from_action(action) {
            return !self.latch.thumb_event(thumb, is_down).consumed();
        }

        if action == LATCH_TOGGLE && is_down {
            return !self.latch.toggle_key(&mut self.layers).consumed();
        }

        true
    }

    /// The momentary-layer half of the default handling: layer on for
    /// the duration of a thumb press. Runs only for events the hooks let
    /// through, which is exactly how a latched thumb's swallowed release
    /// keeps its layer alive.
    fn apply_default(&mut self, action: KeyAction, is_down: bool) {
        match action {
            KeyAction::Momentary(layer) | KeyAction::LayerTap { layer, .. } => {
                if is_down {
                    self.layers.layer_on(layer);
                } else {
                    self.layers.layer_off(layer);
                }
            }
            _ => {}
        }
    }

    fn fire_combo(&mut self, output: ComboOutput) {
        match output {
            ComboOutput::ToggleDefaultLayer => {
                let base = self.layers.default_base().toggled();
                self.set_default_layer(base);
            }
            ComboOutput::ResetKeyboard => firmware_functions::reset(),
        }
    }

    fn set_default_layer(&mut self, base: BaseLayer) {
        self.layers.set_default(base);
        self.host.set_default_layer(base);
    }

    fn sync_indicators(&mut self) {
        self.indicators
            .layer_state_changed(&self.layers, &mut self.host);
        self.indicators
            .default_layer_changed(self.layers.default_base(), &mut self.host);
    }
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod test;
