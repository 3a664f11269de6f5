//! Board-level functions registered by the binary at startup.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

pub type ResetFn = &'static (dyn Fn() + Sync);

static RESET: CriticalSectionMutex<RefCell<Option<ResetFn>>> =
    CriticalSectionMutex::new(RefCell::new(None));

/// Jump to the bootloader; a no-op until a handler is registered.
pub fn reset() {
    RESET.lock(|r| {
        if let Some(f) = *r.borrow() {
            f();
        }
    });
}

/// Register the MCU reset used by the bootloader combo.
pub fn handle_reset(value: Option<ResetFn>) {
    RESET.lock(|r| {
        let mut guard = r.borrow_mut();
        *guard = value;
    });
}
