#![no_std]
pub mod combo;
pub mod firmware_functions;
pub mod host;
pub mod keymap;
pub mod latch;
pub mod layers;
pub mod leds;
pub mod mapper;
pub mod timing;

#[macro_use]
mod macros;
