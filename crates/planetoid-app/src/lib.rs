//! Planetoid application: the windowed viewer and the headless frame exporter.

pub mod export;
pub mod frame_clock;
pub mod platform;
pub mod settings;
pub mod window;
