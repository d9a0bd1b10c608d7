//! Interfaces at the seams between resolution and the outside world

pub mod file_probe;

pub use file_probe::FileProbe;
