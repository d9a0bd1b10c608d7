//! Service implementations of the interface traits

pub mod default_file_probe;

pub use default_file_probe::DefaultFileProbe;
