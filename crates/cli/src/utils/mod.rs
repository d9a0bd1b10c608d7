pub mod file;

pub use file::write_executable_script;
