//! I/O modules for reading the viewer's input.

pub mod stdin_reader;

pub use stdin_reader::read_stdin_line;
