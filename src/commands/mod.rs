/// Command implementations. The binary has a single command: column selection.
pub mod select;
