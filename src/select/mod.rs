/// Selection domain layer: input opening, line splitting, column matching.
pub mod columns;
pub mod errors;
pub mod input;
pub mod line;
pub mod selector;

pub use columns::ColumnSet;
pub use errors::SelectError;
pub use input::open_input;
pub use line::DEFAULT_DELIMITER;
pub use selector::{SelectedRow, Selector};
