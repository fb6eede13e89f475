pub mod errors;
pub mod format;
pub mod table;

pub use errors::ConversionError;
pub use table::Table;
