mod category;
mod table;
mod value;

pub use category::{Category, FormatSlot, SlotKind};
pub use table::CategoryTable;
pub use value::Value;
