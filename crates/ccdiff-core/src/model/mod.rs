pub mod field_value;
pub mod record;

pub use field_value::FieldValue;
pub use record::Record;
