mod field;
mod record;

pub use field::{FieldClass, FieldKind, FieldModel};
pub use record::RecordModel;
