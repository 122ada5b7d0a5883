pub mod record;
pub mod value;

pub use record::{Field, Record};
pub use value::{Kind, Value};
