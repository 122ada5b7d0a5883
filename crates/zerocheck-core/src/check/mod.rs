pub mod checker;

pub use checker::{is_zero, ZeroChecker};
