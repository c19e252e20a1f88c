//! GraphML export

mod encode;
mod repair;

pub use encode::{encode, EncodeError, TITLE_ATTR, TITLE_KEY_ID};
pub use repair::repair_numeric_references;
