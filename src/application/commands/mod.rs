mod access;
pub mod articles;
pub mod categories;

pub(crate) use access::{ensure_can_author, ensure_editorial};
