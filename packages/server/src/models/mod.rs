pub mod blog;
pub mod pagination;
