pub mod header;
pub mod pagination;
