//! Data access for blogs.
//!
//! Reads go through a hand-built join of `blog` against `jhi_user` so the
//! owning user's login can be shown alongside each row; writes touch the
//! `blog` table only.

mod blog;
mod criteria;
mod pageable;
mod row_mapper;

pub use blog::{BlogRepository, BlogWithUser};
pub use criteria::BlogCriteria;
pub use pageable::{BlogSortField, Direction, Pageable, SortOrder};
pub use row_mapper::{BlogRowMapper, UserRef, UserRowMapper};

use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Db(#[from] DbErr),
    /// An update keyed by id matched no row.
    #[error("Unable to update Blog with id = {id}")]
    NoSuchRow { id: i64 },
}
