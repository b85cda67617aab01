use serde::Deserialize;

use crate::config::PaginationConfig;
use crate::error::AppError;
use crate::repository::{Pageable, SortOrder};

/// Page request query parameters (`?page=0&size=20&sort=id,desc`).
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index.
    #[param(example = 0)]
    pub page: Option<u64>,
    /// Page size (default 20). Larger values are clamped to the configured maximum.
    #[param(example = 20)]
    pub size: Option<u64>,
    /// Sort order as `property[,asc|desc]`; may be repeated.
    /// Properties: `id`, `name`, `userId`.
    #[serde(default)]
    #[param(example = "id,desc")]
    pub sort: Vec<String>,
}

impl PageQuery {
    pub fn into_pageable(self, limits: &PaginationConfig) -> Result<Pageable, AppError> {
        let size = match self.size {
            None | Some(0) => limits.default_size,
            Some(n) => n.min(limits.max_size),
        };
        let sort = self
            .sort
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<SortOrder>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::Validation)?;

        let page = self.page.unwrap_or(0);
        if page
            .checked_mul(size)
            .is_none_or(|offset| offset > i64::MAX as u64)
        {
            return Err(AppError::Validation(format!(
                "Page {page} with size {size} is out of range"
            )));
        }

        Ok(Pageable {
            sort,
            ..Pageable::of(page, size)
        })
    }
}
