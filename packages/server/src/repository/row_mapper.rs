use sea_orm::{DbErr, QueryResult};
use serde::{Deserialize, Serialize};

use crate::entity::blog;

/// Minimal projection of the owning user, resolved through the join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub login: String,
}

/// Reads the blog columns selected under `prefix` (e.g. `e_id`, `e_name`).
pub struct BlogRowMapper;

impl BlogRowMapper {
    pub fn apply(row: &QueryResult, prefix: &str) -> Result<blog::Model, DbErr> {
        Ok(blog::Model {
            id: row.try_get(prefix, "id")?,
            name: row.try_get(prefix, "name")?,
            user_id: row.try_get(prefix, "user_id")?,
        })
    }
}

/// Reads the left-joined user columns selected under `prefix`.
///
/// Yields `None` when the join found no user, which is always the case for a
/// blog whose `user_id` is NULL.
pub struct UserRowMapper;

impl UserRowMapper {
    pub fn apply(row: &QueryResult, prefix: &str) -> Result<Option<UserRef>, DbErr> {
        let Some(id) = row.try_get::<Option<i64>>(prefix, "id")? else {
            return Ok(None);
        };
        Ok(Some(UserRef {
            id,
            login: row.try_get(prefix, "login")?,
        }))
    }
}
