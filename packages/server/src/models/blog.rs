use serde::{Deserialize, Serialize};

/// Wire representation of a blog.
///
/// `id` is absent on create and required on update. On a merge-patch, absent
/// or null fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlogDto {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Engineering notes")]
    pub name: Option<String>,
    /// Owning user. Only `id` is read on writes; `login` is filled in on reads.
    pub user: Option<UserDto>,
}

/// Minimal user projection shown alongside a blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    #[schema(example = 3)]
    pub id: i64,
    #[schema(example = "admin")]
    pub login: Option<String>,
}
