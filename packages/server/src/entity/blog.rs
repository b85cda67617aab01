use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A blog row. The owning user is held only as `user_id`; the joined user
/// is resolved on read by the repository.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: Option<String>,

    pub user_id: Option<i64>,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
