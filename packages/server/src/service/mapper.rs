use sea_orm::ActiveValue::{NotSet, Set};

use crate::entity::blog;
use crate::models::blog::{BlogDto, UserDto};
use crate::repository::{BlogWithUser, UserRef};

/// Conversions between [`BlogDto`] and the persisted blog.
pub struct BlogMapper;

impl BlogMapper {
    /// Writable columns taken from `dto`. The id stays unset when the dto has none.
    pub fn to_entity(dto: &BlogDto) -> blog::ActiveModel {
        blog::ActiveModel {
            id: dto.id.map_or(NotSet, Set),
            name: Set(dto.name.clone()),
            user_id: Set(dto.user.as_ref().map(|u| u.id)),
            ..Default::default()
        }
    }

    pub fn to_dto(view: BlogWithUser) -> BlogDto {
        BlogDto {
            id: Some(view.blog.id),
            name: view.blog.name,
            user: view.user.map(UserDto::from),
        }
    }

    /// Copy the non-null fields of `dto` onto `entity`.
    pub fn partial_update(entity: &mut blog::Model, dto: &BlogDto) {
        if let Some(name) = &dto.name {
            entity.name = Some(name.clone());
        }
        if let Some(user) = &dto.user {
            entity.user_id = Some(user.id);
        }
    }
}

impl From<UserRef> for UserDto {
    fn from(u: UserRef) -> Self {
        Self {
            id: u.id,
            login: Some(u.login),
        }
    }
}
