use sea_orm::sea_query::{Alias, Expr, JoinType, Order, Query, SelectStatement};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryResult, TryIntoModel,
};

use super::{BlogCriteria, BlogRowMapper, Pageable, RepositoryError, UserRef, UserRowMapper};
use crate::entity::{blog, user};

/// Alias of the blog table in the join query.
pub(crate) const ENTITY_ALIAS: &str = "e";
/// Alias of the user table in the join query.
const USER_ALIAS: &str = "e_user";

const ENTITY_PREFIX: &str = "e_";
const USER_PREFIX: &str = "user_";

/// A blog together with its owning user, as read through the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogWithUser {
    pub blog: blog::Model,
    pub user: Option<UserRef>,
}

pub struct BlogRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> BlogRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// All blogs in page order. `None` returns every row.
    pub async fn find_all(&self, pageable: Option<&Pageable>) -> Result<Vec<BlogWithUser>, DbErr> {
        self.find_all_by(pageable, None).await
    }

    /// Like [`find_all`](Self::find_all), restricted by `criteria` when given.
    pub async fn find_all_by(
        &self,
        pageable: Option<&Pageable>,
        criteria: Option<BlogCriteria>,
    ) -> Result<Vec<BlogWithUser>, DbErr> {
        let query = create_query(pageable, criteria);
        let backend = self.conn.get_database_backend();
        let rows = self.conn.query_all_raw(backend.build(&query)).await?;
        rows.iter().map(process).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<BlogWithUser>, DbErr> {
        let query = create_query(None, Some(BlogCriteria::IdEquals(id)));
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one_raw(backend.build(&query))
            .await?
            .as_ref()
            .map(process)
            .transpose()
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let n = blog::Entity::find()
            .filter(blog::Column::Id.eq(id))
            .count(self.conn)
            .await?;
        Ok(n > 0)
    }

    /// Insert a new row; the store assigns the id.
    pub async fn insert(&self, mut entity: blog::ActiveModel) -> Result<blog::Model, DbErr> {
        entity.id = ActiveValue::NotSet;
        entity.insert(self.conn).await
    }

    /// Insert when `entity` has no id, otherwise update the row it names.
    pub async fn save(&self, entity: blog::ActiveModel) -> Result<blog::Model, RepositoryError> {
        if matches!(entity.id, ActiveValue::NotSet) {
            return Ok(self.insert(entity).await?);
        }

        let model = entity.try_into_model()?;
        if self.update(&model).await? == 0 {
            return Err(RepositoryError::NoSuchRow { id: model.id });
        }
        Ok(model)
    }

    /// Overwrite every column of the row keyed by `entity.id`.
    ///
    /// Returns the number of rows affected.
    pub async fn update(&self, entity: &blog::Model) -> Result<u64, DbErr> {
        let res = blog::Entity::update_many()
            .col_expr(blog::Column::Name, Expr::value(entity.name.clone()))
            .col_expr(blog::Column::UserId, Expr::value(entity.user_id))
            .filter(blog::Column::Id.eq(entity.id))
            .exec(self.conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        blog::Entity::find().count(self.conn).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        blog::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }
}

/// Build `SELECT e.*, e_user.* FROM blog e LEFT JOIN jhi_user e_user ...`
/// with every column aliased under its table prefix.
fn create_query(pageable: Option<&Pageable>, criteria: Option<BlogCriteria>) -> SelectStatement {
    use sea_orm::sea_query::ExprTrait;

    let entity_table = Alias::new(ENTITY_ALIAS);
    let user_table = Alias::new(USER_ALIAS);

    let mut query = Query::select();
    for (column, name) in [
        (blog::Column::Id, "id"),
        (blog::Column::Name, "name"),
        (blog::Column::UserId, "user_id"),
    ] {
        query.expr_as(
            Expr::col((entity_table.clone(), column)),
            Alias::new(format!("{ENTITY_PREFIX}{name}")),
        );
    }
    for (column, name) in [(user::Column::Id, "id"), (user::Column::Login, "login")] {
        query.expr_as(
            Expr::col((user_table.clone(), column)),
            Alias::new(format!("{USER_PREFIX}{name}")),
        );
    }
    query
        .from_as(blog::Entity, entity_table.clone())
        .join_as(
            JoinType::LeftJoin,
            user::Entity,
            user_table.clone(),
            Expr::col((entity_table.clone(), blog::Column::UserId))
                .equals((user_table, user::Column::Id)),
        );

    if let Some(criteria) = criteria {
        query.cond_where(criteria.into_condition(ENTITY_ALIAS));
    }

    let sort = pageable.map(|p| p.sort.as_slice()).unwrap_or_default();
    if sort.is_empty() {
        query.order_by((entity_table, blog::Column::Id), Order::Asc);
    } else {
        for order in sort {
            query.order_by(
                (entity_table.clone(), order.field.column()),
                order.direction.into(),
            );
        }
    }

    if let Some(p) = pageable {
        query.limit(p.size).offset(p.offset());
    }

    query
}

fn process(row: &QueryResult) -> Result<BlogWithUser, DbErr> {
    Ok(BlogWithUser {
        blog: BlogRowMapper::apply(row, ENTITY_PREFIX)?,
        user: UserRowMapper::apply(row, USER_PREFIX)?,
    })
}
