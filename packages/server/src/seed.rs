use chrono::Utc;
use sea_orm::sea_query::{Index, OnConflict, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{blog, user};

/// Accounts every installation starts with: `(login, email)`.
const DEFAULT_USERS: &[(&str, &str)] = &[
    ("system", "system@localhost"),
    ("admin", "admin@localhost"),
    ("user", "user@localhost"),
];

/// Seed the `jhi_user` table with the default accounts.
pub async fn seed_users(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut inserted = 0u32;
    for &(login, email) in DEFAULT_USERS {
        let model = user::ActiveModel {
            login: Set(login.to_string()),
            email: Set(Some(email.to_string())),
            activated: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = user::Entity::insert(model)
            .on_conflict(
                OnConflict::column(user::Column::Login)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(0) | Err(DbErr::RecordNotInserted) => {}
            Ok(_) => inserted += 1,
            Err(e) => return Err(e),
        }
    }

    if inserted > 0 {
        info!("Seeded {} new users", inserted);
    }

    Ok(())
}

/// Ensure required database indexes exist.
///
/// Schema sync does not index foreign key columns, so the blog owner lookup
/// index is created here.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_blog_user_id")
        .table(blog::Entity)
        .col(blog::Column::UserId)
        .to_string(PostgresQueryBuilder);

    db.execute_unprepared(&stmt).await.inspect_err(|e| {
        tracing::error!("Failed to create index idx_blog_user_id: {}", e);
    })?;
    info!("Ensured index idx_blog_user_id exists");

    Ok(())
}
