use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionSession, TransactionTrait};
use tracing::debug;

use super::BlogMapper;
use crate::models::blog::BlogDto;
use crate::repository::{BlogRepository, Pageable, RepositoryError};

/// Blog use cases on top of [`BlogRepository`].
///
/// Each write runs in its own transaction; reads run on the bare connection.
pub struct BlogService<'a, C> {
    conn: &'a C,
}

pub fn blog_service(db: &DatabaseConnection) -> BlogService<'_, DatabaseConnection> {
    BlogService::new(db)
}

impl<'a, C> BlogService<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Insert `dto` when it has no id, otherwise overwrite the row it names.
    pub async fn save(&self, dto: &BlogDto) -> Result<BlogDto, RepositoryError> {
        debug!(?dto, "Request to save Blog");

        let txn = self.conn.begin().await?;
        let repo = BlogRepository::new(&txn);
        let saved = repo.save(BlogMapper::to_entity(dto)).await?;
        let view = repo
            .find_by_id(saved.id)
            .await?
            .ok_or(RepositoryError::NoSuchRow { id: saved.id })?;
        txn.commit().await?;

        Ok(BlogMapper::to_dto(view))
    }

    /// Full update of an existing blog. `None` when no row has `dto.id`.
    pub async fn update(&self, dto: &BlogDto) -> Result<Option<BlogDto>, RepositoryError> {
        debug!(?dto, "Request to update Blog");

        let Some(id) = dto.id else {
            return Ok(None);
        };

        let txn = self.conn.begin().await?;
        let repo = BlogRepository::new(&txn);
        if !repo.exists_by_id(id).await? {
            return Ok(None);
        }
        repo.save(BlogMapper::to_entity(dto)).await?;
        let view = repo
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NoSuchRow { id })?;
        txn.commit().await?;

        Ok(Some(BlogMapper::to_dto(view)))
    }

    /// Merge the non-null fields of `dto` into the stored blog.
    /// `None` when no row has `dto.id`.
    pub async fn partial_update(&self, dto: &BlogDto) -> Result<Option<BlogDto>, RepositoryError> {
        debug!(?dto, "Request to partially update Blog");

        let Some(id) = dto.id else {
            return Ok(None);
        };

        let txn = self.conn.begin().await?;
        let repo = BlogRepository::new(&txn);
        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut blog = existing.blog;
        BlogMapper::partial_update(&mut blog, dto);
        repo.save(blog.into()).await?;

        let view = repo
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NoSuchRow { id })?;
        txn.commit().await?;

        Ok(Some(BlogMapper::to_dto(view)))
    }

    pub async fn find_all(&self, pageable: &Pageable) -> Result<Vec<BlogDto>, RepositoryError> {
        debug!("Request to get all Blogs");
        let rows = BlogRepository::new(self.conn)
            .find_all(Some(pageable))
            .await?;
        Ok(rows.into_iter().map(BlogMapper::to_dto).collect())
    }

    pub async fn count_all(&self) -> Result<u64, RepositoryError> {
        Ok(BlogRepository::new(self.conn).count().await?)
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<BlogDto>, RepositoryError> {
        debug!(id, "Request to get Blog");
        let found = BlogRepository::new(self.conn).find_by_id(id).await?;
        Ok(found.map(BlogMapper::to_dto))
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        debug!(id, "Request to delete Blog");

        let txn = self.conn.begin().await?;
        BlogRepository::new(&txn).delete_by_id(id).await?;
        txn.commit().await?;

        Ok(())
    }
}
