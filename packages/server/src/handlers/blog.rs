use axum::Json;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderValue, StatusCode, header::LOCATION};
use axum::response::IntoResponse;
use axum_extra::extract::Query;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::{AppJson, MergePatch};
use crate::models::blog::BlogDto;
use crate::models::pagination::PageQuery;
use crate::service::blog_service;
use crate::state::AppState;
use crate::utils::{header, pagination};

const ENTITY_NAME: &str = "blog";

#[utoipa::path(
    post,
    path = "/blogs",
    tag = "Blogs",
    operation_id = "createBlog",
    summary = "Create a new blog",
    description = "Creates a blog. The body must not carry an `id`; the server assigns one and returns it with a `Location` header.",
    request_body = BlogDto,
    responses(
        (status = 201, description = "Blog created", body = BlogDto),
        (status = 400, description = "Body already has an id (VALIDATION_ERROR, error_key `idexists`)", body = ErrorBody),
        (status = 409, description = "Row rejected by the store (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, dto))]
pub async fn create_blog(
    State(state): State<AppState>,
    AppJson(dto): AppJson<BlogDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.id.is_some() {
        return Err(AppError::bad_request_alert(
            "A new blog cannot already have an ID",
            ENTITY_NAME,
            "idexists",
        ));
    }

    let result = blog_service(&state.db).save(&dto).await?;
    let id = saved_id(&result)?;

    let mut headers = header::entity_creation_alert(&state.config.app.name, ENTITY_NAME, &id);
    let location = HeaderValue::try_from(format!("/api/blogs/{id}"))
        .map_err(|e| AppError::Internal(format!("Invalid Location header: {e}")))?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(result)))
}

#[utoipa::path(
    put,
    path = "/blogs",
    tag = "Blogs",
    operation_id = "updateBlog",
    summary = "Update an existing blog",
    description = "Replaces every field of the blog named by the body's `id`.",
    request_body = BlogDto,
    responses(
        (status = 200, description = "Blog updated", body = BlogDto),
        (status = 400, description = "Body has no id (VALIDATION_ERROR, error_key `idnull`)", body = ErrorBody),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, dto), fields(id = ?dto.id))]
pub async fn update_blog(
    State(state): State<AppState>,
    AppJson(dto): AppJson<BlogDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.id.is_none() {
        return Err(AppError::bad_request_alert("Invalid id", ENTITY_NAME, "idnull"));
    }

    let result = blog_service(&state.db)
        .update(&dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))?;
    let id = saved_id(&result)?;

    let headers = header::entity_update_alert(&state.config.app.name, ENTITY_NAME, &id);
    Ok((headers, Json(result)))
}

#[utoipa::path(
    patch,
    path = "/blogs",
    tag = "Blogs",
    operation_id = "partialUpdateBlog",
    summary = "Partially update a blog",
    description = "Merges the non-null fields of the body into the blog named by its `id`. Fields that are absent or null keep their stored values. Requires `Content-Type: application/merge-patch+json`.",
    request_body(content = BlogDto, content_type = "application/merge-patch+json"),
    responses(
        (status = 200, description = "Blog updated", body = BlogDto),
        (status = 400, description = "Body has no id (VALIDATION_ERROR, error_key `idnull`)", body = ErrorBody),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
        (status = 415, description = "Wrong content type (UNSUPPORTED_MEDIA_TYPE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, dto), fields(id = ?dto.id))]
pub async fn partial_update_blog(
    State(state): State<AppState>,
    MergePatch(dto): MergePatch<BlogDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.id.is_none() {
        return Err(AppError::bad_request_alert("Invalid id", ENTITY_NAME, "idnull"));
    }

    let result = blog_service(&state.db)
        .partial_update(&dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))?;
    let id = saved_id(&result)?;

    let headers = header::entity_update_alert(&state.config.app.name, ENTITY_NAME, &id);
    Ok((headers, Json(result)))
}

#[utoipa::path(
    get,
    path = "/blogs",
    tag = "Blogs",
    operation_id = "listBlogs",
    summary = "List blogs",
    description = "Returns one page of blogs. The total row count is sent in `X-Total-Count` and navigation links in `Link`. Without `sort`, blogs are ordered by id ascending.",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of blogs", body = Vec<BlogDto>),
        (status = 400, description = "Invalid sort parameter (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, uri, query))]
pub async fn list_blogs(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pageable = query.into_pageable(&state.config.pagination)?;

    let service = blog_service(&state.db);
    let (total, data) = tokio::try_join!(service.count_all(), service.find_all(&pageable))?;

    let headers = pagination::generate_pagination_headers(&uri, &pageable, total);
    Ok((headers, Json(data)))
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "Blogs",
    operation_id = "getBlog",
    summary = "Get a blog by ID",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog details", body = BlogDto),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogDto>, AppError> {
    blog_service(&state.db)
        .find_one(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "Blogs",
    operation_id = "deleteBlog",
    summary = "Delete a blog by ID",
    description = "Deletes the blog if it exists. Always answers 204 once the store has run the delete.",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 409, description = "Blog is still referenced elsewhere (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    blog_service(&state.db).delete(id).await?;

    let headers = header::entity_deletion_alert(&state.config.app.name, ENTITY_NAME, &id.to_string());
    Ok((StatusCode::NO_CONTENT, headers))
}

fn saved_id(dto: &BlogDto) -> Result<String, AppError> {
    dto.id
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::Internal("Stored blog has no id".into()))
}
