use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::blog;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            blog::list_blogs,
            blog::create_blog,
            blog::update_blog,
            blog::partial_update_blog
        ))
        .routes(routes!(blog::get_blog, blog::delete_blog))
}
