mod blog;
mod mapper;

pub use blog::{BlogService, blog_service};
pub use mapper::BlogMapper;
