pub mod admin;
pub mod analytics; // Public for OpenAPI annotations
pub mod blog;
pub mod constants;
pub mod health_check; // Public for OpenAPI annotations
pub mod tools; // Public for OpenAPI annotations

pub use admin::*;
pub use analytics::*;
pub use blog::{get_post_by_slug, get_published_posts};
pub use health_check::*;
pub use tools::*;
