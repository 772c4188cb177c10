mod blog_post;
mod post_id;
mod read_time;
mod slug;

pub use blog_post::{BlogPost, BlogPostStatus, NewBlogPost, SeoMetadata, UpdateBlogPost};
pub use post_id::generate_id;
pub use read_time::{WORDS_PER_MINUTE, calculate_read_time};
pub use slug::generate_slug;
