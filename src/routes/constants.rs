//! Common constants used across route handlers

/// Generic error message for internal server errors
pub const ERROR_SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// Error message for a post id or slug with no matching post
pub const ERROR_POST_NOT_FOUND: &str = "Blog post not found";

/// Error message when an admin request hits an unreadable blog store
pub const ERROR_STORAGE_UNAVAILABLE: &str = "Blog storage is unavailable";
