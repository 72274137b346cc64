//! # Blog Shared
//!
//! Plain data carried across the service boundary: request bodies,
//! the success envelope and the error body.

pub mod dto;
pub mod response;

pub use dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
pub use response::{ApiResponse, ErrorResponse};
