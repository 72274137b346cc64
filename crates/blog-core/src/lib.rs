//! # Blog Core
//!
//! The domain layer of the blog service: the post entity, field
//! validation, the failure taxonomy and the post lifecycle service.
//! Persistence is reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{Cause, DomainError, RepoError};
pub use service::PostService;
