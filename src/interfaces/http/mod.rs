//! HTTP REST API interfaces
//!
//! - `common`: error mapping and the validating JSON extractor
//! - `modules`: handlers per resource, plus request-id middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
