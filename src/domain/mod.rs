//! Domain layer - entities, errors and repository ports

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{NewUser, User, UserRepository};
