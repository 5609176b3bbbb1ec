//! # NomeUsuario Service
//!
//! CRUD REST API for user profiles (name, email, phone, birth date).
//!
//! ## Architecture
//!
//! - **domain**: the User entity, errors and the repository trait
//! - **infrastructure**: SeaORM/SQLite and in-memory repositories, migrations
//! - **interfaces**: axum handlers, router and Swagger documentation
//! - **server**: bootstrap and graceful shutdown
//! - **config**: TOML configuration

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export storage types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryUserRepository, SeaOrmUserRepository,
};

// Re-export API router
pub use interfaces::http::create_api_router;
