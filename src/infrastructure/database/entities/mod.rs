//! Database entities module

pub mod nome_usuario;

pub use nome_usuario::Entity as NomeUsuario;
