//! Domain entities shared across the directory service.

pub mod user;
