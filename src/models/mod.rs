//! Configuration models for the directory server.

pub mod config;
