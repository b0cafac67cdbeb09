// src/lib.rs
pub mod cli;
pub mod config;
pub mod elasticsearch;
pub mod health;
pub mod probe;
pub mod retry;
pub mod routes;
pub mod unity;
