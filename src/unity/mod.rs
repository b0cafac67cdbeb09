// src/unity/mod.rs
mod client;
mod component;
mod models;
mod probe;

pub use client::{HealthSource, UnityClient};
pub use component::ComponentType;
pub use probe::StorageHealthProbe;
