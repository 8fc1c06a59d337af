pub mod aggregate;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod labels;
pub mod layout_constants;
pub mod pitch;
pub mod shot;
pub mod shotmap;
pub mod stats;
pub mod zones;

#[cfg(any(test, feature = "development"))]
pub mod dev;
