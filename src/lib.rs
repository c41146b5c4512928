pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod search_backend;
pub mod views;
