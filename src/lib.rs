pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod evaluators;
pub mod gateway;
pub mod handlers;
pub mod llm_client;
pub mod models;
pub mod relay;
pub mod store;
