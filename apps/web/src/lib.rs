pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod render;
pub mod routes;
pub mod seed;
pub mod state;
