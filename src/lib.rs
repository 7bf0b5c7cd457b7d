pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod storage;
