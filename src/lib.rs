pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod image_processing;
pub mod mcp_server;
pub mod openai;
pub mod prompt;
pub mod service;
pub mod staging;
pub mod storage;
pub mod tools;
pub mod web;
