// Application layer - Use cases and trait seams
pub mod controller;
pub mod json_fetcher;
pub mod renderers;
pub mod user_service;
