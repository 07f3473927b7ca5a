// Presentation layer - Terminal UI
pub mod app;
pub mod chart_backend;
pub mod selector;
