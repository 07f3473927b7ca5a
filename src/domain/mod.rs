// Domain layer - Core models with no outward dependencies
pub mod chart;
pub mod user;
