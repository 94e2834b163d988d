pub mod actions;
pub mod error;
pub mod flow;
pub mod render;
pub mod services;
