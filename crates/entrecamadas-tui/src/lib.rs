pub mod cli;
pub mod input;
pub mod render;
pub mod runtime;
pub mod speech;
pub mod ui;
