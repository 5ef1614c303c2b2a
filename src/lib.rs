pub mod apples;
pub mod autopilot;
pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
