mod commands;
mod compose;
mod logging;
mod render;
mod setup;
mod styles;

pub use commands::run;
