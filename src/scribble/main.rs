//! # scribble CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns an error into a message and exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - context wiring + dispatch (commands.rs)                  │
//! │  - terminal rendering (render.rs, styles.rs)                │
//! │  - debounced stdin capture (compose.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!            scribble library (api → commands → store)
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
