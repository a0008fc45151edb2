//! Cassist CLI
//!
//! The interactive shell: reads one line at a time, answers `help`/`?`
//! locally, stops on `exit`, and forwards everything else to the assistant.

pub mod shell;

pub use shell::{render_reply, Shell, ShellCommand, ShellState};
