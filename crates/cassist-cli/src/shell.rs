//! Line-oriented conversation loop

use cassist_core::constants::{
    FALLBACK_MESSAGE, GOODBYE_MESSAGE, SUCCESS_MESSAGE, USAGE_HINT, WELCOME_MESSAGE,
};
use cassist_core::{Assistant, Reply};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

const PROMPT: &str = "User: ";

/// Where the conversation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    AwaitingInput,
    Processing,
    Terminated,
}

/// One line of user input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Exit,
    Empty,
    Request(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            ShellCommand::Empty
        } else if line.eq_ignore_ascii_case("exit") {
            ShellCommand::Exit
        } else {
            ShellCommand::Request(line.to_string())
        }
    }
}

/// Format a reply the way it is printed to the user.
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Operation(output) => match serde_json::to_string_pretty(output) {
            Ok(json) => format!("Assistant: {SUCCESS_MESSAGE}\nStructured output: {json}"),
            Err(e) => {
                error!("Failed to render structured output: {}", e);
                format!("Assistant: {FALLBACK_MESSAGE}")
            }
        },
        Reply::Guidance(message) if message.trim().is_empty() => {
            format!("Assistant: {FALLBACK_MESSAGE}")
        }
        Reply::Guidance(message) => format!("Assistant: {message}"),
    }
}

/// Interactive shell around an [`Assistant`]
pub struct Shell {
    assistant: Assistant,
}

impl Shell {
    pub fn new(assistant: Assistant) -> Self {
        Self { assistant }
    }

    /// Run the conversation until `exit` or end of input.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer
            .write_all(format!("{WELCOME_MESSAGE}\n{USAGE_HINT}\n").as_bytes())
            .await?;

        let mut state = ShellState::AwaitingInput;
        let mut line = String::new();

        while state != ShellState::Terminated {
            writer.write_all(format!("\n{PROMPT}").as_bytes()).await?;
            writer.flush().await?;

            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                // End of input behaves like `exit`.
                writer.write_all(b"\n").await?;
                state = self.transition(state, ShellState::Terminated);
                continue;
            }

            match ShellCommand::parse(&line) {
                ShellCommand::Exit => {
                    state = self.transition(state, ShellState::Terminated);
                }
                ShellCommand::Empty => {}
                ShellCommand::Request(text) => {
                    state = self.transition(state, ShellState::Processing);
                    let reply = self.assistant.process(&text).await;
                    writer
                        .write_all(format!("{}\n", render_reply(&reply)).as_bytes())
                        .await?;
                    state = self.transition(state, ShellState::AwaitingInput);
                }
            }
        }

        writer
            .write_all(format!("Assistant: {GOODBYE_MESSAGE}\n").as_bytes())
            .await?;
        writer.flush().await
    }

    fn transition(&self, from: ShellState, to: ShellState) -> ShellState {
        debug!("Shell state {:?} -> {:?}", from, to);
        to
    }
}
