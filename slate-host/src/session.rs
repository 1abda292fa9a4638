//! Interactive command loop

use crate::console::Console;
use slate_core::PluginResult;
use slate_plugin::CommandRegistry;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Help,
    Quit,
    /// Command id plus everything after the first run of whitespace
    Command { id: &'a str, arg: &'a str },
}

pub fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    let (id, arg) = match line.split_once(char::is_whitespace) {
        Some((id, rest)) => (id, rest.trim_start()),
        None => (line, ""),
    };
    match id {
        "help" => Line::Help,
        "quit" | "exit" => Line::Quit,
        _ => Line::Command { id, arg },
    }
}

/// Read commands until `quit` or end of input. Command failures are
/// reported to the user and do not end the session.
pub async fn run<R, W>(console: &Console<R, W>, registry: &CommandRegistry) -> PluginResult<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    loop {
        let line = match console.read_line().await? {
            Some(line) => line,
            None => {
                info!("input closed");
                break;
            }
        };

        match parse_line(&line) {
            Line::Blank => continue,
            Line::Quit => break,
            Line::Help => print_help(console, registry).await?,
            Line::Command { id, arg } => match registry.invoke(id, arg).await {
                Ok(output) => debug!(command = id, %output, "command completed"),
                Err(e) => {
                    warn!(command = id, code = e.code(), error = %e, "command failed");
                    console.write_line(&format!("error: {}", e)).await?;
                }
            },
        }
    }
    Ok(())
}

async fn print_help<R, W>(console: &Console<R, W>, registry: &CommandRegistry) -> PluginResult<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let rows = registry.describe();
    if rows.is_empty() {
        return console.write_line("no commands registered").await;
    }
    let width = rows.iter().map(|(id, _)| id.as_str().len()).max().unwrap_or(0);
    for (id, description) in rows {
        let row = format!("{:<width$}  {}", id.as_str(), description, width = width);
        console.write_line(row.trim_end()).await?;
    }
    Ok(())
}
