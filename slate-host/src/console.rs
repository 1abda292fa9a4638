//! Line-oriented console surfaces
//!
//! The same input stream feeds both the command loop and the omnibar, so
//! a prompt simply consumes the next line the user types.

use async_trait::async_trait;
use slate_core::{InputOptions, Notification, NotificationId, PluginResult};
use slate_plugin::{Notifications, Omnibar};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::Mutex;

const PROMPT: &str = "> ";

pub struct Console<R, W> {
    input: Mutex<Lines<R>>,
    output: Mutex<W>,
    last_notification: AtomicU64,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input.lines()),
            output: Mutex::new(output),
            last_notification: AtomicU64::new(0),
        }
    }

    /// Next input line without its line ending; `None` at end of input.
    pub async fn read_line(&self) -> PluginResult<Option<String>> {
        let mut input = self.input.lock().await;
        Ok(input.next_line().await?)
    }

    pub async fn write_line(&self, text: &str) -> PluginResult<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        Ok(())
    }

    async fn write_prompt(&self) -> PluginResult<()> {
        let mut output = self.output.lock().await;
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> Omnibar for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn show_input(&self, title: &str, options: InputOptions) -> PluginResult<Option<String>> {
        let header = match &options.placeholder {
            Some(placeholder) => format!("{} [{}]", title, placeholder),
            None => title.to_string(),
        };
        self.write_line(&header).await?;
        self.write_prompt().await?;
        self.read_line().await
    }
}

#[async_trait]
impl<R, W> Notifications for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn notify(&self, notification: Notification) -> PluginResult<NotificationId> {
        let id = self.last_notification.fetch_add(1, Ordering::Relaxed) + 1;
        self.write_line(&notification.to_string()).await?;
        Ok(NotificationId(id))
    }
}

#[cfg(test)]
impl<R> Console<R, Vec<u8>>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub async fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output.lock().await).into_owned()
    }
}
