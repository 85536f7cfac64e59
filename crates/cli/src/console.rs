//! Line-oriented console transport: stdin in, stdout out.
//!
//! Every input line is one message in a single channel. A line starting with
//! `@<bot name>` counts as an explicit mention; `--direct` makes the whole
//! session a direct conversation.

use {
    async_trait::async_trait,
    spud_auto_reply::{AutoReply, UniformSource},
    spud_channels::{ChannelOutbound, InboundMessage},
    tokio::{
        io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
        sync::Mutex,
    },
    tracing::{info, warn},
};

const CHANNEL_ID: &str = "console";

/// Writes each reply as one line.
pub struct ConsoleOutbound<W> {
    writer: Mutex<W>,
}

impl<W> ConsoleOutbound<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ChannelOutbound for ConsoleOutbound<W> {
    async fn send_text(&self, channel_id: &str, text: &str) -> spud_channels::Result<()> {
        let mut writer = self.writer.lock().await;
        let line = format!("{text}\n");
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| spud_channels::Error::external(format!("write to {channel_id}"), e))?;
        writer
            .flush()
            .await
            .map_err(|e| spud_channels::Error::external(format!("flush {channel_id}"), e))
    }
}

/// Whether `line` opens with `@name` as a whole word, ignoring case.
fn starts_with_mention(line: &str, bot_name: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix('@') else {
        return false;
    };
    let name_len = bot_name.len();
    if rest.len() < name_len || !rest.is_char_boundary(name_len) {
        return false;
    }
    let (head, tail) = rest.split_at(name_len);
    head.eq_ignore_ascii_case(bot_name) && !tail.starts_with(|c: char| c.is_alphanumeric())
}

/// Read messages until EOF, answering through `outbound`.
///
/// Returns the number of replies sent.
pub async fn run_console<R, U>(
    auto_reply: &AutoReply,
    reader: R,
    outbound: &dyn ChannelOutbound,
    rng: &mut U,
    direct: bool,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    U: UniformSource + Send,
{
    info!(bot = auto_reply.bot_name(), direct, "spud is lurking on the console");
    let mut lines = reader.lines();
    let mut replies = 0;

    while let Some(line) = lines.next_line().await? {
        let mut msg = InboundMessage::new(CHANNEL_ID, "operator", line);
        msg.mentions_bot = starts_with_mention(&msg.text, auto_reply.bot_name());
        msg.is_direct = direct;

        match auto_reply.handle_inbound(&msg, outbound, rng).await {
            Ok(Some(_)) => replies += 1,
            Ok(None) => {},
            Err(e) => warn!(error = %e, "failed to deliver reply"),
        }
    }

    info!(replies, "console closed");
    Ok(replies)
}
