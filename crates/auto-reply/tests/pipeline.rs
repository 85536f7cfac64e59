#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end: config → pools on disk → inbound message → outbound send.

use std::{path::PathBuf, sync::Mutex};

use async_trait::async_trait;

use {
    spud_auto_reply::{AutoReply, Category, Error, ScriptedSource},
    spud_channels::{ChannelOutbound, InboundMessage},
    spud_config::{AddressMode, PoolFiles, SpudConfig},
};

#[derive(Default)]
struct RecordingOutbound {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingOutbound {
    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelOutbound for RecordingOutbound {
    async fn send_text(&self, channel_id: &str, text: &str) -> spud_channels::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        Ok(())
    }
}

fn write_pools(dir: &tempfile::TempDir) {
    let files = PoolFiles::default();
    let write = |name: &str, body: &str| std::fs::write(dir.path().join(name), body).unwrap();
    write(&files.oblique, "- Emphasize the flaws\n");
    write(&files.greeting, "- \"*sigh* hello\"\n");
    write(&files.goodnight, "- off you go then\n");
    write(&files.thanks, "- yeah yeah\n");
    write(&files.snark, "- I'm a potato. What did you expect?\n");
}

fn config(dir: &tempfile::TempDir, mode: AddressMode) -> SpudConfig {
    let mut cfg = SpudConfig::default();
    cfg.pools.dir = dir.path().to_path_buf();
    cfg.addressing.mode = mode;
    cfg
}

fn setup(mode: AddressMode) -> (tempfile::TempDir, AutoReply) {
    let dir = tempfile::tempdir().unwrap();
    write_pools(&dir);
    let ar = AutoReply::from_config(&config(&dir, mode)).unwrap();
    (dir, ar)
}

#[tokio::test]
async fn passive_oblique_reply_goes_to_same_channel() {
    let (_dir, ar) = setup(AddressMode::Mention);
    let out = RecordingOutbound::default();
    let mut rng = ScriptedSource::new([0.5]);

    let msg = InboundMessage::new("radio", "dj", "try a different strategy");
    let reply = ar.handle_inbound(&msg, &out, &mut rng).await.unwrap();

    assert_eq!(reply.map(|r| r.category), Some(Category::Oblique));
    assert_eq!(out.sent(), [(
        "radio".to_string(),
        "Emphasize the flaws".to_string()
    )]);
}

#[tokio::test]
async fn unaddressed_greeting_sends_nothing() {
    let (_dir, ar) = setup(AddressMode::Mention);
    let out = RecordingOutbound::default();
    let mut rng = ScriptedSource::new([0.0]);

    let msg = InboundMessage::new("radio", "dj", "hello everyone");
    assert!(ar.handle_inbound(&msg, &out, &mut rng).await.unwrap().is_none());
    assert!(out.sent().is_empty());
}

#[tokio::test]
async fn name_mode_treats_name_as_address() {
    let (_dir, ar) = setup(AddressMode::Name);
    let out = RecordingOutbound::default();
    let mut rng = ScriptedSource::new([0.0]);

    let msg = InboundMessage::new("radio", "dj", "hi Spud");
    let reply = ar.handle_inbound(&msg, &out, &mut rng).await.unwrap();
    assert_eq!(reply.map(|r| r.category), Some(Category::Greeting));
    assert_eq!(out.sent().len(), 1);
}

#[tokio::test]
async fn mention_mode_ignores_bare_name() {
    let (_dir, ar) = setup(AddressMode::Mention);
    let out = RecordingOutbound::default();
    let mut rng = ScriptedSource::new([0.0]);

    let msg = InboundMessage::new("radio", "dj", "hi Spud");
    assert!(ar.handle_inbound(&msg, &out, &mut rng).await.unwrap().is_none());

    let msg = msg.mentioning_bot();
    assert!(ar.handle_inbound(&msg, &out, &mut rng).await.unwrap().is_some());
}

#[tokio::test]
async fn blocked_thanks_still_snarks_in_dm() {
    let (_dir, ar) = setup(AddressMode::Mention);
    let out = RecordingOutbound::default();
    // thanks gate, snark gate, pool draw
    let mut rng = ScriptedSource::new([0.99, 0.50, 0.0]);

    let msg = InboundMessage::new("dm-42", "dj", "thanks spud").direct();
    let reply = ar.handle_inbound(&msg, &out, &mut rng).await.unwrap().unwrap();
    assert_eq!(reply.category, Category::Snark);
    assert_eq!(reply.text, "I'm a potato. What did you expect?");
    assert_eq!(rng.consumed(), 3);
}

#[tokio::test]
async fn own_messages_are_ignored() {
    let (_dir, ar) = setup(AddressMode::Name);
    let out = RecordingOutbound::default();
    let mut rng = ScriptedSource::new([0.0]);

    let mut msg = InboundMessage::new("radio", "spud", "oblique strategies, spud");
    msg.from_self = true;
    assert!(ar.handle_inbound(&msg, &out, &mut rng).await.unwrap().is_none());
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn startup_fails_without_every_pool() {
    let dir = tempfile::tempdir().unwrap();
    write_pools(&dir);
    std::fs::remove_file(dir.path().join(PoolFiles::default().greeting)).unwrap();
    let err = AutoReply::from_config(&config(&dir, AddressMode::Mention)).unwrap_err();
    assert!(matches!(err, Error::PoolNotFound { .. }));
}

#[test]
fn bundled_pools_load() {
    let mut cfg = SpudConfig::default();
    cfg.pools.dir = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data"));
    let ar = AutoReply::from_config(&cfg).unwrap();
    for category in Category::ALL {
        assert!(
            !ar.pools().get(category).is_empty(),
            "bundled {category} pool is empty"
        );
    }
}
