//! Shared test utilities

#![allow(dead_code)]

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use voice_relay::api::{self, ApiState};
use voice_relay::{Error, Relay, TextGenerator};

/// Generator double that records every prompt it receives
pub struct ScriptedGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Always answer with `reply`
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Always fail
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> voice_relay::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| Error::Generation("upstream unavailable: 503".to_string()))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// Build the full application router over a generator double
pub fn build_test_router(generator: Arc<ScriptedGenerator>) -> axum::Router {
    build_test_router_with_debug(generator, false)
}

/// Build the application router with an explicit debug mode
pub fn build_test_router_with_debug(generator: Arc<ScriptedGenerator>, debug: bool) -> axum::Router {
    let state = Arc::new(ApiState {
        relay: Relay::new(generator),
    });
    api::router(state, debug)
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Plain-text subscriber writing into `buffer`, up to `max_level`
pub fn capture_subscriber(
    buffer: LogBuffer,
    max_level: tracing::Level,
) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(move || buffer.clone())
        .with_ansi(false)
        .with_max_level(max_level)
        .finish()
}
