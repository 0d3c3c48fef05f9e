// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log capture for resolver tests.

use std::future::Future;
use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

fn subscriber(buffer: &Arc<Mutex<Vec<u8>>>) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: Arc::clone(buffer),
        })
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}

fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    let guard = buffer.lock().unwrap();
    String::from_utf8_lossy(&guard).into_owned()
}

/// Runs `f` and returns the warnings and errors it logged.
pub(super) fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let out = tracing::subscriber::with_default(subscriber(&buffer), f);
    (out, contents(&buffer))
}

/// Awaits the future built by `f` and returns the warnings and errors it logged.
///
/// The subscriber is thread-local, so use a current-thread runtime.
pub(super) async fn run_capturing_warnings<F, Fut>(f: F) -> (Fut::Output, String)
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let guard = tracing::subscriber::set_default(subscriber(&buffer));
    let out = f().await;
    drop(guard);
    (out, contents(&buffer))
}
