// SimpleDB Rust Library for Amazon SimpleDB
// Copyright 2026 The simpledb-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Buffering writer that stores each written message as an item of a SimpleDB domain.
//!
//! Every call to `write` becomes one [`Item`] named after the current time
//! with a single `msg` attribute holding the trimmed text. Items are buffered
//! and handed to a background thread in batches of [`LOG_BATCH_SIZE`]; the
//! thread stores each batch with one batch-put call. Delivery is best effort:
//! a failed batch is logged and dropped, and a batch is also dropped when
//! [`MAX_PENDING_FLUSHES`] batches are already waiting.
//!
//! # Example
//!
//! ```no_run
//! use simpledb::sdb::SdbClient;
//! use simpledb::sdb::http::Region;
//! use simpledb::sdb::log_writer::SdbLogWriter;
//! use std::io::Write;
//!
//! let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
//! let mut writer = SdbLogWriter::new(client, "app-logs").unwrap();
//! writer.write_all(b"service started").unwrap();
//! writer.shutdown();
//! ```

use crate::sdb::client::SdbClient;
use crate::sdb::error::Error;
use crate::sdb::types::{Item, SdbApi};
use chrono::Utc;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle};

/// Number of buffered items that triggers a flush; also the service limit per batch-put.
pub const LOG_BATCH_SIZE: usize = 25;

/// Number of batches that may wait for the background thread.
pub const MAX_PENDING_FLUSHES: usize = 4;

/// Name of the attribute holding the message text.
pub const MESSAGE_ATTRIBUTE: &str = "msg";

/// Destination of flushed batches.
pub trait BatchSink: Send + Sync + 'static {
    fn put_batch(&self, domain: &str, items: Vec<Item>) -> Result<(), Error>;
}

impl BatchSink for SdbClient {
    fn put_batch(&self, domain: &str, items: Vec<Item>) -> Result<(), Error> {
        self.batch_put_attributes(domain, items).build().send()?;
        Ok(())
    }
}

/// Buffering log sink backed by a SimpleDB domain.
///
/// Each `write` call is one message, so formatted output should be rendered
/// to a string first: `write!` may split it into several writes.
///
/// Writes from several threads are serialized by one lock around the
/// buffer; a flush never waits for the network.
#[derive(Debug)]
pub struct SdbLogWriter {
    domain: String,
    buffer: Mutex<Vec<Item>>,
    sequence: AtomicU64,
    sender: Option<SyncSender<Vec<Item>>>,
    worker: Option<JoinHandle<()>>,
}

impl SdbLogWriter {
    /// Creates a writer storing items into `domain` and starts its flush thread.
    ///
    /// The domain must already exist.
    pub fn new<S: BatchSink, D: Into<String>>(sink: S, domain: D) -> io::Result<Self> {
        let domain: String = domain.into();
        let (sender, receiver) = mpsc::sync_channel(MAX_PENDING_FLUSHES);

        let worker_domain = domain.clone();
        let worker = thread::Builder::new()
            .name("sdb-log-flush".into())
            .spawn(move || run_flusher(sink, worker_domain, receiver))?;

        Ok(Self {
            domain,
            buffer: Mutex::new(Vec::with_capacity(LOG_BATCH_SIZE)),
            sequence: AtomicU64::new(0),
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the number of items waiting for the next flush.
    pub fn buffered(&self) -> usize {
        self.lock_buffer().len()
    }

    /// Flushes the remaining items and waits until every dispatched batch is stored or dropped.
    pub fn shutdown(mut self) {
        self.flush_buffer();
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("log flush thread for domain '{}' panicked", self.domain);
            }
        }
    }

    fn lock_buffer(&self) -> std::sync::MutexGuard<'_, Vec<Item>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Item names sort by time; the sequence keeps names unique within one clock tick.
    /// Called with the buffer lock held so names follow buffer order.
    fn next_item_name(&self) -> String {
        let now = Utc::now();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) % 1_000_000;
        format!(
            "{}.{:09}-{seq:06}",
            now.format("%Y-%m-%dT%H:%M:%S"),
            now.timestamp_subsec_nanos()
        )
    }

    fn append(&self, buf: &[u8]) {
        let message = String::from_utf8_lossy(buf);

        let mut buffer = self.lock_buffer();
        let mut item = Item::new(self.next_item_name());
        item.add_attribute(MESSAGE_ATTRIBUTE, message.trim());
        buffer.push(item);
        if buffer.len() >= LOG_BATCH_SIZE {
            let batch = std::mem::replace(&mut *buffer, Vec::with_capacity(LOG_BATCH_SIZE));
            self.dispatch(batch);
        }
    }

    fn flush_buffer(&self) {
        let mut buffer = self.lock_buffer();
        if !buffer.is_empty() {
            let batch = std::mem::take(&mut *buffer);
            self.dispatch(batch);
        }
    }

    fn dispatch(&self, batch: Vec<Item>) {
        let Some(sender) = &self.sender else {
            return;
        };
        match sender.try_send(batch) {
            Ok(()) => {}
            Err(TrySendError::Full(batch)) => log::warn!(
                "dropping {} log items for domain '{}': {MAX_PENDING_FLUSHES} flushes pending",
                batch.len(),
                self.domain
            ),
            Err(TrySendError::Disconnected(batch)) => log::error!(
                "dropping {} log items for domain '{}': flush thread is gone",
                batch.len(),
                self.domain
            ),
        }
    }
}

fn run_flusher<S: BatchSink>(sink: S, domain: String, receiver: Receiver<Vec<Item>>) {
    for batch in receiver {
        let count = batch.len();
        match sink.put_batch(&domain, batch) {
            Ok(()) => log::debug!("stored {count} log items in domain '{domain}'"),
            Err(e) => log::error!("failed to store {count} log items in domain '{domain}': {e}"),
        }
    }
}

impl Write for &SdbLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    /// Dispatches a partially filled buffer without waiting for it to be stored.
    fn flush(&mut self) -> io::Result<()> {
        self.flush_buffer();
        Ok(())
    }
}

impl Write for SdbLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self).flush()
    }
}

impl Drop for SdbLogWriter {
    fn drop(&mut self) {
        self.flush_buffer();
        // The flush thread drains pending batches and exits once the sender is gone.
        self.sender.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdb::error::NetworkError;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct RecordingSink {
        batches: Arc<Mutex<Vec<(String, Vec<Item>)>>>,
    }

    impl BatchSink for RecordingSink {
        fn put_batch(&self, domain: &str, items: Vec<Item>) -> Result<(), Error> {
            self.batches.lock().unwrap().push((domain.to_string(), items));
            Ok(())
        }
    }

    struct FailingSink;

    impl BatchSink for FailingSink {
        fn put_batch(&self, _domain: &str, _items: Vec<Item>) -> Result<(), Error> {
            Err(NetworkError::ServerError {
                status: 503,
                status_text: "Service Unavailable".into(),
            }
            .into())
        }
    }

    #[test]
    fn test_full_buffer_is_flushed_as_one_batch() {
        let sink = RecordingSink::default();
        let writer = SdbLogWriter::new(sink.clone(), "logs").unwrap();
        for i in 0..LOG_BATCH_SIZE {
            (&writer).write_all(format!("  line {i}\n").as_bytes()).unwrap();
        }
        assert_eq!(writer.buffered(), 0);
        writer.shutdown();

        let batches = sink.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        let (domain, items) = &batches[0];
        assert_eq!(domain, "logs");
        assert_eq!(items.len(), LOG_BATCH_SIZE);

        let names: HashSet<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names.len(), LOG_BATCH_SIZE);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.attributes.len(), 1);
            assert_eq!(item.attributes[0].name, MESSAGE_ATTRIBUTE);
            assert_eq!(item.attributes[0].value, format!("line {i}"));
        }
    }

    #[test]
    fn test_write_after_flush_starts_new_buffer() {
        let sink = RecordingSink::default();
        let mut writer = SdbLogWriter::new(sink.clone(), "logs").unwrap();
        for i in 0..=LOG_BATCH_SIZE {
            writer.write_all(format!("line {i}\n").as_bytes()).unwrap();
        }
        assert_eq!(writer.buffered(), 1);
        writer.shutdown();

        let batches = sink.batches.lock().unwrap();
        let sizes: Vec<usize> = batches.iter().map(|(_, items)| items.len()).collect();
        assert_eq!(sizes, vec![LOG_BATCH_SIZE, 1]);
        assert_eq!(batches[1].1[0].attributes[0].value, format!("line {LOG_BATCH_SIZE}"));
    }

    #[test]
    fn test_flush_failure_is_not_reported_to_writer() {
        let mut writer = SdbLogWriter::new(FailingSink, "logs").unwrap();
        for _ in 0..LOG_BATCH_SIZE * 2 {
            assert!(writer.write(b"hello").is_ok());
        }
        assert!(writer.flush().is_ok());
        writer.shutdown();
    }

    #[test]
    fn test_item_names_are_unique_across_threads() {
        let sink = RecordingSink::default();
        let writer = Arc::new(SdbLogWriter::new(sink.clone(), "logs").unwrap());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let writer = Arc::clone(&writer);
                thread::spawn(move || {
                    for i in 0..10 {
                        let line = format!("thread {t} line {i}");
                        (&*writer).write_all(line.as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let writer = Arc::try_unwrap(writer).unwrap();
        writer.shutdown();

        let batches = sink.batches.lock().unwrap();
        let names: HashSet<String> = batches
            .iter()
            .flat_map(|(_, items)| items.iter().map(|i| i.name.clone()))
            .collect();
        assert_eq!(names.len(), 40);
    }

    #[test]
    fn test_item_names_follow_buffer_order_across_threads() {
        let sink = RecordingSink::default();
        let writer = Arc::new(SdbLogWriter::new(sink.clone(), "logs").unwrap());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let writer = Arc::clone(&writer);
                thread::spawn(move || {
                    for i in 0..10 {
                        let line = format!("thread {t} line {i}");
                        (&*writer).write_all(line.as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let writer = Arc::try_unwrap(writer).unwrap();
        writer.shutdown();

        let batches = sink.batches.lock().unwrap();
        let sizes: Vec<usize> = batches.iter().map(|(_, items)| items.len()).collect();
        assert_eq!(sizes, vec![LOG_BATCH_SIZE, 40 - LOG_BATCH_SIZE]);
        for (_, items) in batches.iter() {
            let seqs: Vec<u64> = items
                .iter()
                .map(|i| i.name.rsplit_once('-').unwrap().1.parse().unwrap())
                .collect();
            assert!(seqs.windows(2).all(|w| w[1] == w[0] + 1), "{seqs:?}");
            assert!(items.windows(2).all(|w| w[0].name < w[1].name));
        }
    }
}
