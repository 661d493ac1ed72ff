//! Background producer and the consumer-side stream handle

use crate::error::{Error, Result};
use crate::pagination::Paginator;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::debug;

/// One record delivered by a stream; an `Err` is always the final record
pub type StreamRecord<T> = Result<T>;

/// Records are handed over one at a time so a slow consumer throttles fetching
const CHANNEL_CAPACITY: usize = 1;

/// Ordered, single-pass sequence of records fetched by a background task.
///
/// Dropping the stream, or calling [`RecordStream::cancel`], aborts the
/// producer task.
#[derive(Debug)]
pub struct RecordStream<T> {
    rx: Receiver<StreamRecord<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> RecordStream<T> {
    /// A stream holding a single error record
    ///
    /// Used when a walk cannot even be set up, so streaming endpoints report
    /// the failure the same way as a failed fetch.
    pub fn failed(err: Error) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        // Capacity is 1 and the channel is fresh, so this cannot fail
        let _ = tx.try_send(Err(err));
        Self { rx, handle: None }
    }

    /// Stop the producer; records already buffered can still be read
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.as_ref() {
            handle.abort();
        }
        self.rx.close();
    }

    /// Whether the producer task has exited; after [`cancel`](Self::cancel)
    /// this turns true once the abort has taken effect
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Receive the next record, or `None` once the stream is exhausted
    pub async fn recv(&mut self) -> Option<StreamRecord<T>> {
        self.rx.recv().await
    }
}

impl<T> Stream for RecordStream<T> {
    type Item = StreamRecord<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl<T> Drop for RecordStream<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Drive `paginator` on a background task, emitting its records one by one.
///
/// Must be called from within a tokio runtime.
pub fn produce<P>(paginator: P) -> RecordStream<P::Item>
where
    P: Paginator + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let handle = tokio::spawn(drive(paginator, tx));
    RecordStream {
        rx,
        handle: Some(handle),
    }
}

async fn drive<P: Paginator>(mut paginator: P, tx: Sender<StreamRecord<P::Item>>) {
    loop {
        match paginator.next_page().await {
            Ok(Some(items)) => {
                for item in items {
                    if tx.send(Ok(item)).await.is_err() {
                        debug!("Stream consumer went away, stopping producer");
                        return;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Stream ended with error: {}", e);
                let _ = tx.send(Err(e)).await;
                return;
            }
        }
    }

    let state = paginator.state();
    debug!(
        "Stream complete: {} pages, {} records",
        state.pages_fetched, state.total_fetched
    );
}
