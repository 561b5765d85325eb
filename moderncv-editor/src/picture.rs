//! Background picture decoding with last-request-wins sequencing.
//!
//! Every [`PictureLoader::request`] gets a sequence number and runs on
//! tokio's blocking pool. Completions come back over an mpsc channel in
//! whatever order the decodes finish; [`PictureLoader::accept`] applies a
//! completion only when it belongs to the most recent request.
//! [`PictureLoader::supersede`] retires every in-flight request when the
//! picture is set by other means.

use std::sync::Arc;

use tokio::sync::mpsc;

use moderncv_export::ImageDecoder;

use crate::error::EditorError;

/// A finished decode, tagged with the request it belongs to.
#[derive(Debug)]
pub struct PictureCompletion {
    pub seq: u64,
    pub result: Result<String, EditorError>,
}

/// What the session should do with a completion.
#[derive(Debug)]
pub enum PictureOutcome {
    /// Latest request succeeded; assign this data URI.
    Apply { seq: u64, data_uri: String },
    /// Latest request failed; the previous picture stays.
    Failed { seq: u64, error: EditorError },
    /// A newer request exists; drop this one.
    Stale { seq: u64, latest: u64 },
}

pub struct PictureLoader {
    decoder: Arc<dyn ImageDecoder>,
    tx: mpsc::UnboundedSender<PictureCompletion>,
    rx: mpsc::UnboundedReceiver<PictureCompletion>,
    last_seq: u64,
    in_flight: usize,
}

impl PictureLoader {
    pub fn new(decoder: Arc<dyn ImageDecoder>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        PictureLoader {
            decoder,
            tx,
            rx,
            last_seq: 0,
            in_flight: 0,
        }
    }

    /// Start decoding `bytes`. Must be called inside a tokio runtime.
    pub fn request(&mut self, bytes: Vec<u8>) -> u64 {
        self.last_seq += 1;
        self.in_flight += 1;
        let seq = self.last_seq;
        let decoder = Arc::clone(&self.decoder);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let joined = tokio::task::spawn_blocking(move || decoder.decode(&bytes)).await;
            let result = match joined {
                Ok(decoded) => decoded.map_err(EditorError::from),
                Err(err) => Err(EditorError::DecodeTask(err.to_string())),
            };
            // The receiver lives as long as the loader; a send error means it is gone.
            let _ = tx.send(PictureCompletion { seq, result });
        });

        tracing::debug!(seq, "picture decode requested");
        seq
    }

    /// Mark every in-flight request stale. No-op when nothing is pending.
    pub fn supersede(&mut self) {
        if self.in_flight == 0 {
            return;
        }
        self.last_seq += 1;
        tracing::debug!(
            latest = self.last_seq,
            in_flight = self.in_flight,
            "pending pictures superseded"
        );
    }

    /// Number of requests whose completion has not been received yet.
    pub fn pending(&self) -> usize {
        self.in_flight
    }

    /// Sequence number of the most recent request (0 before any).
    pub fn latest(&self) -> u64 {
        self.last_seq
    }

    /// Wait for the next completion. Cancel-safe.
    pub async fn next_completion(&mut self) -> Result<PictureCompletion, EditorError> {
        let completion = self
            .rx
            .recv()
            .await
            .ok_or(EditorError::ChannelClosed("picture completions"))?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Ok(completion)
    }

    /// Decide whether `completion` should be applied.
    pub fn accept(&self, completion: PictureCompletion) -> PictureOutcome {
        let PictureCompletion { seq, result } = completion;
        if seq != self.last_seq {
            tracing::debug!(seq, latest = self.last_seq, "discarding stale picture");
            return PictureOutcome::Stale {
                seq,
                latest: self.last_seq,
            };
        }
        match result {
            Ok(data_uri) => PictureOutcome::Apply { seq, data_uri },
            Err(error) => {
                tracing::warn!(seq, %error, "picture decode failed, keeping previous picture");
                PictureOutcome::Failed { seq, error }
            }
        }
    }
}
