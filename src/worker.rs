// WHY: background task variant of the pipeline; each request carries its own oneshot
// reply channel so exactly one response answers each request

use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::colorizer::{ColoredSentence, Colorizer};

/// Queue depth for pending requests
const REQUEST_QUEUE_DEPTH: usize = 32;

struct ColorizeRequest {
    text: String,
    reply: oneshot::Sender<Vec<ColoredSentence>>,
}

/// Background colorizer task
pub struct ColorizeWorker {
    join: JoinHandle<()>,
}

/// Cloneable handle used to submit requests to a running worker
#[derive(Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<ColorizeRequest>,
}

impl ColorizeWorker {
    /// Spawn the worker on the current tokio runtime.
    /// The worker stops once every `WorkerHandle` has been dropped.
    pub fn spawn(colorizer: Colorizer) -> (Self, WorkerHandle) {
        let (tx, mut rx) = mpsc::channel::<ColorizeRequest>(REQUEST_QUEUE_DEPTH);
        let colorizer = Arc::new(colorizer);

        let join = tokio::spawn(async move {
            info!("Colorize worker started");
            let mut handled = 0u64;

            while let Some(ColorizeRequest { text, reply }) = rx.recv().await {
                let colorizer = Arc::clone(&colorizer);
                // WHY: the pipeline is CPU-bound; keep it off the async executor threads
                let result = tokio::task::spawn_blocking(move || colorizer.colorize(&text)).await;

                match result {
                    Ok(sentences) => {
                        if reply.send(sentences).is_err() {
                            debug!("Requester dropped before response was delivered");
                        }
                    }
                    Err(e) => {
                        // Dropping the reply sender reports the failure to the requester
                        debug!("Colorize task failed: {}", e);
                    }
                }
                handled += 1;
            }

            info!("Colorize worker stopped after {} requests", handled);
        });

        (Self { join }, WorkerHandle { tx })
    }

    /// Wait for the worker to finish draining its queue
    pub async fn join(self) -> Result<()> {
        self.join.await?;
        Ok(())
    }
}

impl WorkerHandle {
    /// Submit one text and wait for its full result
    pub async fn colorize(&self, text: impl Into<String>) -> Result<Vec<ColoredSentence>> {
        let (reply, response) = oneshot::channel();
        let request = ColorizeRequest {
            text: text.into(),
            reply,
        };

        self.tx
            .send(request)
            .await
            .map_err(|_| anyhow!("Colorize worker has shut down"))?;

        response
            .await
            .map_err(|_| anyhow!("Colorize worker dropped the request without a response"))
    }
}
