//! Best-effort delivery of publication notices, decoupled from the
//! request path so a mail outage can never fail an approval.

pub mod email;

pub use email::{EmailConfig, EmailDelivery};

use crate::application::ports::notify::{PublicationNotice, PublicationNotifier};
use tokio::sync::mpsc;

/// Hands notices to a background worker over a bounded queue. Enqueueing
/// never blocks; when the queue is full the notice is dropped with a
/// warning rather than stalling the approval that produced it.
pub struct QueuedPublicationNotifier {
    tx: mpsc::Sender<PublicationNotice>,
}

impl QueuedPublicationNotifier {
    /// Spawn the delivery worker and return the enqueue handle. Without
    /// SMTP configuration the worker only logs each notice.
    pub fn spawn(queue_depth: usize, delivery: Option<EmailDelivery>) -> Self {
        let (tx, mut rx) = mpsc::channel::<PublicationNotice>(queue_depth.max(1));

        tokio::spawn(async move {
            while let Some(notice) = rx.recv().await {
                match &delivery {
                    Some(delivery) => match delivery.deliver(&notice).await {
                        Ok(()) => {
                            tracing::info!(
                                recipient = %notice.recipient,
                                title = %notice.title,
                                "publication email sent"
                            );
                        }
                        Err(err) => {
                            tracing::warn!(
                                error = %err,
                                recipient = %notice.recipient,
                                "publication email failed"
                            );
                        }
                    },
                    None => {
                        tracing::info!(
                            recipient = %notice.recipient,
                            title = %notice.title,
                            link = %notice.link,
                            "publication notice (mail delivery disabled)"
                        );
                    }
                }
            }
            tracing::debug!("publication notifier worker stopped");
        });

        Self { tx }
    }
}

impl PublicationNotifier for QueuedPublicationNotifier {
    fn notify_published(&self, notice: PublicationNotice) {
        if let Err(err) = self.tx.try_send(notice) {
            tracing::warn!(error = %err, "publication notice dropped");
        }
    }
}
