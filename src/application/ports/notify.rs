// src/application/ports/notify.rs

/// Everything the mail template needs to tell an author their article
/// went live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationNotice {
    pub recipient: String,
    pub author_name: String,
    pub title: String,
    pub link: String,
}

/// Outbound notification seam. `notify_published` is a non-blocking
/// enqueue: delivery happens off the request path and its failures never
/// reach the caller, so a mail outage cannot fail an approval.
pub trait PublicationNotifier: Send + Sync {
    fn notify_published(&self, notice: PublicationNotice);
}
