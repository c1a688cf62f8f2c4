// tests/support/mocks/notify.rs
use std::sync::Mutex;

use newsroom_core::application::ports::notify::{PublicationNotice, PublicationNotifier};

/// Records every notice instead of delivering anything.
#[derive(Default)]
pub struct CapturingNotifier {
    notices: Mutex<Vec<PublicationNotice>>,
}

impl CapturingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<PublicationNotice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl PublicationNotifier for CapturingNotifier {
    fn notify_published(&self, notice: PublicationNotice) {
        self.notices.lock().unwrap().push(notice);
    }
}
