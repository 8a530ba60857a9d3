use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::application::interface::notify::{Notification, Notifier, Severity};

/// Collects notifications until the view drains and renders them.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    queue: Arc<Mutex<Vec<Notification>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }

    pub fn drain(&self) -> Vec<Notification> {
        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *queue)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!(title = %notification.title, "{}", notification.description),
            Severity::Destructive => warn!(title = %notification.title, "{}", notification.description),
        }
        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        queue.push(notification);
    }
}
