//! Transient notifications raised by record changes

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum notices kept before the oldest is dropped
const MAX_NOTICES: usize = 8;

/// Outcome of a record mutation worth telling the user about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Submitted { index: usize },
    Updated { index: usize },
    Deleted { index: usize },
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Submitted { .. } | Self::Updated { .. } => "Form submitted successfully!",
            Self::Deleted { .. } => "Entry deleted successfully!",
        }
    }
}

/// Receiver for notices emitted by the form controller
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Notices that expire after a fixed time to live
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    entries: VecDeque<(Notice, Instant)>,
    ttl: Duration,
}

impl NoticeQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            ttl,
        }
    }

    /// Newest notice that has not expired yet
    pub fn latest(&self) -> Option<Notice> {
        self.latest_at(Instant::now())
    }

    fn latest_at(&self, now: Instant) -> Option<Notice> {
        self.entries
            .back()
            .filter(|(_, raised)| now.duration_since(*raised) < self.ttl)
            .map(|(notice, _)| *notice)
    }

    /// Drop expired notices
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|(_, raised)| now.duration_since(*raised) < ttl);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        if self.entries.len() == MAX_NOTICES {
            self.entries.pop_front();
        }
        self.entries.push_back((notice, Instant::now()));
    }
}
