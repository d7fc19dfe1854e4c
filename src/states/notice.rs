//! Notice State
//!
//! Single owner of transient user-facing notices. Widgets raise notices into
//! the shared host instead of keeping their own error slot; the root view
//! mounts an error modal for whatever is current.

use gpui::SharedString;
use std::collections::VecDeque;
use tracing::debug;

/// A transient {title, message} pair shown in an error modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: SharedString,
    pub message: SharedString,
}

impl Notice {
    pub fn new(title: impl Into<SharedString>, message: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Raised by a required input submitted blank
    pub fn empty_input() -> Self {
        Self::new("Empty Input", "This field cannot be empty.")
    }

    /// Raised by a table's "Show Error" action while it has no rows
    pub fn no_data() -> Self {
        Self::new("No Data", "There are no records to display.")
    }

    /// Raised when the roster form rejects a draft user
    pub fn invalid_user() -> Self {
        Self::new(
            "Invalid input",
            "Please enter a valid name, email, and age (>0).",
        )
    }
}

/// Capability to surface and dismiss notices
pub trait NoticeHost {
    /// Queue a notice for display
    fn raise(&mut self, notice: Notice);

    /// Dismiss the displayed notice
    fn acknowledge(&mut self);

    /// The notice currently on screen, if any
    fn current(&self) -> Option<&Notice>;
}

/// FIFO notice queue; the front entry is the one on screen
#[derive(Debug, Default)]
pub struct NoticeState {
    queue: VecDeque<Notice>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoticeHost for NoticeState {
    /// Raising the notice already at the back of the queue is a no-op.
    fn raise(&mut self, notice: Notice) {
        if self.queue.back() == Some(&notice) {
            debug!(title = %notice.title, "Notice already queued");
            return;
        }
        debug!(title = %notice.title, queued = self.queue.len(), "Notice raised");
        self.queue.push_back(notice);
    }

    fn acknowledge(&mut self) {
        if let Some(notice) = self.queue.pop_front() {
            debug!(title = %notice.title, "Notice acknowledged");
        }
    }

    fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_and_acknowledge() {
        let mut notices = NoticeState::new();
        assert!(notices.current().is_none());

        notices.raise(Notice::no_data());
        let current = notices.current().expect("notice should be displayed");
        assert_eq!(current.title.as_ref(), "No Data");
        assert_eq!(current.message.as_ref(), "There are no records to display.");

        notices.acknowledge();
        assert!(notices.current().is_none());
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut notices = NoticeState::new();
        notices.raise(Notice::empty_input());
        notices.raise(Notice::invalid_user());
        assert_eq!(notices.queue.len(), 2);

        assert_eq!(notices.current(), Some(&Notice::empty_input()));
        notices.acknowledge();
        assert_eq!(notices.current(), Some(&Notice::invalid_user()));
        notices.acknowledge();
        assert!(notices.current().is_none());
    }

    #[test]
    fn test_acknowledge_when_empty_is_noop() {
        let mut notices = NoticeState::new();
        notices.acknowledge();
        assert!(notices.queue.is_empty());
    }

    #[test]
    fn test_repeated_raise_queues_once() {
        let mut notices = NoticeState::new();
        for _ in 0..5 {
            notices.raise(Notice::invalid_user());
        }
        assert_eq!(notices.queue.len(), 1);

        notices.acknowledge();
        assert!(notices.current().is_none());
    }

    #[test]
    fn test_same_notice_queues_again_after_another() {
        let mut notices = NoticeState::new();
        notices.raise(Notice::no_data());
        notices.raise(Notice::empty_input());
        notices.raise(Notice::no_data());
        assert_eq!(notices.queue.len(), 3);
    }
}
