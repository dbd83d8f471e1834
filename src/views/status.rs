use std::time::{Duration, Instant};

/// How long a status message stays on screen.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    shown_at: Instant,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at,
        }
    }

    pub fn expires_at(&self) -> Instant {
        self.shown_at + STATUS_TTL
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at()
    }
}

/// The single status slot of a view.
///
/// Posting a message replaces the previous one together with its deadline.
#[derive(Debug, Clone, Default)]
pub struct StatusSlot {
    current: Option<StatusMessage>,
}

impl StatusSlot {
    pub fn post(&mut self, kind: StatusKind, text: impl Into<String>, now: Instant) {
        self.current = Some(StatusMessage::new(kind, text, now));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drops the message once its window has passed.
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|m| !m.is_visible_at(now)) {
            self.current = None;
        }
    }

    pub fn visible_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.current.as_ref().filter(|m| m.is_visible_at(now))
    }
}
