//! Transient toast notices
//!
//! Every notice carries its own deadline. Once the deadline passes the notice
//! plays a short exit transition and is then detached; nothing else in the
//! stack is touched.

use std::time::{Duration, Instant};

use strum::Display;

use crate::domain::text::escape_text;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: u64,
    kind: NoticeKind,
    message: String,
    dismiss_at: Instant,
    leaving_since: Option<Instant>,
}

impl Notice {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving_since.is_some()
    }

    /// How far the exit transition has run, from 0.0 to 1.0.
    pub fn exit_progress(&self, now: Instant) -> f64 {
        match self.leaving_since {
            Some(since) => {
                let elapsed = now.saturating_duration_since(since);
                (elapsed.as_secs_f64() / EXIT_TRANSITION.as_secs_f64()).min(1.0)
            }
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notifications {
    notices: Vec<Notice>,
    next_id: u64,
    default_duration: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl Notifications {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            notices: vec![],
            next_id: 0,
            default_duration,
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn show(&mut self, message: &str, kind: NoticeKind, duration: Duration) -> u64 {
        self.show_at(message, kind, duration, Instant::now())
    }

    /// Appends a notice that starts leaving `duration` after `now`.
    pub fn show_at(
        &mut self,
        message: &str,
        kind: NoticeKind,
        duration: Duration,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            message: escape_text(message),
            dismiss_at: now + duration,
            leaving_since: None,
        });
        log::debug!("Notice {id} ({kind}): {message}");
        id
    }

    pub fn success(&mut self, message: &str) -> u64 {
        self.show(message, NoticeKind::Success, self.default_duration)
    }

    pub fn error(&mut self, message: &str) -> u64 {
        self.show(message, NoticeKind::Error, self.default_duration)
    }

    /// Starts exit transitions that are due and detaches finished ones.
    pub fn tick(&mut self, now: Instant) {
        for notice in self.notices.iter_mut() {
            if notice.leaving_since.is_none() && now >= notice.dismiss_at {
                notice.leaving_since = Some(now);
            }
        }
        self.notices.retain(|notice| match notice.leaving_since {
            Some(since) => now.saturating_duration_since(since) < EXIT_TRANSITION,
            None => true,
        });
    }
}
