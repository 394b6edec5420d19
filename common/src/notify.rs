use std::fmt::Display;

use crate::config::NotifyConfig;

pub const SHOW_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    // "notification notification-<kind>"
    pub fn class_name(self) -> String {
        format!("notification notification-{self}")
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

// milliseconds after insertion at which each phase starts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotificationTimeline {
    pub show_at: u32,
    pub hide_at: u32,
    pub remove_at: u32,
}

impl NotificationTimeline {
    pub fn new(config: &NotifyConfig) -> Self {
        NotificationTimeline {
            show_at: config.show_delay_ms,
            hide_at: config.display_ms,
            remove_at: config.display_ms.saturating_add(config.fade_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NoticeId(u64);

// the single live notification
//
// showing a new one evicts the old one immediately; the old one's dismissal timers still fire
// but release() ignores them because the id no longer matches
#[derive(Debug)]
pub struct NotificationSlot<N> {
    current: Option<(NoticeId, N)>,
    next: u64,
}

impl<N> Default for NotificationSlot<N> {
    fn default() -> Self {
        NotificationSlot {
            current: None,
            next: 0,
        }
    }
}

impl<N> NotificationSlot<N> {
    pub fn new() -> Self {
        Self::default()
    }

    // install a notification, returning its id and whatever it displaced
    pub fn show(&mut self, node: N) -> (NoticeId, Option<N>) {
        let id = NoticeId(self.next);
        self.next += 1;

        let evicted = self.current.replace((id, node)).map(|(_, node)| node);
        (id, evicted)
    }

    pub fn is_current(&self, id: NoticeId) -> bool {
        matches!(self.current, Some((current, _)) if current == id)
    }

    pub fn current(&self) -> Option<&N> {
        self.current.as_ref().map(|(_, node)| node)
    }

    pub fn release(&mut self, id: NoticeId) -> Option<N> {
        if self.is_current(id) {
            self.current.take().map(|(_, node)| node)
        } else {
            None
        }
    }
}
