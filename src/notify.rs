use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "i",
        }
    }
}

/// A transient outcome message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Queue of visible notifications, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notification });
        id
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = Notifications::new();
        let a = queue.push(Notification::success("sent"));
        let b = queue.push(Notification::error("failed"));
        let c = queue.push(Notification::info("later"));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.items()[0].notification.message, "sent");
        assert_eq!(queue.items()[2].notification.kind, NotificationKind::Info);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = Notifications::new();
        let a = queue.push(Notification::success("one"));
        let b = queue.push(Notification::success("two"));
        assert!(queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].id, b);

        // dismissing twice is a no-op
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = Notifications::new();
        let a = queue.push(Notification::info("x"));
        queue.dismiss(a);
        let b = queue.push(Notification::info("y"));
        assert!(b > a);
        assert!(!queue.is_empty());
    }
}
