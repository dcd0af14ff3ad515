use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    /// `Date.now()` at enqueue; rendered as local date-time.
    pub created_ms: f64,
    /// Sticky toasts are never removed by a timer.
    pub sticky: bool,
}

/// Transient notifications, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, title: &str, message: &str, created_ms: f64) -> Uuid {
        self.enqueue(title, message, created_ms, false)
    }

    pub fn push_sticky(&mut self, title: &str, message: &str, created_ms: f64) -> Uuid {
        self.enqueue(title, message, created_ms, true)
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    fn enqueue(&mut self, title: &str, message: &str, created_ms: f64, sticky: bool) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            title: title.to_string(),
            message: message.to_string(),
            created_ms,
            sticky,
        });
        id
    }
}
