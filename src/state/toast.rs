#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// A transient user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub text: String,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, text: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), text: text.into() });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}
