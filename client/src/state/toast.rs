//! Transient notifications shown in the top-right corner.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a toast stays up before dismissing itself.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification a component wants shown. Turned into a [`Toast`] by
/// [`Toasts::push`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered queue of visible toasts; oldest first.
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind: notice.kind, message: notice.message.to_owned() });
        id
    }

    /// Remove one toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    #[must_use]
    pub fn count(&self, kind: ToastKind) -> usize {
        self.items.iter().filter(|t| t.kind == kind).count()
    }
}
