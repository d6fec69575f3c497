//! Contact form state: controlled fields plus the submission lifecycle.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Submitted -> Idle` on success (the last step after
//! [`CONFIRMATION_HOLD`]), `Submitting -> Idle` on failure. Each submission
//! carries a generation number; completions and revert timers for an older
//! generation are ignored, so a late timer can never unlock a newer
//! submission.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use content::{ContactField, ContactSubmission};
use leptos::prelude::*;

use super::toast::{Notice, ToastKind};
use crate::net::api::SiteApi;

/// How long the "Message Sent!" confirmation holds the form locked.
pub const CONFIRMATION_HOLD: Duration = Duration::from_secs(3);

pub const SENT_NOTICE: Notice = Notice {
    kind: ToastKind::Success,
    message: "Message sent successfully! I'll get back to you soon.",
};

pub const FAILED_NOTICE: Notice = Notice {
    kind: ToastKind::Error,
    message: "Failed to send message. Please try again.",
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Payload handed out by [`ContactForm::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub body: ContactSubmission,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactSubmission,
    pub status: SubmitStatus,
    generation: u64,
}

impl ContactForm {
    /// Update the field whose input has `name`. Returns `false` for names
    /// that are not part of the form.
    pub fn edit(&mut self, name: &str, value: String) -> bool {
        let Some(field) = ContactField::from_input_name(name) else {
            return false;
        };
        self.fields.set(field, value);
        true
    }

    /// Current value of one field, for `prop:value` bindings.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    /// Start a submission. Only possible from `Idle`; otherwise returns
    /// `None` and the caller must not send anything.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.status != SubmitStatus::Idle {
            return None;
        }
        self.generation += 1;
        self.status = SubmitStatus::Submitting;
        Some(SubmitTicket { generation: self.generation, body: self.fields.clone() })
    }

    /// Record the outcome of submission `generation` and return the notice to
    /// show. Stale or unexpected completions change nothing and return `None`.
    pub fn complete(&mut self, generation: u64, succeeded: bool) -> Option<Notice> {
        if generation != self.generation || self.status != SubmitStatus::Submitting {
            return None;
        }
        if succeeded {
            self.fields = ContactSubmission::default();
            self.status = SubmitStatus::Submitted;
            Some(SENT_NOTICE)
        } else {
            self.status = SubmitStatus::Idle;
            Some(FAILED_NOTICE)
        }
    }

    /// End the confirmation hold for submission `generation`. Returns whether
    /// the form was unlocked.
    pub fn release(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status != SubmitStatus::Submitted {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }

    /// Whether the submit control is disabled.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status != SubmitStatus::Idle
    }

    /// Text on the submit control.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Get Your Free Quote",
            SubmitStatus::Submitting => "Sending...",
            SubmitStatus::Submitted => "Message Sent!",
        }
    }
}

/// Somewhere a [`ContactForm`] lives: the component's signal, or a plain
/// cell in tests. `None` means the form is gone (component unmounted).
pub trait FormCell {
    fn apply<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormCell for RwSignal<ContactForm> {
    fn apply<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormCell for RefCell<ContactForm> {
    fn apply<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// One full submission: begin, send, complete, notify and, on success, hold
/// the confirmation for [`CONFIRMATION_HOLD`] via `wait` before releasing.
///
/// Returns `false` without sending anything if the form was not idle.
pub async fn submit_form<A, F, W, Fut>(api: &A, form: &F, mut notify: impl FnMut(Notice), wait: W) -> bool
where
    A: SiteApi,
    F: FormCell,
    W: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let Some(ticket) = form.apply(ContactForm::begin_submit).flatten() else {
        return false;
    };

    let result = api.submit_contact(&ticket.body).await;
    if let Err(e) = &result {
        leptos::logging::warn!("error submitting contact form: {e}");
    }
    let Some(notice) = form.apply(|f| f.complete(ticket.generation, result.is_ok())).flatten() else {
        return true;
    };
    notify(notice);

    if result.is_ok() {
        wait(CONFIRMATION_HOLD).await;
        form.apply(|f| f.release(ticket.generation));
    }
    true
}
