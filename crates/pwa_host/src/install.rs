//! Deferred install prompt contracts and the single-slot holder.

use std::{cell::RefCell, future::Future, pin::Pin};

/// Object-safe boxed future used by [`DeferredInstallPrompt`].
pub type InstallPromptFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// User decision on an install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The user installed the app.
    Accepted,
    /// The user dismissed the prompt.
    Dismissed,
}

impl InstallOutcome {
    /// Parses the platform `userChoice.outcome` token.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(Self::Accepted),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }
}

/// Captured "install available" platform signal.
pub trait DeferredInstallPrompt {
    /// Shows the platform install prompt and resolves with the user's choice.
    fn prompt<'a>(&'a self) -> InstallPromptFuture<'a, Result<InstallOutcome, String>>;
}

/// Holds at most one pending install prompt.
///
/// Written by the platform event handler and consumed by the prompt call. A taken prompt is
/// gone for good; nothing can prompt it again.
#[derive(Default)]
pub struct InstallPromptSlot {
    pending: RefCell<Option<Box<dyn DeferredInstallPrompt>>>,
}

impl InstallPromptSlot {
    /// Stores `prompt`, returning whether it replaced a pending one.
    pub fn capture(&self, prompt: Box<dyn DeferredInstallPrompt>) -> bool {
        self.pending.borrow_mut().replace(prompt).is_some()
    }

    /// Returns whether a prompt is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Removes and returns the pending prompt.
    pub fn take(&self) -> Option<Box<dyn DeferredInstallPrompt>> {
        self.pending.borrow_mut().take()
    }

    /// Drops the pending prompt, returning whether there was one.
    pub fn clear(&self) -> bool {
        self.take().is_some()
    }
}

impl std::fmt::Debug for InstallPromptSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallPromptSlot")
            .field("pending", &self.is_pending())
            .finish()
    }
}
