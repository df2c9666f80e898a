//! Event listener callbacks and their cleanup handle.

/// Callback invoked on a host event such as an online/offline transition.
pub type ListenerCallback = Box<dyn Fn()>;

/// Deregisters previously attached host listeners.
///
/// The listeners stay attached for as long as the handle lives. Dropping the handle detaches
/// them, as does an explicit [`ListenerCleanup::cleanup`].
#[must_use = "dropping the handle detaches the listeners immediately"]
pub struct ListenerCleanup {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerCleanup {
    /// Wraps a detach routine.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Cleanup handle for hosts where nothing was attached.
    pub fn noop() -> Self {
        Self { detach: None }
    }

    /// Detaches the listeners.
    pub fn cleanup(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ListenerCleanup {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl std::fmt::Debug for ListenerCleanup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerCleanup")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}
