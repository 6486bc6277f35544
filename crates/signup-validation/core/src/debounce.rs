//! Debounced trigger
//!
//! Coalesces bursts of calls (one per keystroke) into a single delayed call
//! carrying the arguments of the last call in the burst. Requires a Tokio
//! runtime: [`Debouncer::schedule`] spawns the timer task.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::accessor::FieldAccessor;
use crate::engine::SignupValidator;

/// Quiet period used when none is configured
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Trailing-edge debouncer owning at most one pending timer
pub struct Debouncer<T> {
    action: Action<T>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(action: F, delay: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            pending: None,
        }
    }

    pub fn with_default_delay<F>(action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::new(action, DEFAULT_DELAY)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run the action with `args` once `delay` passes without another call.
    /// Any earlier call still waiting is dropped.
    pub fn schedule(&mut self, args: T) {
        self.cancel_pending();

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(args);
        }));
    }

    /// Drop the waiting call, if any. Returns whether one was waiting.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Input-change entry point
///
/// The host calls [`InputTrigger::on_input`] once per keystroke with the id of
/// the field that changed. After the quiet period only that field is
/// revalidated. One trigger serves the whole form, so a burst spanning several
/// fields revalidates the last one touched.
pub struct InputTrigger<A: FieldAccessor + 'static> {
    engine: Arc<SignupValidator<A>>,
    debouncer: Debouncer<String>,
}

impl<A: FieldAccessor + 'static> InputTrigger<A> {
    pub fn new(engine: Arc<SignupValidator<A>>, delay: Duration) -> Self {
        let target = Arc::clone(&engine);
        let debouncer = Debouncer::new(
            move |field_id: String| {
                debug!(field = %field_id, "debounced input fired");
                target.dispatch(&field_id);
            },
            delay,
        );
        Self { engine, debouncer }
    }

    pub fn engine(&self) -> &Arc<SignupValidator<A>> {
        &self.engine
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    pub fn on_input(&mut self, field_id: impl Into<String>) {
        self.debouncer.schedule(field_id.into());
    }

    /// Whether a revalidation is still waiting for its quiet period
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
