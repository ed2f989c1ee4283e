//! Cancellable delayed task used to debounce live search input.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs a task once after a fixed quiescence window, restarting the
/// window whenever a new task is scheduled.
///
/// Scheduling while a run is pending cancels the pending run, so a rapid
/// event stream fires exactly once, after the stream has been quiet for
/// the full window.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedules `task` to run once the window elapses with no further
    /// schedule, replacing any pending task. Must be called from within
    /// a tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        // Anchor the deadline now, not at the task's first poll, so the
        // window starts at the schedule call.
        let sleep = tokio::time::sleep(self.window);
        self.pending = Some(tokio::spawn(async move {
            sleep.await;
            task();
        }));
    }

    /// Drops any pending task without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
