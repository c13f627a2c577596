//! Simulated reply delay.
//!
//! The pause before a bot reply is an explicit timer with a cancel handle,
//! not a bare deferred callback, so a real backend call can replace it
//! later without reshaping the submit flow.

use std::time::Duration;

use tokio::sync::oneshot;

/// Default simulated typing delay before a bot reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(700);

/// How a started timer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The delay ran out; the reply should be delivered.
    Elapsed,
    /// The handle cancelled the reply.
    Cancelled,
}

/// Factory for reply delays.
#[derive(Debug, Clone, Copy)]
pub struct ReplyTimer {
    delay: Duration,
}

impl ReplyTimer {
    /// A timer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A zero-delay timer for tests and non-interactive hosts.
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Start the timer, returning the awaitable half and its cancel handle.
    #[must_use]
    pub fn start(&self) -> (PendingReply, CancelHandle) {
        let (tx, rx) = oneshot::channel();
        (
            PendingReply {
                delay: self.delay,
                cancelled: rx,
            },
            CancelHandle { tx },
        )
    }
}

impl Default for ReplyTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

/// The awaitable half of a started reply timer.
#[derive(Debug)]
pub struct PendingReply {
    delay: Duration,
    cancelled: oneshot::Receiver<()>,
}

impl PendingReply {
    /// Wait out the delay unless the handle cancels first.
    ///
    /// Dropping the [`CancelHandle`] without cancelling lets the timer run
    /// out normally.
    pub async fn wait(self) -> TimerOutcome {
        let Self {
            delay,
            mut cancelled,
        } = self;
        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);

        let mut cancel_open = true;
        loop {
            tokio::select! {
                () = &mut sleep => return TimerOutcome::Elapsed,
                result = &mut cancelled, if cancel_open => {
                    if result.is_ok() {
                        return TimerOutcome::Cancelled;
                    }
                    // Handle dropped without cancelling; keep waiting.
                    cancel_open = false;
                }
            }
        }
    }
}

/// Cancels a pending reply.
#[derive(Debug)]
pub struct CancelHandle {
    tx: oneshot::Sender<()>,
}

impl CancelHandle {
    /// Abandon the pending reply.
    pub fn cancel(self) {
        // The receiver may already have elapsed and gone away.
        let _ = self.tx.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_elapses() {
        let (pending, _cancel) = ReplyTimer::immediate().start();
        assert_eq!(pending.wait().await, TimerOutcome::Elapsed);
    }

    #[tokio::test]
    async fn test_cancel_wins_over_long_delay() {
        let (pending, cancel) = ReplyTimer::new(Duration::from_secs(60)).start();
        cancel.cancel();
        assert_eq!(pending.wait().await, TimerOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_dropped_handle_still_elapses() {
        let (pending, cancel) = ReplyTimer::new(Duration::from_millis(5)).start();
        drop(cancel);
        assert_eq!(pending.wait().await, TimerOutcome::Elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_delay_is_700ms() {
        let (pending, _cancel) = ReplyTimer::default().start();
        let started = tokio::time::Instant::now();
        assert_eq!(pending.wait().await, TimerOutcome::Elapsed);
        assert_eq!(started.elapsed(), DEFAULT_REPLY_DELAY);
    }
}
