//! Delayed square computation.
//!
//! `square_after` models a slow computation: non-negative input resolves to
//! its square once the delay has elapsed, negative input fails straight away
//! without touching the timer. Each call owns its own timer; calls do not
//! share state and cannot be cancelled other than by dropping the future.
//!
//! `spawn_square` is the eager variant: the work starts on the runtime as soon
//! as it is called and the returned [`Deferred`] yields the single outcome.

use std::time::Duration;

use tokio::sync::oneshot;
use tracing::debug;

use crate::error::SquareError;

/// Delay before a successful square becomes observable.
pub const SQUARE_DELAY: Duration = Duration::from_millis(1000);

/// Square `n` after [`SQUARE_DELAY`].
pub async fn square_async(n: f64) -> Result<f64, SquareError> {
    square_after(n, SQUARE_DELAY).await
}

/// Square `n` after `delay`, or fail immediately if `n` is negative.
pub async fn square_after(n: f64, delay: Duration) -> Result<f64, SquareError> {
    if n < 0.0 {
        debug!(n, "rejecting negative square input");
        return Err(SquareError::NegativeInput);
    }

    let delay_ms = delay.as_millis() as u64;
    debug!(n, delay_ms, "square scheduled");
    tokio::time::sleep(delay).await;
    let squared = n * n;
    debug!(n, squared, "square resolved");
    Ok(squared)
}

/// Single-shot handle to a computation already running on the runtime.
///
/// `wait` consumes the handle, so the outcome is observed exactly once.
#[derive(Debug)]
pub struct Deferred<T> {
    rx: oneshot::Receiver<Result<T, SquareError>>,
}

impl<T> Deferred<T> {
    pub async fn wait(self) -> Result<T, SquareError> {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(SquareError::Abandoned),
        }
    }
}

/// Start squaring `n` on the current tokio runtime.
///
/// # Panics
/// Panics if called outside a tokio runtime (same contract as `tokio::spawn`).
pub fn spawn_square(n: f64, delay: Duration) -> Deferred<f64> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = square_after(n, delay).await;
        // The receiver may already be gone; nobody is left to tell.
        let _ = tx.send(outcome);
    });
    Deferred { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn square_resolves_after_delay() {
        let start = Instant::now();
        let value = square_async(5.0).await.unwrap();
        assert_eq!(value, 25.0);
        assert!(start.elapsed() >= SQUARE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn square_of_zero_still_waits() {
        let start = Instant::now();
        assert_eq!(square_async(0.0).await, Ok(0.0));
        assert!(start.elapsed() >= SQUARE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn square_is_not_observable_before_delay() {
        let mut fut = Box::pin(square_async(3.0));
        let early = tokio::time::timeout(SQUARE_DELAY - Duration::from_millis(1), &mut fut).await;
        assert!(early.is_err());
        assert_eq!(fut.await, Ok(9.0));
    }

    #[tokio::test(start_paused = true)]
    async fn negative_input_fails_without_waiting() {
        let start = Instant::now();
        let err = square_async(-3.0).await.unwrap_err();
        assert_eq!(err, SquareError::NegativeInput);
        assert_eq!(err.to_string(), "Negative number not allowed");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delay_is_honoured() {
        let start = Instant::now();
        assert_eq!(square_after(4.0, Duration::from_millis(250)).await, Ok(16.0));
        assert!(start.elapsed() >= Duration::from_millis(250));
        assert!(start.elapsed() < SQUARE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_squares_run_independently() {
        let start = Instant::now();
        let a = spawn_square(2.0, SQUARE_DELAY);
        let b = spawn_square(-1.0, SQUARE_DELAY);
        let c = spawn_square(3.0, SQUARE_DELAY);

        assert_eq!(b.wait().await, Err(SquareError::NegativeInput));
        let (a, c) = tokio::join!(a.wait(), c.wait());
        assert_eq!(a, Ok(4.0));
        assert_eq!(c, Ok(9.0));
        // Timers overlap rather than queue.
        assert!(start.elapsed() < SQUARE_DELAY * 2);
    }

    #[tokio::test]
    async fn dropped_sender_reports_abandoned() {
        let (tx, rx) = oneshot::channel::<Result<f64, SquareError>>();
        drop(tx);
        let deferred = Deferred { rx };
        assert_eq!(deferred.wait().await, Err(SquareError::Abandoned));
    }
}
