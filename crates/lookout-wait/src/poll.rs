use crate::condition::Condition;
use crate::error::WaitError;
use log::{debug, trace, warn};
use lookout_interfaces::Session;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Floor for the pause between attempts; a zero interval would spin.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Re-checks a [`Condition`] until it holds or its budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poller {
    timeout: Duration,
    interval: Duration,
}

impl Poller {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self {
            timeout,
            interval: interval.max(MIN_POLL_INTERVAL),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Checks `condition` until it yields a value.
    ///
    /// The condition is always checked at least once, even with a zero
    /// timeout, and once more when the deadline is reached. Missing or stale
    /// element errors count as "not yet"; any other session error ends the
    /// wait immediately. A timeout too large to put a deadline on polls
    /// until the condition holds.
    pub async fn until<C>(&self, session: &dyn Session, condition: &C) -> Result<C::Output, WaitError>
    where
        C: Condition,
    {
        let description = condition.description();
        let started = Instant::now();
        let deadline = started.checked_add(self.timeout);
        let mut attempts: u32 = 0;

        debug!("Waiting up to {:?} for {}", self.timeout, description);

        loop {
            attempts += 1;
            match condition.check(session).await {
                Ok(Some(output)) => {
                    debug!(
                        "Satisfied after {:?} ({} attempts): {}",
                        started.elapsed(),
                        attempts,
                        description
                    );
                    return Ok(output);
                }
                Ok(None) => trace!("Attempt {} not satisfied: {}", attempts, description),
                Err(err) if err.is_transient() => {
                    trace!("Attempt {} hit {}, still waiting for {}", attempts, err, description)
                }
                Err(err) => {
                    debug!("Session error while waiting for {}: {}", description, err);
                    return Err(err.into());
                }
            }

            let now = Instant::now();
            let pause = match deadline {
                Some(deadline) if now >= deadline => {
                    warn!(
                        "Gave up after {:?} ({} attempts): {}",
                        now - started,
                        attempts,
                        description
                    );
                    return Err(WaitError::Timeout {
                        description,
                        timeout: self.timeout,
                    });
                }
                Some(deadline) => self.interval.min(deadline - now),
                None => self.interval,
            };
            sleep(pause).await;
        }
    }
}
