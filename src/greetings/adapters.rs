// src/greetings/adapters.rs
//! Callback and future shells around the name validator.
//!
//! Both adapters validate eagerly at call time; they differ only in how
//! the outcome reaches the caller and when.

use futures::future::{BoxFuture, FutureExt};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{sleep_until, Instant};

use super::models::NameCandidate;
use super::validators::build_greeting;
use crate::common::{GreetingError, ValidationResult};

// Delays too large to represent as an instant park the task this far out
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

fn deadline_after(delay: Duration) -> Instant {
    let start = Instant::now();
    start
        .checked_add(delay)
        .unwrap_or_else(|| start + FAR_FUTURE)
}

/// Boxed callback accepted by [`greet`], handy when the callback is absent
/// and the generic parameter has to be named: `None::<GreetCallback>`.
pub type GreetCallback = Box<dyn FnOnce(Option<GreetingError>, Option<String>) + Send>;

/// How a [`greet`] callback was delivered
#[derive(Debug)]
pub enum Delivery {
    /// The callback already ran before `greet` returned
    Immediate,
    /// The callback runs on a spawned task once the delay elapses
    Scheduled(JoinHandle<()>),
}

impl Delivery {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Delivery::Scheduled(_))
    }

    /// Waits until the callback has run. Resolves at once for immediate delivery.
    pub async fn wait(self) -> Result<(), JoinError> {
        match self {
            Delivery::Immediate => Ok(()),
            Delivery::Scheduled(task) => task.await,
        }
    }
}

/// Invokes `callback` exactly once with `(error, greeting)`.
///
/// Exactly one of the two arguments is `Some`. Without a delay the callback
/// runs before this function returns. With a delay (zero included) it runs
/// on a spawned Tokio task no earlier than `delay` after the call.
///
/// Returns `NotCallable` when no callback is supplied, and
/// `RuntimeUnavailable` when a delay is requested outside a Tokio runtime.
/// In both cases nothing is scheduled and no callback runs.
pub fn greet<N, F>(
    name: N,
    callback: Option<F>,
    delay: Option<Duration>,
) -> Result<Delivery, GreetingError>
where
    N: Into<NameCandidate>,
    F: FnOnce(Option<GreetingError>, Option<String>) + Send + 'static,
{
    let callback = callback.ok_or(GreetingError::NotCallable)?;

    let result = build_greeting(&name.into());
    let deliver = move || match result {
        Ok(greeting) => callback(None, Some(greeting)),
        Err(err) => callback(Some(err), None),
    };

    match delay {
        Some(delay) => {
            let handle = Handle::try_current().map_err(|_| GreetingError::RuntimeUnavailable)?;
            let deadline = deadline_after(delay);
            let task = handle.spawn(async move {
                sleep_until(deadline).await;
                deliver();
            });
            Ok(Delivery::Scheduled(task))
        }
        None => {
            deliver();
            Ok(Delivery::Immediate)
        }
    }
}

/// Future form of [`greet`].
///
/// The name is validated now and the deadline is fixed now; the returned
/// future yields the greeting, or the validation error, once the deadline
/// has passed. Errors are held back for the full delay as well. Must be
/// polled on a Tokio runtime.
pub fn greet_promise<N>(name: N, delay: Duration) -> BoxFuture<'static, ValidationResult<String>>
where
    N: Into<NameCandidate>,
{
    let result = build_greeting(&name.into());
    let deadline = deadline_after(delay);

    async move {
        sleep_until(deadline).await;
        result
    }
    .boxed()
}
