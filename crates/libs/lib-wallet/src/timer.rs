//! Timer seam for the negotiation timeout.
//!
//! The browser build sleeps with `gloo-timers`; native tests sleep with tokio.

use futures::future::LocalBoxFuture;
use std::time::Duration;

pub trait Timer {
    /// Future that resolves once `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
