//! Browser timer backed by `setTimeout`.

use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use lib_wallet::Timer;

pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}
