//! Platform sleep and fire-and-forget delayed actions guarded by a view lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Owned by a mounted view. Dropping it (or calling [`end`](Lifetime::end))
/// marks every [`LifetimeHandle`] as torn down.
#[derive(Debug)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn handle(&self) -> LifetimeHandle {
        LifetimeHandle {
            alive: Arc::clone(&self.alive),
        }
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.end();
    }
}

#[derive(Clone, Debug)]
pub struct LifetimeHandle {
    alive: Arc<AtomicBool>,
}

impl LifetimeHandle {
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// Wait `delay`, then run `action` only if the view is still mounted.
/// Returns whether the action ran.
pub async fn run_after<F: FnOnce()>(delay: Duration, lifetime: LifetimeHandle, action: F) -> bool {
    sleep(delay).await;
    if !lifetime.is_alive() {
        tracing::debug!(?delay, "view torn down before timer fired, skipping");
        return false;
    }
    action();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_end_is_visible_to_handles() {
        let lifetime = Lifetime::default();
        let handle = lifetime.handle();
        assert!(handle.is_alive());
        lifetime.end();
        assert!(!handle.is_alive());
    }

    #[tokio::test]
    async fn test_action_runs_while_mounted() {
        let lifetime = Lifetime::new();
        let fired = Cell::new(false);
        let ran = run_after(Duration::from_millis(1), lifetime.handle(), || fired.set(true)).await;
        assert!(ran);
        assert!(fired.get());
    }

    #[tokio::test]
    async fn test_action_skipped_after_teardown() {
        let lifetime = Lifetime::new();
        let handle = lifetime.handle();
        drop(lifetime);

        let fired = Cell::new(false);
        let ran = run_after(Duration::from_millis(1), handle, || fired.set(true)).await;
        assert!(!ran);
        assert!(!fired.get());
    }
}
