//! Mount-time fetch wiring shared by the data-driven sections.
//!
//! Each section owns one `RwSignal<FetchState<T>>`. In the browser the load
//! future is spawned exactly once when the section is created; its result is
//! only written back while the section is still mounted. During SSR nothing
//! is spawned and the section renders its placeholders.

#[cfg(test)]
#[path = "mount_fetch_test.rs"]
mod mount_fetch_test;

use std::future::Future;

use leptos::prelude::*;

use crate::state::fetch::FetchState;
use crate::util::liveness::Liveness;

/// Create the section's fetch state and start `load` once.
///
/// `load` must absorb its own failures (substituting fallback data); the
/// state settles with whatever it returns.
pub fn use_mount_fetch<T, F, Fut>(load: F) -> RwSignal<FetchState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Vec<T>> + 'static,
{
    let state = RwSignal::new(FetchState::new());

    #[cfg(feature = "hydrate")]
    {
        let alive = Liveness::new();
        let task_alive = alive.clone();
        leptos::task::spawn_local(async move {
            let items = load().await;
            deliver(state, &task_alive, items);
        });
        on_cleanup(move || alive.end());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = load;
    }

    state
}

/// Settle `state` with a finished load, unless its section is gone.
///
/// Returns whether the items were written. Ended liveness, a disposed
/// signal and an already settled state all drop the items.
pub fn deliver<T>(state: RwSignal<FetchState<T>>, alive: &Liveness, items: Vec<T>) -> bool
where
    T: Send + Sync + 'static,
{
    if !alive.is_alive() {
        return false;
    }
    state.try_update(|s| s.settle(items)).unwrap_or(false)
}
