use super::*;

fn section() -> (Owner, RwSignal<FetchState<&'static str>>) {
    let owner = Owner::new();
    owner.set();
    (owner, RwSignal::new(FetchState::new()))
}

#[test]
fn live_delivery_settles_state() {
    let (_owner, state) = section();
    let alive = Liveness::new();

    assert!(deliver(state, &alive, vec!["a", "b"]));

    let settled = state.get_untracked();
    assert!(!settled.loading);
    assert_eq!(settled.items, ["a", "b"]);
}

#[test]
fn delivery_after_teardown_is_dropped() {
    let (_owner, state) = section();
    let alive = Liveness::new();
    let task_alive = alive.clone();
    alive.end();

    assert!(!deliver(state, &task_alive, vec!["late"]));

    let untouched = state.get_untracked();
    assert!(untouched.loading);
    assert!(untouched.items.is_empty());
    assert_eq!(untouched.placeholder_slots(), crate::state::fetch::PLACEHOLDER_COUNT);
}

#[test]
fn second_delivery_is_ignored() {
    let (_owner, state) = section();
    let alive = Liveness::new();

    assert!(deliver(state, &alive, vec!["first"]));
    assert!(!deliver(state, &alive, vec!["second"]));

    assert_eq!(state.get_untracked().items, ["first"]);
}

#[test]
fn delivery_into_disposed_signal_is_dropped() {
    let (_owner, state) = section();
    let alive = Liveness::new();
    state.dispose();

    assert!(!deliver(state, &alive, vec!["late"]));
}
