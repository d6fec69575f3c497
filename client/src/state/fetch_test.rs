use futures::executor::block_on;

use super::*;
use crate::testing::{
    CLEAR_GALLERY, LIST_GALLERY, LIST_TESTIMONIALS, SEED, ScriptedApi, gallery_item, testimonial,
};

// =============================================================
// FetchState lifecycle
// =============================================================

#[test]
fn new_state_is_loading_and_empty() {
    let state = FetchState::<Testimonial>::new();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.placeholder_slots(), PLACEHOLDER_COUNT);
}

#[test]
fn settle_populates_and_hides_placeholders() {
    let mut state = FetchState::new();
    assert!(state.settle(vec![testimonial("a", "Ann")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.placeholder_slots(), 0);
}

#[test]
fn settle_happens_only_once() {
    let mut state = FetchState::new();
    assert!(state.settle(vec![testimonial("a", "Ann")]));
    assert!(!state.settle(vec![testimonial("b", "Bo"), testimonial("c", "Cy")]));
    assert_eq!(state.items, vec![testimonial("a", "Ann")]);
}

#[test]
fn settling_with_empty_list_still_stops_loading() {
    let mut state = FetchState::<GalleryItem>::new();
    assert!(state.settle(Vec::new()));
    assert!(!state.loading);
    assert_eq!(state.placeholder_slots(), 0);
}

#[test]
fn rows_keep_duplicate_ids_distinct() {
    let mut state = FetchState::new();
    state.settle(vec![gallery_item("7", "Deck"), gallery_item("7", "Fence"), gallery_item("8", "Roof")]);

    let rows = state.rows(|g| g.id.as_str());
    let keys: Vec<RowKey> = rows.iter().map(|(key, _)| key.clone()).collect();
    assert_eq!(keys, [(0, "7".to_owned()), (1, "7".to_owned()), (2, "8".to_owned())]);
    let titles: Vec<&str> = rows.iter().map(|(_, g)| g.title.as_str()).collect();
    assert_eq!(titles, ["Deck", "Fence", "Roof"]);
}

// =============================================================
// Testimonials
// =============================================================

#[test]
fn testimonials_success_keeps_response_order() {
    let api = ScriptedApi {
        testimonials: vec![
            testimonial("9", "Zed"),
            testimonial("3", "Amy"),
            testimonial("5", "Max"),
        ],
        ..ScriptedApi::default()
    };
    let items = block_on(load_testimonials(&api));
    let ids: Vec<&str> = items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["9", "3", "5"]);
    assert_eq!(api.calls(), [LIST_TESTIMONIALS]);
}

#[test]
fn testimonials_failure_uses_exact_fallback() {
    let api = ScriptedApi::failing(LIST_TESTIMONIALS);
    let items = block_on(load_testimonials(&api));
    assert_eq!(items, fallback::testimonials());
    assert_eq!(items.len(), 4);
    assert_eq!(api.calls(), [LIST_TESTIMONIALS]);
}

#[test]
fn testimonials_empty_response_is_not_a_failure() {
    let api = ScriptedApi::default();
    assert!(block_on(load_testimonials(&api)).is_empty());
}

// =============================================================
// Gallery
// =============================================================

#[test]
fn gallery_fetch_only_skips_reseed() {
    let api = ScriptedApi {
        gallery: vec![gallery_item("x", "Deck")],
        ..ScriptedApi::default()
    };
    let items = block_on(load_gallery(&api, GalleryRefresh::FetchOnly));
    assert_eq!(items, vec![gallery_item("x", "Deck")]);
    assert_eq!(api.calls(), [LIST_GALLERY]);
}

#[test]
fn gallery_reseed_runs_steps_in_order() {
    let api = ScriptedApi {
        gallery: vec![gallery_item("b", "Roof"), gallery_item("a", "Sink")],
        ..ScriptedApi::default()
    };
    let items = block_on(load_gallery(&api, GalleryRefresh::ReseedThenFetch));
    assert_eq!(api.calls(), [CLEAR_GALLERY, SEED, LIST_GALLERY]);
    let ids: Vec<&str> = items.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn gallery_failure_at_delete_stops_chain_and_falls_back() {
    let api = ScriptedApi::failing(CLEAR_GALLERY);
    let items = block_on(load_gallery(&api, GalleryRefresh::ReseedThenFetch));
    assert_eq!(items, fallback::gallery());
    assert_eq!(api.calls(), [CLEAR_GALLERY]);
}

#[test]
fn gallery_failure_at_seed_stops_chain_and_falls_back() {
    let api = ScriptedApi::failing(SEED);
    let items = block_on(load_gallery(&api, GalleryRefresh::ReseedThenFetch));
    assert_eq!(items, fallback::gallery());
    assert_eq!(api.calls(), [CLEAR_GALLERY, SEED]);
}

#[test]
fn gallery_failure_at_get_falls_back() {
    for refresh in [GalleryRefresh::FetchOnly, GalleryRefresh::ReseedThenFetch] {
        let api = ScriptedApi::failing(LIST_GALLERY);
        let items = block_on(load_gallery(&api, refresh));
        assert_eq!(items.len(), 9);
        assert_eq!(items, fallback::gallery());
    }
}

#[test]
fn gallery_refresh_defaults_to_fetch_only() {
    assert_eq!(GalleryRefresh::default(), GalleryRefresh::FetchOnly);
}
