use super::*;

#[test]
fn parse_refresh_defaults_to_fetch_only() {
    assert_eq!(parse_refresh(None), GalleryRefresh::FetchOnly);
    assert_eq!(parse_refresh(Some("")), GalleryRefresh::FetchOnly);
    assert_eq!(parse_refresh(Some("0")), GalleryRefresh::FetchOnly);
    assert_eq!(parse_refresh(Some("off")), GalleryRefresh::FetchOnly);
}

#[test]
fn parse_refresh_accepts_truthy_values() {
    assert_eq!(parse_refresh(Some("1")), GalleryRefresh::ReseedThenFetch);
    assert_eq!(parse_refresh(Some(" TRUE ")), GalleryRefresh::ReseedThenFetch);
    assert_eq!(parse_refresh(Some("yes")), GalleryRefresh::ReseedThenFetch);
}
