use super::*;

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn gallery_item_decodes_backend_shape() {
    let json = serde_json::json!({
        "id": "abc",
        "title": "Deck",
        "description": "New boards",
        "service_type": "Fence & Deck",
        "before_image": "/assets/a.jpg",
        "after_image": "/assets/b.jpg",
        "created_at": "2025-01-01T00:00:00Z"
    });
    let item: GalleryItem = serde_json::from_value(json).expect("gallery item");
    assert_eq!(item.id, "abc");
    assert_eq!(item.service_type, "Fence & Deck");
    assert_eq!(item.after_image, "/assets/b.jpg");
}

#[test]
fn numeric_ids_are_stringified() {
    let json = serde_json::json!({
        "id": 42,
        "name": "Pat",
        "rating": 4,
        "comment": "Solid",
        "service_type": "Painting"
    });
    let t: Testimonial = serde_json::from_value(json).expect("testimonial");
    assert_eq!(t.id, "42");
}

#[test]
fn rating_accepts_integral_float() {
    let json = serde_json::json!({
        "id": "1",
        "name": "Pat",
        "rating": 5.0,
        "comment": "",
        "service_type": ""
    });
    let t: Testimonial = serde_json::from_value(json).expect("testimonial");
    assert_eq!(t.rating, 5);
}

#[test]
fn rating_rejects_fractional_value() {
    let json = serde_json::json!({
        "id": "1",
        "name": "Pat",
        "rating": 4.5,
        "comment": "",
        "service_type": ""
    });
    assert!(serde_json::from_value::<Testimonial>(json).is_err());
}

#[test]
fn contact_submission_serializes_four_keys() {
    let body = ContactSubmission {
        name: "Jo".to_owned(),
        email: "jo@example.com".to_owned(),
        phone: "555".to_owned(),
        message: "Fix the sink".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).expect("json"),
        serde_json::json!({
            "name": "Jo",
            "email": "jo@example.com",
            "phone": "555",
            "message": "Fix the sink"
        })
    );
}

// =============================================================
// Display helpers
// =============================================================

fn testimonial(name: &str, rating: i32) -> Testimonial {
    Testimonial {
        id: "t".to_owned(),
        name: name.to_owned(),
        rating,
        comment: String::new(),
        service_type: String::new(),
    }
}

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(testimonial("Sarah Johnson", 5).initials(), "SJ");
    assert_eq!(testimonial("  Emily   de Rodriguez ", 5).initials(), "EdR");
    assert_eq!(testimonial("", 5).initials(), "");
}

#[test]
fn filled_stars_clamps_out_of_range_ratings() {
    assert_eq!(testimonial("a", 3).filled_stars(), 3);
    assert_eq!(testimonial("a", 9).filled_stars(), MAX_RATING);
    assert_eq!(testimonial("a", -2).filled_stars(), 0);
}

// =============================================================
// Contact fields
// =============================================================

#[test]
fn contact_field_names_round_trip() {
    for field in [ContactField::Name, ContactField::Email, ContactField::Phone, ContactField::Message] {
        assert_eq!(ContactField::from_input_name(field.input_name()), Some(field));
    }
    assert_eq!(ContactField::from_input_name("address"), None);
}

#[test]
fn setting_one_field_leaves_others_untouched() {
    let mut body = ContactSubmission {
        name: "Jo".to_owned(),
        email: "old@example.com".to_owned(),
        phone: "555".to_owned(),
        message: "Hi".to_owned(),
    };
    body.set(ContactField::Email, "new@example.com".to_owned());
    assert_eq!(body.name, "Jo");
    assert_eq!(body.email, "new@example.com");
    assert_eq!(body.phone, "555");
    assert_eq!(body.message, "Hi");
}

#[test]
fn default_submission_is_blank() {
    let body = ContactSubmission::default();
    for field in [ContactField::Name, ContactField::Email, ContactField::Phone, ContactField::Message] {
        assert_eq!(body.get(field), "");
    }
}

// =============================================================
// Fixtures and paths
// =============================================================

#[test]
fn fallback_sets_have_fixed_sizes_and_order() {
    let testimonials = fallback::testimonials();
    assert_eq!(testimonials.len(), fallback::TESTIMONIAL_COUNT);
    let names: Vec<&str> = testimonials.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Sarah Johnson", "Michael Chen", "Emily Rodriguez", "David Thompson"]);

    let gallery = fallback::gallery();
    assert_eq!(gallery.len(), fallback::GALLERY_COUNT);
    let ids: Vec<&str> = gallery.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(gallery[0].title, "Toilet Replacement & Tiling");
    assert_eq!(gallery[8].after_image, "/assets/wallAfter.jpg");
}

#[test]
fn fallback_images_are_remote_or_local_assets() {
    for item in fallback::gallery() {
        for image in [&item.before_image, &item.after_image] {
            assert!(
                image.starts_with("https://") || image.starts_with(fallback::ASSET_PREFIX),
                "gallery {} links {image}",
                item.id
            );
        }
    }

    let local = fallback::local_asset_files();
    assert_eq!(local.len(), 11);
    assert_eq!(local[0], "toiletBefore.PNG");
    assert_eq!(local.last(), Some(&"wallAfter.jpg"));
    assert!(local.iter().all(|name| !name.contains('/')));
}

#[test]
fn api_url_trims_trailing_slashes() {
    assert_eq!(paths::api_url("http://host:8001/", paths::GALLERY), "http://host:8001/api/gallery");
    assert_eq!(paths::api_url("http://host:8001", paths::SEED), "http://host:8001/api/seed");
    assert_eq!(paths::api_url("", paths::CONTACT), "/api/contact");
}

#[test]
fn nav_link_slug_dashes_first_space() {
    assert_eq!(site::NAV_LINKS[1].slug(), "our-work");
    assert_eq!(site::NAV_LINKS[0].slug(), "services");
}

#[test]
fn services_mark_five_featured_cards() {
    assert_eq!(site::SERVICES.iter().filter(|s| s.featured).count(), 5);
}
