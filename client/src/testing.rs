//! Scripted in-memory backend for unit tests.

use std::cell::RefCell;

use content::{ContactSubmission, GalleryItem, Testimonial};

use crate::net::api::{ApiError, SiteApi};

pub(crate) const LIST_TESTIMONIALS: &str = "GET /api/testimonials";
pub(crate) const CLEAR_GALLERY: &str = "DELETE /api/gallery";
pub(crate) const SEED: &str = "POST /api/seed";
pub(crate) const LIST_GALLERY: &str = "GET /api/gallery";
pub(crate) const SUBMIT_CONTACT: &str = "POST /api/contact";

/// Records every call in order and fails the one named by `fail_on`.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    pub calls: RefCell<Vec<&'static str>>,
    pub fail_on: Option<&'static str>,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Vec<GalleryItem>,
    pub submitted: RefCell<Vec<ContactSubmission>>,
}

impl ScriptedApi {
    pub fn failing(step: &'static str) -> Self {
        Self { fail_on: Some(step), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.fail_on == Some(call) {
            return Err(ApiError::Status { method: "TEST", path: call, status: 500 });
        }
        Ok(())
    }
}

impl SiteApi for ScriptedApi {
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.record(LIST_TESTIMONIALS)?;
        Ok(self.testimonials.clone())
    }

    async fn clear_gallery(&self) -> Result<(), ApiError> {
        self.record(CLEAR_GALLERY)
    }

    async fn seed(&self) -> Result<(), ApiError> {
        self.record(SEED)
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        self.record(LIST_GALLERY)?;
        Ok(self.gallery.clone())
    }

    async fn submit_contact(&self, body: &ContactSubmission) -> Result<(), ApiError> {
        self.record(SUBMIT_CONTACT)?;
        self.submitted.borrow_mut().push(body.clone());
        Ok(())
    }
}

pub(crate) fn testimonial(id: &str, name: &str) -> Testimonial {
    Testimonial {
        id: id.to_owned(),
        name: name.to_owned(),
        rating: 5,
        comment: format!("{name} was happy"),
        service_type: "Plumbing".to_owned(),
    }
}

pub(crate) fn gallery_item(id: &str, title: &str) -> GalleryItem {
    GalleryItem {
        id: id.to_owned(),
        title: title.to_owned(),
        description: String::new(),
        service_type: "Painting".to_owned(),
        before_image: format!("/assets/{id}-before.jpg"),
        after_image: format!("/assets/{id}-after.jpg"),
    }
}
