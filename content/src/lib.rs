//! Shared records, API paths, and fixed site copy for the Fixerupper site.
//!
//! This crate owns the JSON wire representation exchanged with the backend
//! API and is used by both `client` (browser bundle) and `cli` (operator
//! tool). Fallback fixtures live here too so UI code never embeds domain
//! literals.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod fallback;
pub mod paths;
pub mod site;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A before/after project shown in the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Opaque identifier, used only as a list key.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-text service label (e.g. `"Plumbing"`).
    pub service_type: String,
    /// URL or site-relative path of the "before" photo.
    pub before_image: String,
    /// URL or site-relative path of the "after" photo.
    pub after_image: String,
}

/// A customer review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Opaque identifier, used only as a list key.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Star rating, intended range 1-5 but not validated.
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: i32,
    pub comment: String,
    pub service_type: String,
}

/// Number of star slots rendered for a rating.
pub const MAX_RATING: i32 = 5;

impl Testimonial {
    /// Initials shown in the avatar: the first character of every word in
    /// `name`.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Rating clamped into the renderable `0..=MAX_RATING` range.
    #[must_use]
    pub fn filled_stars(&self) -> i32 {
        self.rating.clamp(0, MAX_RATING)
    }
}

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Input `name` attributes of the contact form, one per submission field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// Resolve an input's `name` attribute. Unknown names yield `None`.
    #[must_use]
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    /// The input `name` attribute for this field.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl ContactSubmission {
    /// Current value of one field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    /// Replace the value of exactly one field.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// Accept string ids as-is and stringify numeric ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_i64() {
        return i32::try_from(int).map_err(|_| D::Error::custom(format!("rating {int} out of range")));
    }
    #[allow(clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float.abs() <= f64::from(i32::MAX)
    {
        return Ok(float as i32);
    }
    Err(D::Error::custom("expected integer-compatible rating"))
}
