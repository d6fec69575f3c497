//! Current calendar year for the footer copyright line.

/// Year according to the browser clock (hydrate) or the host clock.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
