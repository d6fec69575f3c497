//! Fixed records shown when the backend cannot be reached.
//!
//! The gallery and testimonial views substitute these, in this order, for
//! any failed load. Order and content are part of the view contract.
//!
//! Some gallery images are site-local paths under [`ASSET_PREFIX`]. They are
//! not bundled; the host's `SITE_ASSETS_DIR` must supply them (see
//! [`local_asset_files`]).

use crate::{GalleryItem, Testimonial};

/// Number of fallback testimonials.
pub const TESTIMONIAL_COUNT: usize = 4;
/// Number of fallback gallery projects.
pub const GALLERY_COUNT: usize = 9;
/// URL prefix of images served from the site's own assets directory.
pub const ASSET_PREFIX: &str = "/assets/";

struct TestimonialSeed {
    id: &'static str,
    name: &'static str,
    rating: i32,
    comment: &'static str,
    service_type: &'static str,
}

struct GallerySeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    service_type: &'static str,
    before_image: &'static str,
    after_image: &'static str,
}

const TESTIMONIALS: [TestimonialSeed; TESTIMONIAL_COUNT] = [
    TestimonialSeed {
        id: "1",
        name: "Sarah Johnson",
        rating: 5,
        comment: "Chi fixed our leaking roof in no time! Professional, affordable, and the quality is outstanding. Highly recommend!",
        service_type: "Roof Repair",
    },
    TestimonialSeed {
        id: "2",
        name: "Michael Chen",
        rating: 5,
        comment: "Our kitchen cabinets look brand new after Chi's work. He's meticulous and his prices are very fair.",
        service_type: "Cabinets",
    },
    TestimonialSeed {
        id: "3",
        name: "Emily Rodriguez",
        rating: 5,
        comment: "Best plumber in the neighborhood! Fixed our bathroom pipes and even gave us tips to prevent future issues.",
        service_type: "Plumbing",
    },
    TestimonialSeed {
        id: "4",
        name: "David Thompson",
        rating: 5,
        comment: "Chi painted our entire house interior. The attention to detail is incredible. Worth every penny!",
        service_type: "Painting",
    },
];

const GALLERY: [GallerySeed; GALLERY_COUNT] = [
    GallerySeed {
        id: "1",
        title: "Toilet Replacement & Tiling",
        description: "Complete toilet replacement with new tiling and fixtures",
        service_type: "Plumbing",
        before_image: "/assets/toiletBefore.PNG",
        after_image: "/assets/toiletAfter.PNG",
    },
    GallerySeed {
        id: "2",
        title: "Roof Replacement & Landscaping",
        description: "Complete roof replacement with high-quality materials and landscaping cleanup",
        service_type: "Fixer Upper",
        before_image: "/assets/houseBefore.jpg",
        after_image: "/assets/houseAfter.jpg",
    },
    GallerySeed {
        id: "3",
        title: "Window and Door Replacement",
        description: "Energy-efficient window and door installation",
        service_type: "Windows and Doors",
        before_image: "/assets/windowBefore.jpg",
        after_image: "/assets/windowAfter.jpeg",
    },
    GallerySeed {
        id: "4",
        title: "Roof Repair & Maintenance",
        description: "Roof leak repair and preventive maintenance services",
        service_type: "Roof Repair",
        before_image: "/assets/ventBefore.jpg",
        after_image: "/assets/ventAfter2.jpg",
    },
    GallerySeed {
        id: "5",
        title: "Pipe Repair & Overhaul",
        description: "Pipe leak repair and fixture replacement",
        service_type: "Plumbing",
        before_image: "/assets/pipeBefore.jpg",
        after_image: "/assets/pipeAfter.jpg",
    },
    GallerySeed {
        id: "6",
        title: "Kitchen Cabinet Refinishing",
        description: "Complete cabinet refinishing with new hardware installation",
        service_type: "Cabinets",
        before_image: "https://plus.unsplash.com/premium_photo-1733342541690-01c34a234951?q=80&w=1568&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        after_image: "https://images.unsplash.com/photo-1719569019031-ca8fb2911e2d?q=80&w=1742&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
    },
    GallerySeed {
        id: "7",
        title: "Bathroom Remodeling",
        description: "Complete bathroom remodeling with new fixtures and tiles",
        service_type: "Plumbing",
        before_image: "https://images.unsplash.com/photo-1552321554-5fefe8c9ef14?w=800",
        after_image: "https://images.unsplash.com/photo-1620626011761-996317b8d101?w=800",
    },
    GallerySeed {
        id: "8",
        title: "Hardwood Floor Restoration",
        description: "Sanding, staining, and finishing of hardwood floors",
        service_type: "Flooring",
        before_image: "https://images.unsplash.com/photo-1764150506842-4bbea42a9693?q=80&w=2940&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        after_image: "https://images.unsplash.com/photo-1581858726788-75bc0f6a952d?w=800",
    },
    GallerySeed {
        id: "9",
        title: "Interior Wall Repair & Paint",
        description: "Drywall repair and fresh coat of premium paint",
        service_type: "Painting",
        before_image: "https://plus.unsplash.com/premium_photo-1729005325786-d9d6ff6d0438?q=80&w=1740&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        after_image: "/assets/wallAfter.jpg",
    },
];

/// The fallback testimonials, in display order.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .map(|t| Testimonial {
            id: t.id.to_owned(),
            name: t.name.to_owned(),
            rating: t.rating,
            comment: t.comment.to_owned(),
            service_type: t.service_type.to_owned(),
        })
        .collect()
}

/// The fallback gallery projects, in display order.
#[must_use]
pub fn gallery() -> Vec<GalleryItem> {
    GALLERY
        .iter()
        .map(|g| GalleryItem {
            id: g.id.to_owned(),
            title: g.title.to_owned(),
            description: g.description.to_owned(),
            service_type: g.service_type.to_owned(),
            before_image: g.before_image.to_owned(),
            after_image: g.after_image.to_owned(),
        })
        .collect()
}

/// File names, relative to the assets directory, that the fallback gallery
/// links to under [`ASSET_PREFIX`].
#[must_use]
pub fn local_asset_files() -> Vec<&'static str> {
    GALLERY
        .iter()
        .flat_map(|g| [g.before_image, g.after_image])
        .filter_map(|path| path.strip_prefix(ASSET_PREFIX))
        .collect()
}
