//! Fixed marketing copy rendered by the static page sections.

pub const BUSINESS_NAME: &str = "Chi's Fixerupper";
pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "chi@fixerupper.com";
pub const SERVICE_AREA: &str = "Your Neighborhood & Beyond";
pub const TAGLINE: &str = "Your certified neighborhood handyman. Quality repairs and renovations at bargain prices.";
pub const CREDENTIAL: &str = "Certified Mechanical Engineer";
pub const EXPERIENCE: &str = "10+ Years Experience";
pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1461938337379-4b537cd2db74?w=800&q=80";

/// Glyph shown next to a piece of copy. The client maps each to an SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Award,
    Bath,
    Check,
    ChefHat,
    Clock,
    DoorOpen,
    Droplets,
    Fence,
    Hammer,
    Home,
    LayoutGrid,
    Mail,
    MapPin,
    Package,
    Paintbrush,
    Phone,
    Thermometer,
    TreePine,
    Wind,
    Wrench,
}

/// In-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Stable test id suffix: lowercase label with the first space dashed.
    #[must_use]
    pub fn slug(&self) -> String {
        self.label.to_lowercase().replacen(' ', "-", 1)
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#gallery", label: "Our Work" },
    NavLink { href: "#testimonials", label: "Reviews" },
    NavLink { href: "#contact", label: "Contact" },
];

/// Footer quick links; same targets as the header with longer labels.
pub const QUICK_LINKS: [NavLink; 4] = [
    NavLink { href: "#services", label: "Our Services" },
    NavLink { href: "#gallery", label: "Our Work" },
    NavLink { href: "#testimonials", label: "Reviews" },
    NavLink { href: "#contact", label: "Contact Us" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub glyph: Glyph,
    pub text: &'static str,
}

pub const HERO_FEATURES: [Feature; 3] = [
    Feature { glyph: Glyph::Award, text: "Certified Engineer" },
    Feature { glyph: Glyph::Check, text: "Quality Guaranteed" },
    Feature { glyph: Glyph::Clock, text: "Fast Service" },
];

/// One card in the services grid. Featured cards span wider columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub featured: bool,
}

pub const SERVICES: [Service; 14] = [
    Service {
        glyph: Glyph::DoorOpen,
        title: "Windows & Doors",
        description: "Installation, repair, and weatherproofing for all types of windows and doors",
        featured: false,
    },
    Service {
        glyph: Glyph::Home,
        title: "Walls & Drywall",
        description: "Patching, texturing, and complete wall renovations",
        featured: false,
    },
    Service {
        glyph: Glyph::Droplets,
        title: "Plumbing",
        description: "Leak repairs, pipe installations, fixture replacements, and drain cleaning",
        featured: true,
    },
    Service {
        glyph: Glyph::Hammer,
        title: "Roof Repair",
        description: "Shingle replacement, leak detection, and gutter maintenance",
        featured: false,
    },
    Service {
        glyph: Glyph::Wind,
        title: "Leak Detection",
        description: "Professional leak detection and waterproofing solutions",
        featured: false,
    },
    Service {
        glyph: Glyph::Fence,
        title: "Fence & Deck",
        description: "New installations, repairs, staining, and restoration",
        featured: false,
    },
    Service {
        glyph: Glyph::Thermometer,
        title: "Heating & HVAC",
        description: "Basic heating repairs and maintenance services",
        featured: false,
    },
    Service {
        glyph: Glyph::Paintbrush,
        title: "Painting",
        description: "Interior and exterior painting with premium finishes",
        featured: true,
    },
    Service {
        glyph: Glyph::LayoutGrid,
        title: "Flooring",
        description: "Hardwood, tile, laminate installation and refinishing",
        featured: false,
    },
    Service {
        glyph: Glyph::Package,
        title: "Cabinets",
        description: "Installation, repair, refinishing, and hardware upgrades",
        featured: false,
    },
    Service {
        glyph: Glyph::Wrench,
        title: "Remodeling",
        description: "Complete room renovations and home improvement projects",
        featured: true,
    },
    Service {
        glyph: Glyph::Bath,
        title: "Bathroom Remodeling",
        description: "Full bathroom renovations, tile work, vanities, and fixture upgrades",
        featured: true,
    },
    Service {
        glyph: Glyph::ChefHat,
        title: "Kitchen Remodeling",
        description: "Kitchen makeovers, countertops, backsplash, and appliance installation",
        featured: true,
    },
    Service {
        glyph: Glyph::TreePine,
        title: "Patio & Outdoor",
        description: "Patio construction, repairs, outdoor living spaces, and deck work",
        featured: false,
    },
];

/// Service names linked from the footer.
pub const FOOTER_SERVICES: [&str; 6] = [
    "Windows & Doors",
    "Plumbing",
    "Painting",
    "Flooring",
    "Cabinets",
    "Roof Repair",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub glyph: Glyph,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo { glyph: Glyph::Phone, label: "Phone", value: PHONE },
    ContactInfo { glyph: Glyph::Mail, label: "Email", value: EMAIL },
    ContactInfo { glyph: Glyph::MapPin, label: "Service Area", value: SERVICE_AREA },
];

pub const PROMISES: [&str; 5] = [
    "Free estimates on all projects",
    "Quality work guaranteed",
    "Fair and transparent pricing",
    "Clean up after every job",
    "On-time service",
];
