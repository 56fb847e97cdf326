//! Page Models
//!
//! Static content of the site plus the few data types shared between modules.

use serde::{Deserialize, Serialize};

/// One channel on the broadcast monitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Video id at the provider
    #[serde(rename = "id")]
    pub external_id: String,
    /// Button label, e.g. "01"
    pub channel: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 200, suffix: "+", label: "Ads Produced" },
    Stat { value: 44, suffix: "+", label: "Clients Served" },
    Stat { value: 8, suffix: "+", label: "Years of Excellence" },
    Stat { value: 50, suffix: "M+", label: "Views Generated" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: "🎬",
        title: "Video Production",
        blurb: "Corporate films, product videos, online ads, and training content crafted with precision and creativity to tell your brand story effectively.",
    },
    ServiceCard {
        icon: "🎙️",
        title: "Voice Over & Dubbing",
        blurb: "Professional voice-over services in multiple regional and international languages with a diverse voice bank of talented artists.",
    },
    ServiceCard {
        icon: "✨",
        title: "Animation",
        blurb: "Engaging whiteboard, 2D, and 3D animations that bring complex concepts to life with visual storytelling excellence.",
    },
    ServiceCard {
        icon: "🎵",
        title: "Music & Sound Design",
        blurb: "Custom music composition and royalty-free soundtracks that enhance the emotional impact of your content.",
    },
    ServiceCard {
        icon: "🎨",
        title: "Creative Conceptualization",
        blurb: "Strategic creative development aligned with your marketing objectives and target audience insights.",
    },
    ServiceCard {
        icon: "✂️",
        title: "Post-Production",
        blurb: "State-of-the-art editing, color grading, and visual effects that ensure your content stands out with professional polish.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Brief & Strategy",
        detail: "We start by understanding your objectives, target audience, and brand message to create a clear creative brief.",
    },
    ProcessStep {
        title: "Conceptualization",
        detail: "Our creative team develops compelling concepts that align with your brand and resonate with your audience.",
    },
    ProcessStep {
        title: "Production",
        detail: "Professional execution with top-tier equipment, talented artists, and meticulous attention to detail.",
    },
    ProcessStep {
        title: "Post-Production",
        detail: "Expert editing, sound design, and finishing touches that elevate your content to professional standards.",
    },
    ProcessStep {
        title: "Delivery & Support",
        detail: "Final delivery in your preferred formats with ongoing support to ensure maximum impact.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub photo: &'static str,
    pub bio: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Homiyar Sachinwala",
        photo: "/team/Sachin.jpeg",
        bio: "15 years of experience in advertising, sales, and client servicing. Expert in creative direction, script writing, and voice-over artistry.",
    },
    TeamMember {
        name: "Sakshi Shreya",
        photo: "/team/Sakshi.jpeg",
        bio: "Indian playback singer and creative producer working across advertising, voice-overs, and dubbing. She manages talent, coordinates crews, and oversees projects from pre-production to post-production, ensuring smooth execution and high-quality results.",
    },
];

/// `(icon, heading, line)` rows of the contact sidebar
pub const CONTACT_DETAILS: &[(&str, &str, &str)] = &[
    ("📍", "Visit Us", "Mumbai, Maharashtra, India"),
    ("📞", "Call Us", "+91 98765 43210"),
    ("✉️", "Email Us", "contact@emotionproduction.in"),
    ("🕒", "Working Hours", "Mon - Sat: 9:00 AM - 7:00 PM"),
];

/// `(value, label)` pairs for the quote form's service checkboxes
pub const QUOTE_SERVICES: &[(&str, &str)] = &[
    ("video-production", "Video Production"),
    ("voice-over", "Voice Over/Dubbing"),
    ("animation", "Animation"),
    ("music", "Music/Sound Design"),
    ("conceptualization", "Creative Concept"),
    ("post-production", "Post-Production"),
];

pub const BUDGET_OPTIONS: &[(&str, &str)] = &[
    ("", "Select Budget Range"),
    ("under-50k", "Under ₹50,000"),
    ("50k-1l", "₹50,000 - ₹1,00,000"),
    ("1l-5l", "₹1,00,000 - ₹5,00,000"),
    ("5l-10l", "₹5,00,000 - ₹10,00,000"),
    ("above-10l", "Above ₹10,00,000"),
];

pub const TIMELINE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select Timeline"),
    ("urgent", "Urgent (Within 1 week)"),
    ("2-weeks", "2 Weeks"),
    ("1-month", "1 Month"),
    ("2-months", "2 Months"),
    ("flexible", "Flexible"),
];

/// Files found under `public/clients` at build time
pub mod assets {
    include!(concat!(env!("OUT_DIR"), "/client_logos.rs"));

    pub fn client_logo_url(file: &str) -> String {
        format!("/clients/{}", file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_entry_reads_provider_id() {
        let entry: PlaylistEntry =
            serde_json::from_str(r#"{"id":"uqVy4BYCrAk","channel":"01","label":"Showreel 01"}"#).unwrap();
        assert_eq!(entry.external_id, "uqVy4BYCrAk");
        assert_eq!(entry.channel, "01");
    }

    #[test]
    fn test_quote_services_are_unique() {
        let mut values: Vec<_> = QUOTE_SERVICES.iter().map(|(v, _)| *v).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), QUOTE_SERVICES.len());
    }

    #[test]
    fn test_client_logos_match_filter() {
        assert!(assets::CLIENT_LOGOS.iter().all(|f| crate::logos::is_client_logo(f)));
    }
}
