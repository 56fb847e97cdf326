//! UI Components
//!
//! Page sections and the widgets they are built from.

mod agency_reel;
mod broadcast_monitor;
mod clapperboard;
mod clients_marquee;
mod contact;
mod cta_section;
mod film_hud;
mod footer;
mod form_fields;
mod fx;
mod hero;
mod intro_sequence;
mod navbar;
mod page_effects;
mod process;
mod projector_widget;
mod quote_modal;
mod rotary_phone;
mod section_header;
mod services;
mod stats_section;
mod success_toast;
mod team;
mod watch;

pub use agency_reel::AgencyReel;
pub use broadcast_monitor::BroadcastMonitor;
pub use clapperboard::Clapperboard;
pub use clients_marquee::ClientsMarquee;
pub use contact::Contact;
pub use cta_section::CtaSection;
pub use film_hud::FilmHud;
pub use footer::Footer;
pub use hero::Hero;
pub use intro_sequence::IntroSequence;
pub use navbar::Navbar;
pub use page_effects::PageEffects;
pub use process::Process;
pub use quote_modal::QuoteModal;
pub use rotary_phone::RotaryPhone;
pub use section_header::SectionHeader;
pub use services::Services;
pub use stats_section::StatsSection;
pub use success_toast::SuccessToast;
pub use team::Team;
