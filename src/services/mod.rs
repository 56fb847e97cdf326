//! Outside Services
//!
//! Bindings to the two third parties the page talks to: the form relay and
//! the video player.

mod relay;
pub mod youtube;

pub use relay::{FormRelay, HttpRelay, RelayError};
