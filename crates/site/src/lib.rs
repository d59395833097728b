//! View-state layer for the public site.
//!
//! No rendering lives here; these types model the state and signaling the
//! pages share. The home page owns the hero-image rotation and broadcasts
//! the current frame on a watch channel; the navbar mirrors that frame, but
//! only while the visitor is on the home route.

pub mod hero;
pub mod home;
pub mod navbar;
pub mod route;

pub use hero::{hero_channel, HeroFrame};
pub use home::{spawn_rotation, EnquiryForm, HomePage, RotationHandle, SubmitStatus, ROTATION_PERIOD};
pub use navbar::Navbar;
pub use route::{route_channel, Route};
