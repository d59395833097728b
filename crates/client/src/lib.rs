//! Typed access layer for the site backend.
//!
//! One configured [`ApiClient`] is the single point of contact with the
//! server: it attaches the stored bearer token to every request and
//! normalizes every failure into [`models::ApiError`]. The resource modules
//! (`projects`, `services`, `enquiries`, `users`) are thin pass-throughs
//! over it, one function per endpoint.

pub mod enquiries;
pub mod http;
pub mod projects;
pub mod services;
pub mod session;
pub mod users;

pub use http::ApiClient;
pub use session::{Redirect, SessionEvents};
