//! Wire-format records exchanged with the site backend.
//!
//! Everything here is a plain serde record; the backend owns the data and
//! the client never mutates it beyond local form state. Field names follow
//! the backend's camelCase JSON.

pub mod enquiry;
pub mod errors;
pub mod page;
pub mod project;
pub mod service;
pub mod user;

pub use enquiry::{CreateEnquiry, Enquiry, EnquiryPage, UpdateEnquiry};
pub use errors::ApiError;
pub use page::{Page, Pageable, SortInfo};
pub use project::{Project, ProjectDraft, ProjectImage, ProjectStatus};
pub use service::{Service, ServiceDraft};
pub use user::{CreateUser, User, UserAttributes};
