//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod conference;
pub mod context;
pub mod error;
pub mod submission;

// Re-export all services for convenience
pub use conference::ConferenceService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use submission::{create_submission, SubmissionService};
