//! # symposium-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    create_submission, ConferenceService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SubmissionService,
};

#[cfg(test)]
pub(crate) mod testing;
