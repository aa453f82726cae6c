//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ConferenceListQuery, CreateConferenceRequest, CreateSubmissionRequest,
    UpdateConferenceRequest,
};

pub use responses::{
    ConferenceFormResponse, ConferenceListResponse, ConferenceResponse, FormField, HealthChecks,
    HealthResponse, PreferenceResponse, ReadinessResponse, SubmissionResponse,
};

pub use mappers::ConferenceView;
