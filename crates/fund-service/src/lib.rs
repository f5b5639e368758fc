//! # fund-service
//!
//! Application layer containing business logic, services, DTOs, and the live
//! session projections that keep the funding gauge and cheer wall current.

pub mod dto;
pub mod services;
pub mod sessions;

pub use dto::{
    CheerResponse, CreateCheerRequest, CreatePledgeRequest, FundingResponse, HealthResponse,
    PledgeResponse, PledgeStatus, ReadinessResponse, ThemeResponse, UpdateThemeRequest,
};
pub use services::{
    CheckoutService, CheerService, FundingService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, ThemeService,
};
pub use sessions::{LiveCheerFeed, LiveFunding};
