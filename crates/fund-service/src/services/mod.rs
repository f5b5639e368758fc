//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod checkout;
pub mod cheer;
pub mod context;
pub mod error;
pub mod funding;
pub mod theme;

// Re-export all services for convenience
pub use checkout::CheckoutService;
pub use cheer::CheerService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use funding::FundingService;
pub use theme::ThemeService;
