//! # fund-api
//!
//! REST + WebSocket API surface for the funding campaign.
//!
//! - REST routes under `/api/v1` for the funding gauge, the cheer wall, the
//!   checkout flow, and the theme preference
//! - `GET /api/v1/live` WebSocket forwarding insert events to clients
//! - Health probes at `/health` and `/health/ready`

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use response::{ApiError, ApiJson, ApiResult};
pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
