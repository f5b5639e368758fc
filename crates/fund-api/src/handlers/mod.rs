//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod cheers;
pub mod funding;
pub mod health;
pub mod live;
pub mod pledges;
pub mod theme;
