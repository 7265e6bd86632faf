// Slidecast API Client
//
// This crate provides a typed HTTP client for the Slidecast presentation
// platform. It covers the resource-creation endpoints (rooms, slides, pages,
// scripts, vote templates and options), session start, and per-role one-time
// passcode issuance and verification.

mod client;
mod error;
mod types;


pub use client::{ApiClient, OtpRole};
pub use error::{ClientError, Result};
pub use types::{OtpVerified, VoteOptionSpec};
