//! Core types for the Chain Metrics Terminal
//!
//! This crate defines the shared data structures used across the terminal:
//! chain, stablecoin and bridge records, the workspace error type, USD
//! formatting helpers, and the injectable clock.

pub mod clock;
pub mod error;
pub mod format;
pub mod metrics;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{MetricsError, MetricsResult};
pub use format::{format_share, format_usd, format_usd_billions};
pub use metrics::{Bridge, BridgePeriod, ChainTvl, StablecoinChain};
