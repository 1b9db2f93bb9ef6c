//! DefiLlama integration for the Chain Metrics Terminal
//!
//! Fetches the three public DefiLlama datasets (chain TVLs, per-chain
//! stablecoin supply, bridge volumes) and converts them into the core
//! record types. One fetch attempt per call; no caching, no retries.

pub mod client;
pub mod types;

pub use client::LlamaClient;
