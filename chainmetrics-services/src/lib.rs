//! Business logic services for the Chain Metrics Terminal
//!
//! This crate provides the join/ranking/comparison engine over the three
//! DefiLlama datasets: name matching, ranking with percentage shares,
//! heuristic chain classification, and the six query views.

pub mod classifier;
pub mod matcher;
pub mod metrics_service;
pub mod provider;
pub mod ranking;

pub use classifier::{Category, CategoryLists};
pub use matcher::{find_by_name, Named};
pub use metrics_service::{
    BridgeEntry, BridgeRankingsResponse, ChainDetail, ChainDetailResponse, ChainNotFound,
    ChainRankEntry, CompareResponse, ComparedChain, ComparisonWinners, MetricsService,
    OverviewResponse, StablecoinDetail, StablecoinDistributionResponse, StablecoinEntry,
    TopChainsParams, TopChainsResponse,
};
pub use provider::ChainDataProvider;
pub use ranking::{rank_all, rank_top, RankedEntry};
