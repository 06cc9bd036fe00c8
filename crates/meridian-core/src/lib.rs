//! # Meridian Core
//!
//! Shared types, configuration and errors for the Meridian portfolio
//! analytics workspace.
//!
//! This crate holds everything the engine crate consumes but does not
//! compute: the validated request/portfolio types, price series with their
//! ordering invariants, the engine configuration constants, and the error
//! taxonomy.
//!
//! ## Design Philosophy
//!
//! - **Validate once**: [`PortfolioSpec`] and [`PriceSeries`] check their
//!   invariants at construction and are immutable afterwards.
//! - **Explicit constants**: every policy value (annualization factor, base
//!   portfolio value, window lengths) lives in [`EngineConfig`] so tests can
//!   override it.
//! - **Hard vs. soft failures**: [`RiskError`] covers only the conditions
//!   that abort a request; recoverable conditions degrade output fields
//!   instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{RiskError, RiskResult};
pub use types::{AnalysisRequest, Holding, PortfolioSpec, PricePoint, PriceSeries, MAX_HOLDINGS};
