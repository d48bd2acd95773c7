//! Shared types, error model, and configuration for the text analysis
//! service.
//!
//! This crate is the foundation depended on by all other tas crates.
//! It provides:
//! - [`TasError`] — the unified error type
//! - Domain types ([`AnalysisRequest`], [`RawContent`], [`AnalysisResult`],
//!   [`ExtractedBody`], the social cards, [`Keywords`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, KeywordsConfig, LoggingConfig, SETTINGS_FILE_NAME, ServerConfig, ServiceConfig,
    load_config, load_config_from,
};
pub use error::{Result, TasError};
pub use types::{
    AnalysisRequest, AnalysisResult, ExtractedBody, Keyword, Keywords, OpenGraphCard, RawContent,
    SocialCards, TwitterCard,
};
