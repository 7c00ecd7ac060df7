//! pakcities-cli
//! =============
//!
//! Command-line interface for the `pakcities-core` dataset of Pakistani
//! cities.
//!
//! This crate primarily provides a binary (`pakcities`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! pakcities --help
//! pakcities stats
//! pakcities find karachi
//! pakcities top --limit 5
//! pakcities nearest 31.5 74.3 --unit miles
//! pakcities --json province Sindh
//! ```
//!
//! For programmatic access use the `pakcities-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
