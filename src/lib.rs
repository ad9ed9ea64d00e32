//! Convert SExtractor source catalogs into astrometry.net `.axy` coordinate tables.
//!
//! A SExtractor run over an astronomical image produces a plain-text catalog of
//! detected sources. Before an image can be plate-solved, that catalog has to be
//! cut down to a clean, spatially well-distributed list of bright stars and
//! re-emitted as the FITS binary table astrometry.net expects. This crate does
//! exactly that, in one synchronous pass:
//!
//! 1. [`catalog`] parses the text catalog, applies quality cuts and sorts the
//!    survivors brightest-first.
//! 2. [`selection`] bins the image into a uniform grid and keeps at most a few
//!    stars per cell, so references spread across the whole frame instead of
//!    piling up in one cluster.
//! 3. [`axy`] writes the selected X/Y positions as a two-column FITS binary
//!    table.
//!
//! [`pipeline::run`] sequences the stages; the `cat2axy` binary wraps it in a
//! small CLI.

pub mod axy;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod selection;

pub use catalog::{load_catalog, CatalogRecord};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::run;
pub use selection::select_references;
