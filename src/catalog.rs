//! SExtractor catalog parsing and candidate filtering.
//!
//! The catalog is a plain-text table with one detection per line, columns
//! whitespace-separated in the fixed order `X Y FLUX FWHM ELONGATION`. Lines
//! starting with `#` are header comments. Loading applies the admission cuts
//! from [`PipelineConfig`] and returns the survivors sorted brightest-first.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// One detected source from the extraction catalog.
///
/// All fields are single precision, matching both the catalog's printed
/// precision and the output table format.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogRecord {
    /// Pixel centroid X coordinate.
    pub x: f32,
    /// Pixel centroid Y coordinate.
    pub y: f32,
    /// Integrated brightness in instrument units.
    pub flux: f32,
    /// Full-width-half-maximum of the PSF in pixels.
    pub fwhm: f32,
    /// Shape distortion ratio; 1.0 is circular.
    pub elongation: f32,
}

impl CatalogRecord {
    /// Whether this detection survives the stellar quality cuts.
    pub fn passes_cuts(&self, config: &PipelineConfig) -> bool {
        self.flux > config.min_flux
            && self.fwhm > config.min_fwhm
            && self.elongation < config.max_elongation
    }
}

/// Parse one catalog line into a record.
///
/// The first five tokens map to the record fields; extra tokens are ignored.
/// Missing or unparseable tokens leave the corresponding fields at 0.0, so a
/// short or garbled line yields a record that fails the flux cut rather than
/// an error.
fn parse_line(line: &str) -> CatalogRecord {
    let mut fields = [0.0_f32; 5];
    for (field, token) in fields.iter_mut().zip(line.split_whitespace()) {
        *field = token.parse().unwrap_or(0.0);
    }
    CatalogRecord {
        x: fields[0],
        y: fields[1],
        flux: fields[2],
        fwhm: fields[3],
        elongation: fields[4],
    }
}

/// Load the catalog at `path`, apply the admission cuts and sort the result
/// by descending flux.
///
/// An unreadable path maps to [`PipelineError::CatalogRead`]. A catalog with
/// no surviving detections yields an empty vector, not an error.
pub fn load_catalog(
    path: &Path,
    config: &PipelineConfig,
) -> Result<Vec<CatalogRecord>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    let mut total_lines = 0_usize;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| PipelineError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        if line.starts_with('#') {
            continue;
        }
        total_lines += 1;
        let record = parse_line(&line);
        if record.passes_cuts(config) {
            candidates.push(record);
        }
    }

    // Brightest first; tie order is unspecified.
    candidates.sort_unstable_by(|a, b| b.flux.total_cmp(&a.flux));

    debug!(
        "catalog {}: kept {} of {} detections",
        path.display(),
        candidates.len(),
        total_lines
    );
    Ok(candidates)
}
