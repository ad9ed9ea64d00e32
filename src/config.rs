//! Pipeline tuning constants.
//!
//! These values are empirical quality cuts on stellar detections and are not
//! exposed as command-line flags; the CLI always runs with [`PipelineConfig::default`].
//! Library callers may construct their own configuration, e.g. to tighten the
//! elongation cut for a telescope with strong coma.

/// Quality cuts and grid parameters for reference-star selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Minimum integrated flux (exclusive) for a detection to be considered a star.
    pub min_flux: f32,
    /// Minimum FWHM in pixels (exclusive); rejects hot pixels and cosmic rays.
    pub min_fwhm: f32,
    /// Maximum elongation (exclusive); rejects trails, galaxies and blends.
    pub max_elongation: f32,
    /// Edge length of a grid cell in pixels.
    pub cell_size: u32,
    /// Maximum number of stars kept per grid cell.
    pub per_cell_cap: u32,
    /// Minimum number of selected references required to emit a table; the
    /// plate solver needs at least this many rows to stand a chance.
    pub min_reference_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_flux: 30.0,
            min_fwhm: 1.0,
            max_elongation: 2.0,
            cell_size: 128,
            per_cell_cap: 5,
            min_reference_count: 5,
        }
    }
}
