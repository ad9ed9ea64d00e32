//! End-to-end pipeline driver.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::axy::write_axy;
use crate::catalog::load_catalog;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::selection::select_references;

/// Run the full catalog-to-axy pipeline for one image.
///
/// Loads the catalog at `catalog_path`, selects references for an image of
/// `width` x `height` pixels, and writes the coordinate table next to the
/// catalog with its extension replaced by `axy`. Returns the output path.
///
/// No output file is created unless at least
/// [`PipelineConfig::min_reference_count`] references were selected.
pub fn run(
    catalog_path: &Path,
    width: u32,
    height: u32,
    config: &PipelineConfig,
) -> Result<PathBuf, PipelineError> {
    let candidates = load_catalog(catalog_path, config)?;
    info!(
        "loaded {} candidate stars from {}",
        candidates.len(),
        catalog_path.display()
    );

    let references = select_references(&candidates, width, height, config);
    info!(
        "selected {} reference stars for {}x{} image",
        references.len(),
        width,
        height
    );

    if references.len() < config.min_reference_count {
        warn!(
            "only {} reference stars selected ({} required); not writing output",
            references.len(),
            config.min_reference_count
        );
        return Err(PipelineError::InsufficientReferences {
            selected: references.len(),
            required: config.min_reference_count,
        });
    }

    let output_path = catalog_path.with_extension("axy");
    write_axy(&references, &output_path).map_err(|source| PipelineError::TableWrite {
        path: output_path.clone(),
        source,
    })?;
    info!("wrote coordinate table {}", output_path.display());

    Ok(output_path)
}
