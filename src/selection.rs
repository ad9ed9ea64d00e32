//! Spatially distributed reference-star selection.
//!
//! Plate solving works best when reference stars cover the whole frame, so
//! instead of simply taking the N brightest detections the image is divided
//! into a uniform grid of square cells and each cell keeps at most
//! [`PipelineConfig::per_cell_cap`] stars. Candidates arrive brightest-first,
//! so the cap keeps the brightest few stars per cell.

use crate::catalog::CatalogRecord;
use crate::config::PipelineConfig;

/// Select a spatially distributed subset of `candidates` for an image of
/// `width` x `height` pixels.
///
/// `candidates` must already be sorted brightest-first (as produced by
/// [`crate::catalog::load_catalog`]); the output preserves that order.
///
/// Images smaller than four grid cells skip spatial filtering entirely and
/// return every candidate: with so few cells the grid says nothing useful
/// about distribution.
///
/// The grid is centered on the image: the margin `width % cell_size` is split
/// evenly between the left and right edges (same for top/bottom). Cell
/// indices are computed by truncating division, so the sub-cell left margin
/// folds into column 0. Candidates whose index lands outside the grid
/// (including exactly on the far boundary, `i == cols` or `j == rows`) are
/// clipped: discarded without consuming any cell budget.
pub fn select_references(
    candidates: &[CatalogRecord],
    width: u32,
    height: u32,
    config: &PipelineConfig,
) -> Vec<CatalogRecord> {
    let cell = config.cell_size;
    let cols = width.div_ceil(cell) as i64;
    let rows = height.div_ceil(cell) as i64;

    if cols * rows < 4 {
        return candidates.to_vec();
    }

    let x0 = (width % cell) / 2;
    let y0 = (height % cell) / 2;

    // Per-cell occupancy, row-major (j * cols + i).
    let mut occupancy = vec![0_u32; (cols * rows) as usize];
    let mut references = Vec::new();

    for record in candidates {
        let i = ((record.x - x0 as f32) / cell as f32) as i64;
        let j = ((record.y - y0 as f32) / cell as f32) as i64;
        if i < 0 || j < 0 || i >= cols || j >= rows {
            continue;
        }
        let count = &mut occupancy[(j * cols + i) as usize];
        if *count < config.per_cell_cap {
            *count += 1;
            references.push(*record);
        }
    }

    references
}
