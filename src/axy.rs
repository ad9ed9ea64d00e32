//! FITS coordinate table output.
//!
//! astrometry.net consumes star positions as a FITS binary table with two
//! single-precision columns named `X` and `Y`. The writer emits one row per
//! reference star in the order given, which downstream tools interpret as
//! brightest-first.

use std::fs;
use std::path::Path;

use fitsio::tables::{ColumnDataType, ColumnDescription};
use fitsio::FitsFile;

use crate::catalog::CatalogRecord;

/// Extension name of the emitted binary table.
const TABLE_EXTNAME: &str = "SOURCES";

/// Failure while creating, writing or reading a coordinate table.
#[derive(Debug, thiserror::Error)]
pub enum AxyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("FITS error: {0}")]
    Fits(#[from] fitsio::errors::Error),
}

/// Write `references` to a FITS binary table at `path`.
///
/// An existing file at `path` is replaced (cfitsio refuses to overwrite, so
/// it is removed first). On failure the table may be partially written; the
/// caller decides whether to retry or clean up.
pub fn write_axy(references: &[CatalogRecord], path: &Path) -> Result<(), AxyError> {
    if path.exists() {
        fs::remove_file(path)?;
    }

    let xs: Vec<f32> = references.iter().map(|r| r.x).collect();
    let ys: Vec<f32> = references.iter().map(|r| r.y).collect();

    let mut fptr = FitsFile::create(path).open()?;
    let columns = [
        ColumnDescription::new("X")
            .with_type(ColumnDataType::Float)
            .create()?,
        ColumnDescription::new("Y")
            .with_type(ColumnDataType::Float)
            .create()?,
    ];
    let hdu = fptr.create_table(TABLE_EXTNAME, &columns)?;
    let hdu = hdu.write_col(&mut fptr, "X", &xs)?;
    hdu.write_col(&mut fptr, "Y", &ys)?;

    Ok(())
}

/// Read the `X`/`Y` columns of a coordinate table back as pairs, in row order.
///
/// Intended for verifying emitted tables; the plate solver reads the file
/// directly.
pub fn read_axy(path: &Path) -> Result<Vec<(f32, f32)>, AxyError> {
    let mut fptr = FitsFile::open(path)?;
    let hdu = fptr.hdu(TABLE_EXTNAME)?;
    let xs: Vec<f32> = hdu.read_col(&mut fptr, "X")?;
    let ys: Vec<f32> = hdu.read_col(&mut fptr, "Y")?;
    Ok(xs.into_iter().zip(ys).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn record_at(x: f32, y: f32) -> CatalogRecord {
        CatalogRecord {
            x,
            y,
            flux: 100.0,
            fwhm: 2.5,
            elongation: 1.1,
        }
    }

    #[test]
    fn round_trip_preserves_coordinates_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.axy");
        let references = [record_at(1.0, 2.0), record_at(3.0, 4.0)];

        write_axy(&references, &path).unwrap();
        let rows = read_axy(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_relative_eq!(rows[0].0, 1.0);
        assert_relative_eq!(rows[0].1, 2.0);
        assert_relative_eq!(rows[1].0, 3.0);
        assert_relative_eq!(rows[1].1, 4.0);
    }

    #[test]
    fn rewriting_replaces_the_previous_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.axy");

        let first = [record_at(1.0, 1.0), record_at(2.0, 2.0), record_at(3.0, 3.0)];
        write_axy(&first, &path).unwrap();

        let second = [record_at(9.0, 8.0)];
        write_axy(&second, &path).unwrap();

        let rows = read_axy(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_relative_eq!(rows[0].0, 9.0);
        assert_relative_eq!(rows[0].1, 8.0);
    }

    #[test]
    fn empty_reference_list_writes_an_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.axy");
        write_axy(&[], &path).unwrap();
        assert!(read_axy(&path).unwrap().is_empty());
    }
}
