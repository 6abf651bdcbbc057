//! Reshape a flat primality sequence into fixed-width rows.
//!
//! Rows are taken in index order. A trailing run shorter than `width` never
//! forms a row, so the result always has `floor(len / width)` rows.

use crate::error::GridError;
use crate::raster::RasterView;

/// `height` rows of `width` booleans, stored row-major in one buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMatrix {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GridMatrix {
    /// Copies rows out into nested vectors, row 0 first.
    pub fn into_rows(self) -> Vec<Vec<bool>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.width).map(<[bool]>::to_vec).collect()
    }

    /// Row-major cells, `width * height` long.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Number of `true` cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl RasterView for GridMatrix {
    type Cell = bool;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }
}

/// Folds `values` into rows of `width`, dropping an incomplete last row.
///
/// The only rejected input is `width == 0`.
pub fn fold(values: &[bool], width: usize) -> Result<GridMatrix, GridError> {
    if width == 0 {
        return Err(GridError::InvalidArgument(
            "fold width must be positive".to_string(),
        ));
    }
    let height = values.len() / width;
    let cells = values[..height * width].to_vec();
    Ok(GridMatrix {
        width,
        height,
        cells,
    })
}
