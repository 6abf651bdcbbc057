/// Read-only, row-major 2D view over per-cell values.
pub trait RasterView {
    type Cell: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Cell];

    #[inline]
    fn get(&self, x: usize, y: usize) -> Self::Cell {
        self.row(y)[x]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { raster: self, y: 0 }
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

pub struct Rows<'a, R: ?Sized + RasterView> {
    raster: &'a R,
    y: usize,
}

impl<'a, R: RasterView> Iterator for Rows<'a, R> {
    type Item = &'a [R::Cell];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.raster.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.raster.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.raster.height().saturating_sub(self.y);
        (left, Some(left))
    }
}

impl<'a, R: RasterView> ExactSizeIterator for Rows<'a, R> {}
