//! Prime wallpapers: mark which of `1..=W*H` are prime on a `W x H` grid
//! (row-major, cell `(x, y)` is `y * W + x + 1`) and paint the result.
//!
//! ```no_run
//! use primewp::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = PrimeGrid::generate(320, 200, SieveBound::Inclusive)?;
//! let palette = Palette {
//!     foreground: parse_color("Gold")?,
//!     background: parse_color("#101010")?,
//! };
//! let image = render(&grid.matrix, &palette);
//! image.save("primes.png")?;
//! # Ok(())
//! # }
//! ```

// Core
pub mod error;
pub mod fold;
pub mod grid;
pub mod raster;
pub mod sieve;

// Driver-side collaborators
pub mod color;
pub mod config;
pub mod io;
pub mod render;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{ColorError, GridError};
pub use crate::fold::{fold, GridMatrix};
pub use crate::grid::{GridSummary, PrimeGrid};
pub use crate::sieve::{sieve, PrimalityTable, SieveBound};

pub mod prelude {
    pub use crate::color::{parse_color, Color};
    pub use crate::raster::RasterView;
    pub use crate::render::{render, Palette};
    pub use crate::{GridMatrix, PrimeGrid, SieveBound};
}
