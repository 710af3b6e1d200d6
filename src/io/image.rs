//! PNG export of the staggered lattice layout with transparent background

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    BACKGROUND_COLOR, CELL_WIDTH_PX, EMPTY_TILE_COLOR, HALF_ROW_HEIGHT_PX, IMAGE_MARGIN_PX,
    MAX_IMAGE_PIXELS, OCCUPIED_COLOR, ROBOT_COLOR,
};
use crate::io::error::{LatticeError, Result, invalid_parameter};
use crate::io::render::Raster;
use crate::lattice::Lattice;

// Top-left pixel of a cell covering raster half-rows `row` and `row + 1`
const fn cell_origin(row: usize, col: usize) -> (u32, u32) {
    (
        IMAGE_MARGIN_PX + col as u32 * CELL_WIDTH_PX,
        IMAGE_MARGIN_PX + row as u32 * HALF_ROW_HEIGHT_PX,
    )
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: [u8; 4]) {
    for py in y..(y + height).min(img.height()) {
        for px in x..(x + width).min(img.width()) {
            img.put_pixel(px, py, Rgba(color));
        }
    }
}

/// Draw the lattice into an RGBA image
///
/// Each tile is a block one column wide and two half-rows tall, inset by one
/// pixel so neighbours stay distinguishable. The robot is a smaller block in
/// the middle of its cell.
///
/// # Errors
///
/// Returns `LatticeError::EmptyLattice` if the lattice holds no tiles, and
/// `LatticeError::InvalidParameter` if the raster or the image would exceed
/// `MAX_RASTER_CELLS` or `MAX_IMAGE_PIXELS`.
pub fn draw_lattice(lattice: &Lattice) -> Result<RgbaImage> {
    if lattice.tile_count() == 0 {
        return Err(LatticeError::EmptyLattice);
    }

    let raster = Raster::from_lattice(lattice)?;
    let (rows, cols) = raster.cells.dim();
    let width = 2 * IMAGE_MARGIN_PX + cols as u32 * CELL_WIDTH_PX;
    let height = 2 * IMAGE_MARGIN_PX + (rows as u32 + 1) * HALF_ROW_HEIGHT_PX;
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_IMAGE_PIXELS {
        return Err(invalid_parameter(
            "image",
            &format!("{width}x{height}"),
            &format!("at most {MAX_IMAGE_PIXELS} pixels"),
        ));
    }

    let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    for (coord, tile) in lattice.tiles() {
        let Some((row, col)) = raster.index_of(coord) else {
            continue;
        };
        let (x, y) = cell_origin(row, col);
        let color = if tile.is_occupied() {
            OCCUPIED_COLOR
        } else {
            EMPTY_TILE_COLOR
        };
        fill_rect(
            &mut img,
            x + 1,
            y + 1,
            CELL_WIDTH_PX - 2,
            2 * HALF_ROW_HEIGHT_PX - 2,
            color,
        );
    }

    if let Some((row, col)) = raster.index_of(lattice.robot_position()) {
        let (x, y) = cell_origin(row, col);
        let inset_x = CELL_WIDTH_PX / 3;
        let inset_y = HALF_ROW_HEIGHT_PX * 2 / 3;
        fill_rect(
            &mut img,
            x + inset_x,
            y + inset_y,
            CELL_WIDTH_PX - 2 * inset_x,
            2 * HALF_ROW_HEIGHT_PX - 2 * inset_y,
            ROBOT_COLOR,
        );
    }

    Ok(img)
}

/// Export the lattice as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The lattice holds no tiles
/// - The drawing would exceed the raster or pixel limits
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_lattice_as_png(lattice: &Lattice, output_path: &Path) -> Result<()> {
    let img = draw_lattice(lattice)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| LatticeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| LatticeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
