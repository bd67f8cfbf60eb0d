use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use image::{GrayImage, ImageFormat, Luma};

use crate::{internal_util::gray_level, EscapeGrid};

/// Maximum sample value declared in the PGM header.
pub const PGM_MAXVAL: u8 = u8::MAX;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("cannot create output file {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("failed to write raster data: {0}")]
    Write(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("grid of {width}x{height} exceeds the image size limit")]
    Dimensions { width: usize, height: usize },
}

/// Write `grid` as a plain (P2) grayscale PGM.
/// Every sample is followed by a space and every row ends with a newline.
pub fn write_pgm<W: Write>(mut writer: W, grid: &EscapeGrid) -> Result<(), RasterError> {
    writeln!(writer, "P2")?;
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    writeln!(writer, "{}", PGM_MAXVAL)?;

    for row in grid.rows() {
        for &count in row {
            write!(writer, "{} ", gray_level(count, grid.max_iter()))?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;

    Ok(())
}

pub fn save_pgm(path: impl AsRef<Path>, grid: &EscapeGrid) -> Result<(), RasterError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| RasterError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_pgm(BufWriter::new(file), grid)?;
    tracing::debug!(path = %path.display(), "saved pgm");

    Ok(())
}

pub fn to_gray_image(grid: &EscapeGrid) -> Result<GrayImage, RasterError> {
    let (width, height) = image_dimensions(grid.width(), grid.height())?;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let count = grid.get(y as usize, x as usize).unwrap_or(0);
        Luma([gray_level(count, grid.max_iter())])
    }))
}

fn image_dimensions(width: usize, height: usize) -> Result<(u32, u32), RasterError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RasterError::Dimensions { width, height }),
    }
}

pub fn save_png(path: impl AsRef<Path>, grid: &EscapeGrid) -> Result<(), RasterError> {
    let path = path.as_ref();
    let image = to_gray_image(grid)?;
    let file = File::create(path).map_err(|source| RasterError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, ImageFormat::Png)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), "saved png");

    Ok(())
}
