//! Height-field construction from grayscale images.
//!
//! A [`HeightField`] is the downsampled intensity grid a relief surface is
//! built from. Column and row indices of the grid serve as ground-plane
//! coordinates and the 8-bit luma value at each cell is the height, so a
//! bright pixel becomes a peak and a dark pixel a valley.
//! [`HeightField::from_path`] runs the whole decode, grayscale, downsample
//! pipeline; [`HeightField::from_image`] starts from an already-decoded image.

use std::io;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{GrayImage, ImageError};
use thiserror::Error;

/// Target size for the longer image edge when no downsample factor is given.
const TARGET_MAX_DIM: u32 = 100;

/// Errors from loading or downsampling a height-map image.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file does not exist. Callers may treat this as a soft failure.
    #[error("image file not found: {0:?}")]
    NotFound(PathBuf),
    /// The file exists but could not be read.
    #[error("failed to read image {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// The file was read but is not a decodable image.
    #[error("failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: ImageError,
    },
    /// Downsampling left fewer than 2×2 cells, not enough for one surface quad.
    #[error("downsampled size {cols}×{rows} is below the 2×2 minimum (factor {factor})")]
    TooSmall {
        cols: u32,
        rows: u32,
        factor: u32,
    },
}

/// A row-major grid of 8-bit heights sampled from a grayscale image.
#[derive(Debug, Clone)]
pub struct HeightField {
    cols: u32,
    rows: u32,
    factor: NonZeroU32,
    heights: Vec<u8>,
}

impl HeightField {
    /// Loads an image, converts it to grayscale, and downsamples it.
    ///
    /// When `factor` is `None` it is derived with [`HeightField::default_factor`]
    /// from the full-resolution dimensions.
    pub fn from_path(
        path: impl AsRef<Path>,
        factor: Option<NonZeroU32>,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| match err {
            ImageError::IoError(source) if source.kind() == io::ErrorKind::NotFound => {
                LoadError::NotFound(path.to_path_buf())
            }
            ImageError::IoError(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => LoadError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let gray = img.into_luma8();
        let factor = factor.unwrap_or_else(|| Self::default_factor(gray.width(), gray.height()));
        Self::from_image(&gray, factor)
    }

    /// Downsamples a grayscale image into a height field.
    ///
    /// Output dimensions are the integer quotients `width / factor` and
    /// `height / factor`; resampling is bilinear. A factor of 1 copies pixels
    /// through untouched. Fails with [`LoadError::TooSmall`] when either
    /// quotient drops below 2.
    pub fn from_image(img: &GrayImage, factor: NonZeroU32) -> Result<Self, LoadError> {
        let cols = img.width() / factor.get();
        let rows = img.height() / factor.get();
        if cols < 2 || rows < 2 {
            return Err(LoadError::TooSmall {
                cols,
                rows,
                factor: factor.get(),
            });
        }

        let heights = if factor.get() == 1 {
            img.as_raw().clone()
        } else {
            imageops::resize(img, cols, rows, FilterType::Triangle).into_raw()
        };

        Ok(Self {
            cols,
            rows,
            factor,
            heights,
        })
    }

    /// Creates a height field from raw row-major data (for testing).
    pub fn from_raw(heights: Vec<u8>, cols: u32, rows: u32) -> Self {
        assert_eq!(heights.len(), (cols * rows) as usize);
        Self {
            cols,
            rows,
            factor: NonZeroU32::MIN,
            heights,
        }
    }

    /// Downsample factor that keeps the longer edge at roughly
    /// [`TARGET_MAX_DIM`] cells: `max(1, max_dim / 100)`.
    pub fn default_factor(width: u32, height: u32) -> NonZeroU32 {
        NonZeroU32::new(width.max(height) / TARGET_MAX_DIM).unwrap_or(NonZeroU32::MIN)
    }

    /// Number of grid columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of grid rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The downsample factor this field was built with.
    pub fn downsample_factor(&self) -> NonZeroU32 {
        self.factor
    }

    /// Height (intensity) at a grid cell.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is out of bounds.
    pub fn height_at(&self, col: u32, row: u32) -> u8 {
        assert!(col < self.cols && row < self.rows);
        self.heights[(row * self.cols + col) as usize]
    }

    /// Raw row-major height data.
    pub fn heights(&self) -> &[u8] {
        &self.heights
    }

    /// Minimum and maximum intensity present in the field.
    pub fn intensity_range(&self) -> (u8, u8) {
        let min = self.heights.iter().copied().min().unwrap_or(0);
        let max = self.heights.iter().copied().max().unwrap_or(0);
        (min, max)
    }
}
