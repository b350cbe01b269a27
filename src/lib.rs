//! Interactive 3D relief viewer for grayscale height-map images.
//!
//! Treats any image as a height map: pixels are converted to grayscale,
//! downsampled to a manageable grid, and extruded into a 3D surface where
//! bright pixels become peaks. The surface is colored by height through a
//! colormap lookup texture and viewed with an orbiting camera driven by
//! discrete W/A/S/D presses.
//!
//! # Features
//!
//! - **Height fields**: Decode, grayscale, and downsample an image into a
//!   [`HeightField`] grid via [`HeightField::from_path`].
//! - **Surface meshes**: Convert a field to a Bevy [`Mesh`](bevy::prelude::Mesh)
//!   with smooth normals and colormap UVs via [`SurfaceMeshBuilder`].
//! - **Colormaps**: Bake viridis, magma, or grayscale ramps into lookup
//!   textures via [`colormap`].
//! - **Interactive sessions**: One-call windowed viewing via
//!   [`create_interactive_3d_map`], or [`run_viewer`] with [`ViewerOptions`].
//!
//! # Example
//!
//! ```ignore
//! use relief3d::create_interactive_3d_map;
//!
//! fn main() {
//!     // Blocks until the window is closed; W/A/S/D tilts and rotates.
//!     if let Err(err) = create_interactive_3d_map("photo.jpg", None) {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

pub mod camera;
pub mod colormap;
pub mod heightfield;
pub mod input;
pub mod mesher;
pub mod view;
pub mod viewer;

pub use colormap::Colormap;
pub use heightfield::{HeightField, LoadError};
pub use input::{DEFAULT_STEP_DEGREES, InputDispatcher};
pub use mesher::SurfaceMeshBuilder;
pub use view::{ELEVATION_MAX, ELEVATION_MIN, ViewState};
pub use viewer::{ViewerOptions, create_interactive_3d_map, run_viewer};
