//! Surface mesh generation from [`HeightField`] data.
//!
//! Converts a [`HeightField`] into a Bevy [`Mesh`] with:
//! - `TriangleList` topology
//! - Smooth per-vertex normals (area-weighted average of adjacent face normals)
//! - Colormap UV coordinates (`u` = normalized intensity, for a 1-D lookup texture)

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::heightfield::HeightField;

/// Relief height of a full-intensity cell relative to the longer footprint
/// edge, used when no explicit height scale is set.
const RELIEF_HEIGHT_RATIO: f32 = 0.4;

/// Converts a [`HeightField`] into a Bevy [`Mesh`].
///
/// The mesh covers `[0, cols-1] × [0, rows-1]` in the XZ plane, one vertex
/// per grid cell, with intensities mapped to heights along the Y axis. A
/// cell of intensity 255 sits at `height_scale`; intensity 0 sits on the
/// ground plane.
///
/// # UV Mapping
///
/// `u` is the cell's intensity normalized to the field's own min/max range,
/// `v` is fixed at 0.5. Sampling a 256×1 colormap texture with these
/// coordinates colors the surface by height, darkest cell to brightest.
/// A field with a single intensity everywhere maps to `u = 0`.
///
/// # Example
///
/// ```ignore
/// use relief3d::{HeightField, SurfaceMeshBuilder};
///
/// let field = HeightField::from_path("photo.jpg", None)?;
/// let mesh = SurfaceMeshBuilder::new()
///     .with_height_scale(20.0)
///     .build(&field);
/// ```
#[derive(Default)]
pub struct SurfaceMeshBuilder {
    height_scale: Option<f32>,
}

impl SurfaceMeshBuilder {
    /// Creates a new builder with an automatic height scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the world-space height of a full-intensity (255) cell.
    ///
    /// Clamped to be non-negative; `0.0` flattens the surface into the
    /// ground plane. Unset, the scale is [`SurfaceMeshBuilder::auto_height_scale`].
    pub fn with_height_scale(mut self, height_scale: f32) -> Self {
        self.height_scale = Some(height_scale.max(0.0));
        self
    }

    /// Default height scale for a field: [`RELIEF_HEIGHT_RATIO`] times the
    /// longer footprint edge, so relief stays proportionate at any grid size.
    pub fn auto_height_scale(field: &HeightField) -> f32 {
        let longer = field.cols().max(field.rows()).saturating_sub(1) as f32;
        RELIEF_HEIGHT_RATIO * longer.max(1.0)
    }

    /// Builds the mesh from the given height field, consuming nothing.
    ///
    /// Produces a `TriangleList` mesh with positions, normals, and UV_0.
    ///
    /// # Panics
    ///
    /// Panics if the field dimensions are less than 2×2, as at least one
    /// quad is required to produce valid triangle geometry.
    pub fn build(&self, field: &HeightField) -> Mesh {
        assert!(
            field.cols() >= 2 && field.rows() >= 2,
            "HeightField must be at least 2×2 to generate a surface (got {}×{})",
            field.cols(),
            field.rows()
        );

        let cols = field.cols() as usize;
        let rows = field.rows() as usize;
        let height_scale = self
            .height_scale
            .unwrap_or_else(|| Self::auto_height_scale(field));
        let (lo, hi) = field.intensity_range();
        // Flat fields would divide by zero; the guard maps them all to u = 0.
        let intensity_span = (hi - lo).max(1) as f32;

        let vertex_count = cols * rows;
        let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
        let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

        for row in 0..rows {
            for col in 0..cols {
                let intensity = field.height_at(col as u32, row as u32);
                positions.push([
                    col as f32,
                    intensity as f32 / 255.0 * height_scale,
                    row as f32,
                ]);
                uvs.push([(intensity - lo) as f32 / intensity_span, 0.5]);
            }
        }

        // Build CCW triangle indices (normal pointing +Y when the field is flat).
        // Each quad (col, row) → (col+1, row+1) emits two triangles:
        //   tl──tr
        //   │╲  │     Triangle 1: tl, bl, tr
        //   │ ╲ │     Triangle 2: tr, bl, br
        //   bl──br
        let quad_count = (cols - 1) * (rows - 1);
        let mut indices: Vec<u32> = Vec::with_capacity(quad_count * 6);

        for row in 0..(rows - 1) {
            for col in 0..(cols - 1) {
                let tl = (row * cols + col) as u32;
                let tr = (row * cols + col + 1) as u32;
                let bl = ((row + 1) * cols + col) as u32;
                let br = ((row + 1) * cols + col + 1) as u32;

                indices.push(tl);
                indices.push(bl);
                indices.push(tr);

                indices.push(tr);
                indices.push(bl);
                indices.push(br);
            }
        }

        // Smooth per-vertex normals from the actual triangles: accumulate each
        // face's unnormalized cross product (proportional to its area) at its
        // three corners, then normalize. Image-derived relief is jagged, and
        // area weighting keeps shading faithful to the rendered geometry.
        let mut normals: Vec<Vec3> = vec![Vec3::ZERO; vertex_count];

        for tri in indices.chunks_exact(3) {
            let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let p0 = Vec3::from(positions[i0]);
            let p1 = Vec3::from(positions[i1]);
            let p2 = Vec3::from(positions[i2]);
            let face_normal = (p1 - p0).cross(p2 - p0);
            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        let normals: Vec<[f32; 3]> = normals
            .iter()
            .map(|n| {
                let len = n.length();
                // Degenerate vertex (zero contributions): default to +Y.
                if len > f32::EPSILON {
                    (*n / len).into()
                } else {
                    [0.0, 1.0, 0.0]
                }
            })
            .collect();

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}
