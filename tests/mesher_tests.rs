use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;
use relief3d::{HeightField, SurfaceMeshBuilder};

fn flat_field(cols: u32, rows: u32, value: u8) -> HeightField {
    HeightField::from_raw(vec![value; (cols * rows) as usize], cols, rows)
}

fn ramp_field(cols: u32, rows: u32) -> HeightField {
    // Intensity rises 0..=255 along the column axis.
    let mut heights = Vec::with_capacity((cols * rows) as usize);
    for _row in 0..rows {
        for col in 0..cols {
            heights.push((col * 255 / (cols - 1)) as u8);
        }
    }
    HeightField::from_raw(heights, cols, rows)
}

fn positions_of(mesh: &Mesh) -> Vec<[f32; 3]> {
    mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        .expect("mesh must have positions")
        .as_float3()
        .expect("positions must be Float32x3")
        .to_vec()
}

fn uvs_of(mesh: &Mesh) -> Vec<[f32; 2]> {
    let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0) else {
        panic!("UV_0 must be Float32x2");
    };
    uvs.clone()
}

#[test]
fn vertex_count_matches_dimensions() {
    let field = flat_field(8, 8, 0);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    assert_eq!(mesh.count_vertices(), 8 * 8);
}

#[test]
fn index_count_matches_quads() {
    let field = flat_field(5, 7, 0);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    // (cols-1)*(rows-1) quads × 6 indices each
    let expected = (5 - 1) * (7 - 1) * 6;
    assert_eq!(
        mesh.indices().expect("mesh must have indices").len(),
        expected
    );
}

#[test]
fn has_all_required_attributes() {
    let field = flat_field(4, 4, 100);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    assert!(
        mesh.attribute(Mesh::ATTRIBUTE_POSITION).is_some(),
        "missing POSITION"
    );
    assert!(
        mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some(),
        "missing NORMAL"
    );
    assert!(
        mesh.attribute(Mesh::ATTRIBUTE_UV_0).is_some(),
        "missing UV_0"
    );
}

#[test]
fn flat_normals_point_up() {
    let field = flat_field(4, 4, 128);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    let normals = mesh
        .attribute(Mesh::ATTRIBUTE_NORMAL)
        .expect("mesh must have normals")
        .as_float3()
        .expect("normals must be Float32x3");
    for n in normals {
        assert!(
            n[1] > 0.99,
            "flat surface normal y should be ~1.0, got {:?}",
            n
        );
    }
}

#[test]
fn ramp_normals_have_x_component() {
    let field = ramp_field(8, 8);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    let normals = mesh
        .attribute(Mesh::ATTRIBUTE_NORMAL)
        .unwrap()
        .as_float3()
        .unwrap();
    // Interior vertices on a slope along X must have a non-zero X normal component
    let interior = normals[1 * 8 + 4]; // row=1, col=4
    assert!(
        interior[0].abs() > 0.01,
        "ramp normal should have X component, got {:?}",
        interior
    );
}

#[test]
fn positions_encode_intensity_as_height() {
    let mut heights = vec![0u8; 9];
    heights[4] = 255; // center of a 3×3 grid
    let field = HeightField::from_raw(heights, 3, 3);
    let mesh = SurfaceMeshBuilder::new()
        .with_height_scale(5.0)
        .build(&field);

    let positions = positions_of(&mesh);

    // Vertex at (col=1, row=1) is index row*cols+col = 1*3+1 = 4
    let center = positions[4];
    assert_eq!(center[0], 1.0, "x = column index");
    assert_eq!(center[1], 5.0, "full intensity reaches the height scale");
    assert_eq!(center[2], 1.0, "z = row index");
}

#[test]
fn positions_origin_is_zero() {
    let field = flat_field(4, 4, 0);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    let positions = positions_of(&mesh);
    assert_eq!(positions[0], [0.0, 0.0, 0.0]);
}

#[test]
fn positions_far_corner_matches_grid() {
    // 4×6 grid → far corner at (cols-1, _, rows-1) = (3, _, 5)
    let field = flat_field(4, 6, 0);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    let positions = positions_of(&mesh);
    let last = *positions.last().unwrap();
    assert_eq!(last[0], 3.0, "far corner x");
    assert_eq!(last[2], 5.0, "far corner z");
}

#[test]
fn auto_height_scale_tracks_longer_edge() {
    let field = flat_field(6, 4, 0);
    let auto = SurfaceMeshBuilder::auto_height_scale(&field);
    assert!(
        (auto - 2.0).abs() < 1e-6,
        "0.4 × longer edge (5), got {auto}"
    );
}

#[test]
fn auto_height_scale_applies_to_positions() {
    let field = flat_field(4, 4, 255);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    let positions = positions_of(&mesh);
    // longer edge 3 → scale 1.2, and every cell is at full intensity
    for p in &positions {
        assert!(
            (p[1] - 1.2).abs() < 1e-5,
            "expected y = 1.2, got {}",
            p[1]
        );
    }
}

#[test]
fn uv_u_is_normalized_intensity() {
    let field = ramp_field(8, 2);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    let uvs = uvs_of(&mesh);

    assert_eq!(uvs[0][0], 0.0, "darkest cell maps to u = 0");
    assert_eq!(uvs[7][0], 1.0, "brightest cell maps to u = 1");
    for uv in &uvs {
        assert!(
            (0.0..=1.0).contains(&uv[0]),
            "u out of range: {}",
            uv[0]
        );
        assert_eq!(uv[1], 0.5, "v is fixed at the LUT row center");
    }
}

#[test]
fn flat_field_uvs_collapse_to_zero() {
    let field = flat_field(4, 4, 200);
    let mesh = SurfaceMeshBuilder::new().build(&field);
    for uv in uvs_of(&mesh) {
        assert_eq!(uv[0], 0.0, "single-intensity field maps to u = 0");
    }
}

#[test]
#[should_panic]
fn panics_on_1x1_field() {
    let field = HeightField::from_raw(vec![0], 1, 1);
    SurfaceMeshBuilder::new().build(&field);
}
