//! Interactive session assembly.
//!
//! [`run_viewer`] loads a height field, builds the surface, and runs the
//! windowed app: surface mesh with a colormap lookup material, an orbiting
//! camera driven by W/A/S/D, and a directional key light. Load failures
//! return before any window is created.

use std::num::NonZeroU32;
use std::path::Path;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

use crate::camera::{OrbitRig, orbit_transform, sync_camera};
use crate::colormap::{Colormap, ramp_to_image};
use crate::heightfield::{HeightField, LoadError};
use crate::input::{DEFAULT_STEP_DEGREES, InputDispatcher, handle_view_keys};
use crate::mesher::SurfaceMeshBuilder;
use crate::view::ViewState;

/// Window title, doubling as the control hint.
const WINDOW_TITLE: &str = "Use W/A/S/D to tilt and rotate";

/// Configuration for an interactive viewing session.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// Explicit downsample factor. `None` derives one from the image size.
    pub downsample_factor: Option<NonZeroU32>,
    /// Surface colormap.
    pub colormap: Colormap,
    /// World height of a full-intensity cell. `None` scales with the footprint.
    pub height_scale: Option<f32>,
    /// Orientation the camera starts at.
    pub initial_view: ViewState,
    /// Degrees of rotation per key press.
    pub step_degrees: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            downsample_factor: None,
            colormap: Colormap::default(),
            height_scale: None,
            initial_view: ViewState::default(),
            step_degrees: DEFAULT_STEP_DEGREES,
        }
    }
}

/// Opens an interactive 3D view of a grayscale image.
///
/// Convenience wrapper over [`run_viewer`] with default options. Blocks until
/// the window is closed.
pub fn create_interactive_3d_map(
    image_path: impl AsRef<Path>,
    downsample_factor: Option<NonZeroU32>,
) -> Result<(), LoadError> {
    run_viewer(
        image_path,
        ViewerOptions {
            downsample_factor,
            ..Default::default()
        },
    )
}

/// Loads `image_path` and runs the viewer app until its window is closed.
///
/// The height field and surface mesh are built up front, before any window
/// exists, so a bad path or image returns an error without flashing a frame.
pub fn run_viewer(image_path: impl AsRef<Path>, options: ViewerOptions) -> Result<(), LoadError> {
    let field = HeightField::from_path(image_path, options.downsample_factor)?;

    let height_scale = options
        .height_scale
        .unwrap_or_else(|| SurfaceMeshBuilder::auto_height_scale(&field));
    let mesh = SurfaceMeshBuilder::new()
        .with_height_scale(height_scale)
        .build(&field);
    let rig = OrbitRig::framing(&field, height_scale);
    let lut = ramp_to_image(options.colormap.ramp());
    let dispatcher =
        InputDispatcher::new(options.initial_view).with_step_degrees(options.step_degrees);

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Event-driven redraw: the surface is static, so only repaint on input.
    .insert_resource(WinitSettings::desktop_app())
    .insert_resource(ClearColor(Color::WHITE))
    .insert_resource(dispatcher)
    .insert_resource(rig)
    .insert_resource(PendingScene {
        mesh: Some(mesh),
        lut: Some(lut),
    })
    .add_systems(Startup, setup_scene)
    .add_systems(Update, (handle_view_keys, sync_camera).chain());

    info!(
        "map generated ({}×{} cells, factor {}), press W/A/S/D to move",
        field.cols(),
        field.rows(),
        field.downsample_factor()
    );

    app.run();
    Ok(())
}

/// Prebuilt scene data staged for [`setup_scene`] to move into asset storage.
#[derive(Resource)]
struct PendingScene {
    mesh: Option<Mesh>,
    lut: Option<Image>,
}

fn setup_scene(
    mut commands: Commands,
    mut pending: ResMut<PendingScene>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    rig: Res<OrbitRig>,
    dispatcher: Res<InputDispatcher>,
) {
    let (Some(mesh), Some(lut)) = (pending.mesh.take(), pending.lut.take()) else {
        return;
    };

    let lut_handle = images.add(lut);
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(lut_handle),
        perceptual_roughness: 1.0,
        // Visible from below when elevation goes negative.
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((Mesh3d(meshes.add(mesh)), MeshMaterial3d(material)));

    commands.spawn((
        Camera3d::default(),
        orbit_transform(&rig, &dispatcher.view()),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(rig.focus + Vec3::new(1.0, 2.0, 1.5) * rig.distance)
            .looking_at(rig.focus, Vec3::Y),
    ));

    commands.remove_resource::<PendingScene>();
}
