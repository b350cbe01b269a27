//! Height-to-color ramps and their GPU lookup textures.
//!
//! The surface is colored by intensity: the mesh stores a normalized height in
//! its `u` texture coordinate and samples a 256×1 lookup texture baked from a
//! [`ColorRamp`]. Ramps are defined as evenly-spaced sRGB control points
//! sampled from the matplotlib originals and interpolated linearly.

use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Width of the baked lookup texture in texels.
pub const LUT_WIDTH: u32 = 256;

/// A continuous color ramp defined by evenly-spaced sRGB control points.
pub struct ColorRamp {
    points: &'static [[f32; 3]],
}

impl ColorRamp {
    /// Sample the ramp at parameter `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let n = self.points.len();
        if n == 0 {
            return Color::BLACK;
        }
        if n == 1 {
            let p = self.points[0];
            return Color::srgb(p[0], p[1], p[2]);
        }
        let max_idx = (n - 1) as f32;
        let scaled = t * max_idx;
        let lo = (scaled as usize).min(n - 2);
        let hi = lo + 1;
        let frac = scaled - lo as f32;
        let a = self.points[lo];
        let b = self.points[hi];
        Color::srgb(
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        )
    }
}

/// Viridis: perceptually uniform dark-purple-to-yellow, colorblind-safe.
/// The default surface ramp.
pub static VIRIDIS: ColorRamp = ColorRamp {
    points: &[
        [0.267, 0.005, 0.329], // 0 - dark purple
        [0.282, 0.121, 0.442],
        [0.253, 0.265, 0.530],
        [0.207, 0.372, 0.553],
        [0.164, 0.471, 0.558],
        [0.128, 0.567, 0.551], // 0.5 - teal
        [0.135, 0.659, 0.518],
        [0.267, 0.749, 0.441],
        [0.478, 0.821, 0.318],
        [0.741, 0.873, 0.150],
        [0.993, 0.906, 0.144], // 1 - bright yellow
    ],
};

/// Magma: perceptually uniform black-to-cream through magenta.
pub static MAGMA: ColorRamp = ColorRamp {
    points: &[
        [0.001, 0.000, 0.016], // 0 - near-black
        [0.113, 0.065, 0.277],
        [0.318, 0.072, 0.485],
        [0.517, 0.148, 0.508],
        [0.718, 0.215, 0.475], // 0.5 - magenta
        [0.880, 0.318, 0.394],
        [0.988, 0.537, 0.380],
        [0.996, 0.763, 0.530],
        [0.988, 0.992, 0.749], // 1 - pale cream
    ],
};

/// Direct intensity display: black to white.
pub static GRAYSCALE: ColorRamp = ColorRamp {
    points: &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
};

/// Selectable surface colormap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Viridis,
    Magma,
    Grayscale,
}

impl Colormap {
    /// The ramp this colormap samples.
    pub fn ramp(&self) -> &'static ColorRamp {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Magma => &MAGMA,
            Colormap::Grayscale => &GRAYSCALE,
        }
    }
}

/// Bakes a ramp into a 256×1 RGBA8 sRGB lookup texture.
///
/// Texel `i` holds the ramp sampled at `i / 255`. The sampler clamps to edge
/// so `u` coordinates at exactly 0 or 1 pin to the ramp endpoints instead of
/// bleeding across.
pub fn ramp_to_image(ramp: &ColorRamp) -> Image {
    let mut raw: Vec<u8> = Vec::with_capacity(LUT_WIDTH as usize * 4);
    for i in 0..LUT_WIDTH {
        let t = i as f32 / (LUT_WIDTH - 1) as f32;
        let c = ramp.sample(t).to_srgba();
        raw.push((c.red * 255.0).round() as u8);
        raw.push((c.green * 255.0).round() as u8);
        raw.push((c.blue * 255.0).round() as u8);
        raw.push(255);
    }

    let mut image = Image::new(
        Extent3d {
            width: LUT_WIDTH,
            height: 1,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        raw,
        TextureFormat::Rgba8UnormSrgb,
        default(),
    );

    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::ClampToEdge,
        address_mode_v: ImageAddressMode::ClampToEdge,
        ..default()
    });

    image
}
