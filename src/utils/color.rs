//! Color utilities for the seasonal palette and emissive sky materials.
//!
//! The journey core works on plain [`Rgb`] records: sRGB components in
//! `[0, 1]`, constructed from the `0xRRGGBB` literals the palette tables are
//! authored in. Interpolation happens component-wise in that authored space,
//! which is what keeps blended palettes faithful to the source values.
//!
//! The Bevy-facing helpers at the bottom convert [`Rgb`] into clear colors,
//! light colors, and emissive materials with luminance-scaled bloom.

use bevy::prelude::*;

/// An sRGB color with components in `[0, 1]`.
///
/// This is deliberately not a Bevy color type: the palette core is pure data
/// and should stay independent of the render-side color spaces. Conversion
/// happens once, at the consumer boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Self = Self::from_u32(0xffffff);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal, the form the season tables
    /// are authored in.
    pub const fn from_u32(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Component-wise linear interpolation toward `to`.
    ///
    /// The `t <= 0` / `t >= 1` shortcuts guarantee exact endpoint equality,
    /// which the pure-season passthrough relies on.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return to;
        }

        Self {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
        }
    }

    /// Perceived brightness per ITU-R BT.601.
    pub fn luminance(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    pub fn to_bevy(self) -> Color {
        Color::srgb(self.r, self.g, self.b)
    }

    pub fn to_linear(self) -> LinearRgba {
        LinearRgba::from(self.to_bevy())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_bevy()
    }
}

/// Applies luminance-based intensity scaling for bloom effects.
///
/// Brighter colors receive proportionally more enhancement, so the sun blooms
/// harder than a dim winter moon. Output components may exceed 1.0; that is
/// the point.
#[must_use]
pub fn intensify_for_bloom(color: LinearRgba, intensity: f32) -> LinearRgba {
    let luminance = 0.299 * color.red + 0.587 * color.green + 0.114 * color.blue;
    let scale = intensity * luminance + 1.0;
    LinearRgba::rgb(color.red * scale, color.green * scale, color.blue * scale)
}

/// Creates an emissive, alpha-blended `StandardMaterial` for a glowing sky
/// body.
///
/// The base color comes from the palette; the emissive component is the glow
/// color pushed past 1.0 by [`intensify_for_bloom`] so the HDR pipeline picks
/// it up. Unlit, because sky bodies are light sources, not lit surfaces.
pub fn emissive_material(
    materials: &mut Assets<StandardMaterial>,
    base: Rgb,
    glow: Rgb,
    bloom_intensity: f32,
) -> Handle<StandardMaterial> {
    let emissive = intensify_for_bloom(glow.to_linear(), bloom_intensity);

    materials.add(StandardMaterial {
        base_color: base.to_bevy(),
        metallic: 0.0,
        reflectance: 0.0,
        emissive,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}
