//! Per-pixel CRT shading: barrel distortion, tube-face clip, phosphor
//! tint with bloom, scanline and aperture-grille modulation, vignette.
//!
//! [`shade`] is pure and total: every real input, including non-positive
//! intensity and coordinates on the exact boundary, maps to a defined
//! RGBA value. Output channels are not clamped to `[0,1]`.

use crate::{
    core::{LinearRgb, LinearRgba, Vec2, luma_bt601},
    sampler::Sampler,
};

/// Barrel displacement per unit of squared centered radius.
pub const DISTORTION: f32 = 0.04;

/// Tint the image luma is pulled toward, a desaturated green.
pub const PHOSPHOR_TINT: LinearRgb = [0.4, 1.0, 0.5];

/// Fraction of the original color replaced by the tinted luma.
pub const PHOSPHOR_MIX: f32 = 0.5;

/// Weight of the cubic-luma bloom term.
pub const BLOOM_STRENGTH: f32 = 0.6;

/// Scanline angular frequency, radians per unit `v`. Fixed; not derived
/// from the output resolution.
pub const SCANLINE_FREQ: f32 = 1200.0;

/// Peak scanline darkening subtracted from each channel.
pub const SCANLINE_DEPTH: f32 = 0.12;

/// Aperture-grille angular frequency, radians per unit `u`.
pub const GRILLE_FREQ: f32 = 2000.0;

/// Grille modulation depth around a 0.95 base attenuation.
pub const GRILLE_DEPTH: f32 = 0.05;

/// Corner darkening per unit of squared centered radius.
pub const VIGNETTE_STRENGTH: f32 = 0.45;

/// Default output intensity multiplier.
pub const DEFAULT_INTENSITY: f32 = 1.5;

/// Color emitted for coordinates the barrel curve pushes off the tube
/// face: opaque black.
pub const OFF_TUBE: LinearRgba = [0.0, 0.0, 0.0, 1.0];

/// Tunable filter parameters. Everything else is fixed calibration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CrtParams {
    /// Final multiplier on the shaded color. Non-positive values are
    /// accepted and darken or invert the output rather than erroring.
    #[serde(default = "default_intensity")]
    pub intensity: f32,
}

impl Default for CrtParams {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
        }
    }
}

fn default_intensity() -> f32 {
    DEFAULT_INTENSITY
}

/// Remap `uv` through the faceplate barrel curve.
///
/// Returns the displaced sampling coordinate together with the centered
/// coordinate `2*uv - 1`, which the vignette stage reuses undistorted.
pub fn distort(uv: Vec2) -> (Vec2, Vec2) {
    let centered = uv * 2.0 - Vec2::new(1.0, 1.0);
    let r2 = centered.dot(centered);
    (uv + centered * (r2 * DISTORTION), centered)
}

/// Boundary values of exactly 0.0 or 1.0 count as on the tube face.
fn off_tube(uv: Vec2) -> bool {
    uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0
}

/// Phosphor stage: blend toward tinted luma, then add cubic-luma bloom.
fn phosphor(texel: LinearRgba) -> LinearRgb {
    let mut color = [texel[0], texel[1], texel[2]];
    let brightness = luma_bt601(color);

    for (c, tint) in color.iter_mut().zip(PHOSPHOR_TINT) {
        *c += (tint * brightness - *c) * PHOSPHOR_MIX;
    }

    let bloom = brightness * brightness * brightness * BLOOM_STRENGTH;
    for c in &mut color {
        *c += bloom;
    }
    color
}

fn vignette(centered: Vec2) -> f32 {
    1.0 - centered.dot(centered) * VIGNETTE_STRENGTH
}

/// Shade one output pixel.
///
/// `uv` is the pixel's normalized coordinate in `[0,1]²`; `src` is the
/// rendered source image. Alpha of the result is always 1.0.
pub fn shade(uv: Vec2, src: &dyn Sampler, params: &CrtParams) -> LinearRgba {
    let (warped, centered) = distort(uv);
    if off_tube(warped) {
        return OFF_TUBE;
    }

    let mut color = phosphor(src.sample(warped));

    let scanline = (warped.y * SCANLINE_FREQ).sin() * SCANLINE_DEPTH;
    let grille = (1.0 - GRILLE_DEPTH) + GRILLE_DEPTH * (warped.x * GRILLE_FREQ).sin();
    let scale = grille * vignette(centered) * params.intensity;

    for c in &mut color {
        *c = (*c - scanline) * scale;
    }

    [color[0], color[1], color[2], 1.0]
}
