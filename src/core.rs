/// 2D point or displacement in normalized image space.
///
/// Texture coordinates live in `[0,1]²` with the origin at the top-left;
/// the filter also uses the recentred `[-1,1]²` frame `2*uv - 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    /// Horizontal component (`u` in texture space).
    pub x: f32,
    /// Vertical component (`v` in texture space).
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product with `other`.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Unclamped linear RGB triple. Intermediate filter math may leave
/// channels outside `[0,1]`; quantization clamps at the crate edge.
pub type LinearRgb = [f32; 3];

/// Unclamped linear RGBA.
pub type LinearRgba = [f32; 4];

/// ITU-R BT.601 luma weights for R, G, B.
pub const LUMA_BT601: LinearRgb = [0.299, 0.587, 0.114];

/// Perceptual luma of an RGB triple under the BT.601 weighting.
pub fn luma_bt601(rgb: LinearRgb) -> f32 {
    rgb[0] * LUMA_BT601[0] + rgb[1] * LUMA_BT601[1] + rgb[2] * LUMA_BT601[2]
}
