use crate::error::{CrtError, CrtResult};

/// Straight-alpha RGBA8 frame, row-major, 4 bytes per pixel.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Wrap an existing buffer. `data` must be exactly `width * height * 4`
    /// bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> CrtResult<Self> {
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(CrtError::validation(
                "FrameRgba data must be exactly width * height * 4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Solid-color frame.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> CrtResult<Self> {
        let expected = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: rgba.repeat(expected / 4),
        })
    }

    /// Integer texel access. `x` and `y` must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Vertical color-bar test pattern (white, yellow, cyan, green, magenta,
/// red, blue, black), fully opaque.
pub fn color_bars(width: u32, height: u32) -> CrtResult<FrameRgba> {
    const BARS: [[u8; 4]; 8] = [
        [255, 255, 255, 255],
        [255, 255, 0, 255],
        [0, 255, 255, 255],
        [0, 255, 0, 255],
        [255, 0, 255, 255],
        [255, 0, 0, 255],
        [0, 0, 255, 255],
        [0, 0, 0, 255],
    ];

    if width == 0 || height == 0 {
        return Err(CrtError::validation("pattern dimensions must be non-zero"));
    }

    let bar_width = (width as usize / BARS.len()).max(1);
    let mut data = Vec::with_capacity(expected_len(width, height)?);
    for _y in 0..height {
        for x in 0..width as usize {
            let bar = (x / bar_width).min(BARS.len() - 1);
            data.extend_from_slice(&BARS[bar]);
        }
    }
    FrameRgba::new(width, height, data)
}

fn expected_len(width: u32, height: u32) -> CrtResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CrtError::validation("frame buffer size overflow"))
}
