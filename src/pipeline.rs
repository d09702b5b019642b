use rayon::prelude::*;

use crate::{
    core::Vec2,
    error::{CrtError, CrtResult},
    filter::{CrtParams, shade},
    frame::FrameRgba,
    sampler::BilinearSampler,
};

/// Threading configuration for whole-frame shading.
#[derive(Clone, Debug, Default)]
pub struct Threading {
    /// Shade rows on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Shade a whole frame sequentially with default threading.
pub fn apply_frame(src: &FrameRgba, params: &CrtParams) -> CrtResult<FrameRgba> {
    apply_frame_with(src, params, &Threading::default())
}

/// Shade a whole frame.
///
/// Each output pixel is shaded at its texel center `((x+0.5)/w, (y+0.5)/h)`
/// and quantized to RGBA8 with clamping. Rows are independent, so the
/// parallel path is bit-identical to the sequential one.
#[tracing::instrument(skip(src, params), fields(width = src.width, height = src.height))]
pub fn apply_frame_with(
    src: &FrameRgba,
    params: &CrtParams,
    threading: &Threading,
) -> CrtResult<FrameRgba> {
    let expected_len = (src.width as usize)
        .checked_mul(src.height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CrtError::evaluation("frame buffer size overflow"))?;
    if src.data.len() != expected_len {
        return Err(CrtError::evaluation(
            "apply_frame expects src data matching width*height*4",
        ));
    }
    if src.width == 0 || src.height == 0 {
        return Err(CrtError::validation("frame dimensions must be non-zero"));
    }

    let sampler = BilinearSampler::new(src);
    let row_bytes = src.width as usize * 4;
    let mut data = vec![0u8; expected_len];

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            data.par_chunks_exact_mut(row_bytes)
                .enumerate()
                .for_each(|(y, row)| {
                    shade_row(row, y as u32, src.width, src.height, &sampler, params);
                });
        });
    } else {
        for (y, row) in data.chunks_exact_mut(row_bytes).enumerate() {
            shade_row(row, y as u32, src.width, src.height, &sampler, params);
        }
    }

    FrameRgba::new(src.width, src.height, data)
}

fn shade_row(
    row: &mut [u8],
    y: u32,
    width: u32,
    height: u32,
    sampler: &BilinearSampler<'_>,
    params: &CrtParams,
) {
    let v = (y as f32 + 0.5) / height as f32;
    for (x, px) in row.chunks_exact_mut(4).enumerate() {
        let u = (x as f32 + 0.5) / width as f32;
        let c = shade(Vec2::new(u, v), sampler, params);
        px[0] = quantize(c[0]);
        px[1] = quantize(c[1]);
        px[2] = quantize(c[2]);
        px[3] = quantize(c[3]);
    }
}

fn quantize(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn build_thread_pool(threads: Option<usize>) -> CrtResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CrtError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CrtError::evaluation(format!("failed to build rayon thread pool: {e}")))
}
