#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod filter;
pub mod frame;
pub mod pipeline;
pub mod sampler;

pub use self::core::{LUMA_BT601, LinearRgb, LinearRgba, Vec2, luma_bt601};
pub use self::error::{CrtError, CrtResult};
pub use self::filter::{CrtParams, DEFAULT_INTENSITY, distort, shade};
pub use self::frame::{FrameRgba, color_bars};
pub use self::pipeline::{Threading, apply_frame, apply_frame_with};
pub use self::sampler::{BilinearSampler, Sampler, SolidSampler};
