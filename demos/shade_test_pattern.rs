use crtfx::{CrtParams, Threading, apply_frame_with, color_bars};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let src = color_bars(640, 480)?;
    let threading = Threading {
        parallel: true,
        threads: None,
    };
    let frame = apply_frame_with(&src, &CrtParams::default(), &threading)?;

    let out_path = std::path::Path::new("target").join("shade_test_pattern.png");
    image::save_buffer_with_format(
        &out_path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
