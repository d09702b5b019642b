use crtfx::{CrtParams, FrameRgba, Threading, apply_frame, apply_frame_with, color_bars};

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

#[test]
fn frame_filter_is_deterministic_and_nonempty() {
    let src = color_bars(96, 64).unwrap();
    let params = CrtParams::default();

    let a = apply_frame(&src, &params).unwrap();
    let b = apply_frame(&src, &params).unwrap();

    assert_eq!((a.width, a.height), (96, 64));
    assert_eq!(digest_u64(&a.data), digest_u64(&b.data));
    assert!(a.data.iter().any(|&x| x != 0));
}

#[test]
fn parallel_matches_sequential() {
    let src = color_bars(128, 96).unwrap();
    let params = CrtParams { intensity: 1.2 };

    let seq = apply_frame(&src, &params).unwrap();
    let par = apply_frame_with(
        &src,
        &params,
        &Threading {
            parallel: true,
            threads: Some(4),
        },
    )
    .unwrap();

    assert_eq!(seq.data, par.data);
}

#[test]
fn corners_warp_off_the_tube_face() {
    let src = FrameRgba::filled(64, 64, [255, 255, 255, 255]).unwrap();
    let out = apply_frame(&src, &CrtParams::default()).unwrap();

    // The barrel curve pushes corner pixels outside [0,1]; they come back
    // as the opaque black border.
    assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(out.pixel(63, 0), [0, 0, 0, 255]);
    assert_eq!(out.pixel(0, 63), [0, 0, 0, 255]);
    assert_eq!(out.pixel(63, 63), [0, 0, 0, 255]);

    // The center stays on the face and keeps signal.
    let center = out.pixel(32, 32);
    assert!(center[1] > 0);
    assert_eq!(center[3], 255);
}

#[test]
fn intensity_zero_blacks_out_the_face() {
    let src = color_bars(48, 48).unwrap();
    let out = apply_frame(&src, &CrtParams { intensity: 0.0 }).unwrap();
    assert!(
        out.data
            .chunks_exact(4)
            .all(|px| px[0] == 0 && px[1] == 0 && px[2] == 0 && px[3] == 255)
    );
}

#[test]
fn zero_worker_threads_is_rejected() {
    let src = color_bars(16, 16).unwrap();
    let err = apply_frame_with(
        &src,
        &CrtParams::default(),
        &Threading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
