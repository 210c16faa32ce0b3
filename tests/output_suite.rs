use artviz::buffer::PixelBuffer;
use artviz::ppm::{Ppm, PpmError};
use artviz::preview;

/// Build a small buffer with a deterministic gradient pattern.
fn sample_buffer() -> PixelBuffer {
    let mut img = PixelBuffer::new(5, 4, [0.0; 3]).expect("buffer creation should succeed");
    for y in 0..4 {
        for x in 0..5 {
            let v = (x + y * 5) as f32 / 19.0;
            img.deposit(x as i32, y as i32, [v, 1.0 - v, 0.5], 1.0);
        }
    }
    img
}

// ── PPM ─────────────────────────────────────────────────────────────────────

#[test]
fn header_matches_fixed_format() {
    let bytes = Ppm::from_buffer(&sample_buffer()).to_bytes();
    assert!(bytes.starts_with(b"P6 5 4 255\n"), "unexpected header");
    assert_eq!(bytes.len(), b"P6 5 4 255\n".len() + 5 * 4 * 3);
}

#[test]
fn round_trip_preserves_everything() {
    let ppm = Ppm::from_buffer(&sample_buffer());
    let parsed = Ppm::parse(&ppm.to_bytes()).expect("parse should succeed");
    assert_eq!(parsed.width, 5);
    assert_eq!(parsed.height, 4);
    assert_eq!(parsed.pixels, ppm.pixels);
}

#[test]
fn parse_rejects_bad_magic() {
    let err = Ppm::parse(b"P3 1 1 255\n0 0 0").expect_err("ascii PPM must be rejected");
    assert!(matches!(err, PpmError::BadMagic));
}

#[test]
fn parse_rejects_truncated_payload() {
    let mut bytes = Ppm::from_buffer(&sample_buffer()).to_bytes();
    bytes.truncate(bytes.len() - 5);
    let err = Ppm::parse(&bytes).expect_err("short payload must be rejected");
    assert!(matches!(err, PpmError::Truncated { expected: 60, .. }));
}

#[test]
fn parse_rejects_wrong_maxval() {
    let err = Ppm::parse(b"P6 1 1 15\n\x00\x00\x00").expect_err("maxval 15 must be rejected");
    assert!(matches!(err, PpmError::Header(_)));
}

#[test]
fn parse_rejects_incomplete_header() {
    let err = Ppm::parse(b"P6 5 4").expect_err("missing maxval must be rejected");
    assert!(matches!(err, PpmError::Header(_)));
}

// ── ASCII preview ───────────────────────────────────────────────────────────

#[test]
fn preview_has_requested_geometry() {
    let mut out = Vec::new();
    preview::ascii_preview(&sample_buffer(), 5, 4, &mut out).expect("preview should succeed");
    let text = String::from_utf8(out).expect("preview should be ASCII");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.len() == 5), "every row should have 5 glyphs");
}

#[test]
fn preview_maps_black_to_sparse_glyphs() {
    let img = PixelBuffer::new(8, 8, [0.0; 3]).expect("buffer creation should succeed");
    let mut out = Vec::new();
    preview::ascii_preview(&img, 4, 2, &mut out).expect("preview should succeed");
    assert!(
        out.iter().filter(|&&b| b != b'\n').all(|&b| b == b' '),
        "a black buffer should preview as spaces"
    );
}

#[test]
fn preview_maps_white_to_a_dense_glyph() {
    let mut img = PixelBuffer::new(8, 8, [0.0; 3]).expect("buffer creation should succeed");
    for y in 0..8 {
        for x in 0..8 {
            img.deposit(x as i32, y as i32, [1.0; 3], 1.0);
        }
    }
    let mut out = Vec::new();
    preview::ascii_preview(&img, 4, 2, &mut out).expect("preview should succeed");
    // Full luminance compresses to 0.5 and lands mid-ramp after the gain.
    assert!(
        out.iter().filter(|&&b| b != b'\n').all(|&b| b == b'+'),
        "a white buffer should preview as '+' glyphs"
    );
}
