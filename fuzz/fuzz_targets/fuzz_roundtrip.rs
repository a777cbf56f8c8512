#![no_main]
use bmpfx::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    // Re-encoding and decoding again must produce identical pixels
    let reencoded = encode_bmp(&decoded, enough::Unstoppable).expect("decoded grid must encode");
    let decoded2 = decode_bmp(&reencoded, enough::Unstoppable).expect("re-encoded data failed to decode");
    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");

    // Geometry that preserves pixel count must stay encodable
    let rotated = transform::rotate_90(decoded);
    let out = encode_bmp(&rotated, enough::Unstoppable).expect("rotated grid must encode");
    assert_eq!(decode_bmp(&out, enough::Unstoppable).ok(), Some(rotated));
});
