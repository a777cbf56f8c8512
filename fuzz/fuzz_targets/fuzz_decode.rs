#![no_main]
use bmpfx::{BmpPermissiveness, DecodeRequest, ImageInfo, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and every validation mode must never panic
    let _ = ImageInfo::from_bytes(data);

    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    for mode in [
        BmpPermissiveness::Strict,
        BmpPermissiveness::Standard,
        BmpPermissiveness::Permissive,
    ] {
        let _ = DecodeRequest::new(data)
            .with_limits(&limits)
            .with_permissiveness(mode)
            .decode(enough::Unstoppable);
    }
});
