#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32, bpp: u16, pixels: &[u8]) -> Vec<u8> {
    let file_size = 54 + pixels.len() as u32;
    let mut out = vec![0u8; 54];
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&file_size.to_le_bytes());
    out[10..14].copy_from_slice(&54u32.to_le_bytes());
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes());
    out[28..30].copy_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(pixels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit: 3 + 1 padding
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 24, &[0x00, 0x00, 0xff, 0x00])).unwrap();

    // 2x2 24-bit: 6 + 2 padding per row
    let rows = [0xff, 0, 0, 0, 0xff, 0, 0, 0, 0, 0, 0xff, 0x80, 0x80, 0x80, 0, 0];
    fs::write(format!("{dir}/bmp_2x2.bmp"), bmp(2, 2, 24, &rows)).unwrap();

    // 1x2 32-bit, fourth byte ignored
    fs::write(
        format!("{dir}/bmp_32bit_1x2.bmp"),
        bmp(1, 2, 32, &[1, 2, 3, 0xff, 4, 5, 6, 0xff]),
    )
    .unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut lying = bmp(3, 3, 24, &[0; 36]);
    lying[2..6].copy_from_slice(&10u32.to_le_bytes());
    fs::write(format!("{dir}/size_mismatch.bmp"), lying).unwrap();
    fs::write(format!("{dir}/bpp_8.bmp"), bmp(4, 1, 8, &[0; 4])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
