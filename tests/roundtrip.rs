use bmpfx::*;
use enough::Unstoppable;

fn red_2x2() -> PixelGrid {
    PixelGrid::from_fn(2, 2, |_, _| Pixel::new(255, 0, 0))
}

#[test]
fn bmp_roundtrip_rgb() {
    let grid = PixelGrid::from_rows(vec![
        vec![
            Pixel::new(255, 0, 0),
            Pixel::new(0, 255, 0),
            Pixel::new(0, 0, 255),
        ],
        vec![
            Pixel::new(128, 128, 128),
            Pixel::new(64, 64, 64),
            Pixel::new(0, 0, 0),
        ],
    ])
    .unwrap();

    let encoded = encode_bmp(&grid, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded, grid);
}

#[test]
fn decode_encode_decode_keeps_pixels() {
    // Hand-built file with a larger data offset than the encoder writes.
    let mut data = vec![0u8; 70];
    data[0] = b'B';
    data[1] = b'M';
    data[2..6].copy_from_slice(&(70u32 + 8).to_le_bytes());
    data[10..14].copy_from_slice(&70u32.to_le_bytes());
    data[14..18].copy_from_slice(&40u32.to_le_bytes());
    data[18..22].copy_from_slice(&2u32.to_le_bytes());
    data[22..26].copy_from_slice(&1u32.to_le_bytes());
    data[26..28].copy_from_slice(&1u16.to_le_bytes());
    data[28..30].copy_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&[30, 20, 10, 60, 50, 40, 0, 0]);

    let first = decode_bmp(&data, Unstoppable).unwrap();
    assert_eq!(first.pixels(), &[Pixel::new(10, 20, 30), Pixel::new(40, 50, 60)]);

    let reencoded = encode_bmp(&first, Unstoppable).unwrap();
    assert_ne!(reencoded.len(), data.len(), "header is resynthesized");
    let second = decode_bmp(&reencoded, Unstoppable).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_white_pixel_is_58_bytes() {
    let grid = PixelGrid::from_rows(vec![vec![WHITE]]).unwrap();
    let encoded = encode_bmp(&grid, Unstoppable).unwrap();
    assert_eq!(encoded.len(), 54 + 4);
    assert_eq!(&encoded[54..], &[255, 255, 255, 0]);
}

#[test]
fn inconsistent_file_size_is_rejected() {
    let mut encoded = encode_bmp(&red_2x2(), Unstoppable).unwrap();
    encoded[2..6].copy_from_slice(&1000u32.to_le_bytes());
    match decode_bmp(&encoded, Unstoppable) {
        Err(BitmapError::SizeMismatch { declared, expected }) => {
            assert_eq!(declared, 1000);
            assert_eq!(expected, 54 + 8 * 2);
        }
        other => panic!("expected SizeMismatch, got {other:?}"),
    }

    let grid = DecodeRequest::new(&encoded)
        .with_permissiveness(BmpPermissiveness::Permissive)
        .decode(Unstoppable)
        .unwrap();
    assert_eq!(grid, red_2x2());
}

#[test]
fn red_through_grayscale_and_quantize() {
    let encoded = encode_bmp(&red_2x2(), Unstoppable).unwrap();
    let grid = decode_bmp(&encoded, Unstoppable).unwrap();

    let gray = transform::grayscale(grid.clone());
    assert!(gray.pixels().iter().all(|&p| p == Pixel::new(85, 85, 85)));

    let quantized = transform::quantize_five(grid);
    assert!(quantized.pixels().iter().all(|&p| p == Pixel::new(255, 0, 0)));

    let out = decode_bmp(&encode_bmp(&gray, Unstoppable).unwrap(), Unstoppable).unwrap();
    assert_eq!(out, gray);
}

#[test]
fn rotated_grid_encodes_with_swapped_header() {
    let grid = PixelGrid::from_fn(5, 2, |r, c| Pixel::new(r as u8, c as u8, 7));
    let rotated = transform::rotate_90(grid);
    let encoded = encode_bmp(&rotated, Unstoppable).unwrap();
    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!((info.width, info.height), (2, 5));
    assert_eq!(info.row_padding, 2);
    assert!(info.is_consistent());
    assert_eq!(decode_bmp(&encoded, Unstoppable).unwrap(), rotated);
}

#[test]
fn limits_reject_large() {
    let encoded = encode_bmp(&red_2x2(), Unstoppable).unwrap();
    let limits = Limits {
        max_pixels: Some(3),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(11),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&encoded)
            .with_limits(&limits)
            .decode(Unstoppable)
            .is_err()
    );
}

#[test]
fn header_only_file_needs_limits() {
    // 54-byte header declaring 512x512 with a consistent file size, no pixels.
    let mut data = vec![0u8; 54];
    data[0] = b'B';
    data[1] = b'M';
    data[2..6].copy_from_slice(&(54u32 + 512 * 3 * 512).to_le_bytes());
    data[10..14].copy_from_slice(&54u32.to_le_bytes());
    data[14..18].copy_from_slice(&40u32.to_le_bytes());
    data[18..22].copy_from_slice(&512u32.to_le_bytes());
    data[22..26].copy_from_slice(&512u32.to_le_bytes());
    data[26..28].copy_from_slice(&1u16.to_le_bytes());
    data[28..30].copy_from_slice(&24u16.to_le_bytes());

    let grid = decode_bmp(&data, Unstoppable).unwrap();
    assert_eq!((grid.width(), grid.height()), (512, 512));
    assert!(grid.pixels().iter().all(|&p| p == BLACK));

    let limits = Limits {
        max_pixels: Some(256 * 256),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&data).with_limits(&limits).decode(Unstoppable),
        Err(BitmapError::LimitExceeded(_))
    ));
}

#[test]
fn cancellation_is_reported() {
    struct AlwaysStop;
    impl Stop for AlwaysStop {
        fn check(&self) -> Result<(), enough::StopReason> {
            Err(enough::StopReason::Cancelled)
        }
    }

    let encoded = encode_bmp(&red_2x2(), Unstoppable).unwrap();
    assert!(matches!(
        decode_bmp(&encoded, AlwaysStop),
        Err(BitmapError::Cancelled(_))
    ));
    assert!(matches!(
        encode_bmp(&red_2x2(), AlwaysStop),
        Err(BitmapError::Cancelled(_))
    ));
}
