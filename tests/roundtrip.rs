use enough::Unstoppable;
use zentex::*;

/// RGBA pixels from a deterministic xorshift stream.
fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    let mut state: u32 = 0xCAFE_BABE;
    for chunk in pixels.chunks_exact_mut(4) {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        chunk[0] = state as u8;
        chunk[1] = (state >> 8) as u8;
        chunk[2] = (state >> 16) as u8;
        chunk[3] = (state >> 24) as u8;
    }
    pixels
}

#[test]
fn rgba_roundtrip_small() {
    let w = 7;
    let h = 5;
    let pixels = noise_pattern(w, h);

    let encoded = encode(&pixels, w as u32, h as u32, Unstoppable).unwrap();
    assert_eq!(encoded.len(), HEADER_SIZE + w * h * 4);

    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width, w as u32);
    assert_eq!(decoded.height, h as u32);
    assert_eq!(decoded.layout, PixelLayout::Rgba8);
    assert_eq!(decoded.pixels(), &pixels[..]);
    // BGRA→RGBA swizzle always allocates
    assert!(!decoded.is_borrowed());
}

#[test]
fn roundtrip_dimension_edges() {
    for (w, h) in [(1, 1), (1, 17), (17, 1), (16, 16), (33, 2), (4096, 1), (1, 4096)] {
        let pixels = noise_pattern(w, h);
        let encoded = encode(&pixels, w as u32, h as u32, Unstoppable).unwrap();
        let decoded = decode(&encoded, Unstoppable).unwrap();
        assert_eq!((decoded.width, decoded.height), (w as u32, h as u32));
        assert_eq!(decoded.pixels(), &pixels[..], "{w}x{h} mismatch");
    }
}

#[test]
fn roundtrip_dimension_sweep() {
    // Sizes across 1..=4096 on both axes, area capped at 64K pixels
    let mut state: u32 = 0x1234_5678;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    for _ in 0..48 {
        let w = (next() % 4096 + 1) as usize;
        let max_h = (65_536 / w).min(4096);
        let h = (next() as usize % max_h) + 1;
        let pixels = noise_pattern(w, h);
        let encoded = encode(&pixels, w as u32, h as u32, Unstoppable).unwrap();
        assert_eq!(encoded.len(), HEADER_SIZE + w * h * 4);
        let decoded = decode(&encoded, Unstoppable).unwrap();
        assert_eq!((decoded.width, decoded.height), (w as u32, h as u32));
        assert_eq!(decoded.pixels(), &pixels[..], "{w}x{h} mismatch");
    }
}

#[test]
fn roundtrip_largest_surface() {
    let pixels = noise_pattern(4096, 4096);
    let encoded = encode(&pixels, 4096, 4096, Unstoppable).unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!((decoded.width, decoded.height), (4096, 4096));
    assert!(decoded.pixels() == &pixels[..]);
}

#[test]
fn reencode_is_byte_identical() {
    let pixels = noise_pattern(9, 4);
    let first = encode(&pixels, 9, 4, Unstoppable).unwrap();
    let decoded = decode(&first, Unstoppable).unwrap();
    let second = encode(decoded.pixels(), decoded.width, decoded.height, Unstoppable).unwrap();
    assert_eq!(first, second);
}

#[test]
fn header_points_past_itself() {
    for (w, h) in [(1u32, 1u32), (300, 2), (2, 300)] {
        let pixels = vec![0u8; (w * h * 4) as usize];
        let encoded = encode(&pixels, w, h, Unstoppable).unwrap();
        let header = TexHeader::parse(&encoded).unwrap();
        assert_eq!(header.mip_offsets(), &[HEADER_SIZE as u32]);
        assert_eq!(header.mip_levels(), 1);
        assert_eq!(header.depth, 1);
        assert_eq!(header.lod_offsets, [0, 1, 1]);
        assert_eq!(header.format, TextureFormat::B8G8R8A8);
        assert!(header.attribute.contains(TextureAttribute::TEXTURE_TYPE_2D));
    }
}

#[test]
fn channel_order_on_disk_is_bgra() {
    let encoded = encode(&[10, 20, 30, 40], 1, 1, Unstoppable).unwrap();
    assert_eq!(&encoded[HEADER_SIZE..], &[30, 20, 10, 40]);
}

#[test]
fn pixels_written_row_major() {
    // 2x2: distinct red channel per pixel
    let pixels = [
        1, 0, 0, 255, 2, 0, 0, 255, // row 0
        3, 0, 0, 255, 4, 0, 0, 255, // row 1
    ];
    let encoded = encode(&pixels, 2, 2, Unstoppable).unwrap();
    let reds: Vec<u8> = encoded[HEADER_SIZE..].chunks_exact(4).map(|p| p[2]).collect();
    assert_eq!(reds, [1, 2, 3, 4]);
}

#[test]
fn decode_two_pixel_scenario() {
    let mut file = Vec::new();
    TexHeader::new_2d(2, 1, TextureFormat::B8G8R8A8).write_to(&mut file);
    file.extend_from_slice(&[255, 0, 0, 255, 0, 255, 0, 255]);

    let decoded = decode(&file, Unstoppable).unwrap();
    assert_eq!((decoded.width, decoded.height), (2, 1));
    assert_eq!(decoded.pixels(), &[0, 0, 255, 255, 0, 255, 0, 255]);
}

#[test]
fn native_decode_borrows_input() {
    let pixels = noise_pattern(3, 3);
    let encoded = encode(&pixels, 3, 3, Unstoppable).unwrap();

    let native = decode_native(&encoded, Unstoppable).unwrap();
    assert_eq!(native.layout, PixelLayout::Bgra8);
    assert!(native.is_borrowed());
    assert_eq!(native.pixels(), &encoded[HEADER_SIZE..]);

    let owned = native.into_owned();
    assert!(!owned.is_borrowed());
    assert_eq!(owned.header().mip_levels(), 1);
    assert_eq!(owned.into_pixels(), &encoded[HEADER_SIZE..]);
}

#[test]
fn decoded_output_keeps_source_header() {
    let header = TexHeader::new_2d(1, 1, TextureFormat::B8G8R8A8)
        .with_mip_offsets(vec![80, 84])
        .unwrap();
    let mut file = Vec::new();
    header.write_to(&mut file);
    file.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);

    let decoded = decode(&file, Unstoppable).unwrap();
    assert_eq!(decoded.header(), &header);
    assert_eq!(decoded.into_pixels(), vec![3, 2, 1, 4]);
}

#[test]
fn bgra_encode_copies_verbatim() {
    let bgra = noise_pattern(5, 2);
    let encoded = encode_bgra(&bgra, 5, 2, Unstoppable).unwrap();
    assert_eq!(&encoded[HEADER_SIZE..], &bgra[..]);

    let native = decode_native(&encoded, Unstoppable).unwrap();
    assert_eq!(native.pixels(), &bgra[..]);
}

#[test]
fn bgra_and_rgba_encoders_agree() {
    let rgba = noise_pattern(6, 3);
    let bgra: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|p| [p[2], p[1], p[0], p[3]])
        .collect();
    assert_eq!(
        encode(&rgba, 6, 3, Unstoppable).unwrap(),
        encode_bgra(&bgra, 6, 3, Unstoppable).unwrap()
    );
}

#[test]
fn decodes_mip0_of_multi_mip_file() {
    // 2x2 mip 0 at 80, 1x1 mip 1 at 96
    let header = TexHeader::new_2d(2, 2, TextureFormat::B8G8R8A8)
        .with_mip_offsets(vec![80, 96])
        .unwrap();
    let mut file = Vec::new();
    header.write_to(&mut file);
    let mip0: Vec<u8> = (0..16).collect();
    file.extend_from_slice(&mip0);
    file.extend_from_slice(&[9, 9, 9, 9]);

    let decoded = decode(&file, Unstoppable).unwrap();
    assert_eq!((decoded.width, decoded.height), (2, 2));
    assert_eq!(
        decoded.pixels(),
        &[2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15]
    );
}

#[test]
fn decodes_mip0_at_nonadjacent_offset() {
    let header = TexHeader::new_2d(1, 1, TextureFormat::B8G8R8A8)
        .with_mip_offsets(vec![128])
        .unwrap();
    let mut file = Vec::new();
    header.write_to(&mut file);
    file.resize(128, 0xEE);
    file.extend_from_slice(&[1, 2, 3, 4]);

    let decoded = decode(&file, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &[3, 2, 1, 4]);
}

#[test]
fn trailing_bytes_are_ignored() {
    let pixels = noise_pattern(2, 2);
    let mut encoded = encode(&pixels, 2, 2, Unstoppable).unwrap();
    encoded.extend_from_slice(&[0xAB; 32]);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn info_probe() {
    let pixels = vec![255u8; 4 * 6];
    let encoded = encode(&pixels, 3, 2, Unstoppable).unwrap();

    let info = TexInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 3);
    assert_eq!(info.height, 2);
    assert_eq!(info.format, TextureFormat::B8G8R8A8);
    assert_eq!(info.mip_levels, 1);
    assert_eq!(info.array_size, 0);
    assert!(info.is_decodable());
}

#[test]
fn info_probe_ignores_missing_body() {
    let encoded = encode(&[0u8; 4 * 4], 2, 2, Unstoppable).unwrap();
    let info = TexInfo::from_bytes(&encoded[..HEADER_SIZE]).unwrap();
    assert_eq!((info.width, info.height), (2, 2));
}

#[test]
fn limits_reject_large() {
    let encoded = encode(&[0u8; 4 * 8], 4, 2, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(4),
        ..Default::default()
    };
    match decode_with_limits(&encoded, &limits, Unstoppable) {
        Err(TexError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(31),
        ..Default::default()
    };
    assert!(matches!(
        decode_with_limits(&encoded, &limits, Unstoppable),
        Err(TexError::LimitExceeded(_))
    ));

    let limits = Limits {
        max_height: Some(1),
        ..Default::default()
    };
    match decode_with_limits(&encoded, &limits, Unstoppable) {
        Err(TexError::LimitExceeded(msg)) => assert_eq!(msg, "height 2 exceeds limit 1"),
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_width: Some(4),
        max_height: Some(2),
        max_pixels: Some(8),
        max_memory_bytes: Some(32),
    };
    assert!(decode_with_limits(&encoded, &limits, Unstoppable).is_ok());
}

#[test]
fn limits_checked_before_pixel_data() {
    // Header says 4096x4096 but the body is missing: limits must win
    let mut file = Vec::new();
    TexHeader::new_2d(4096, 4096, TextureFormat::B8G8R8A8).write_to(&mut file);
    let limits = Limits {
        max_width: Some(1024),
        ..Default::default()
    };
    assert!(matches!(
        decode_with_limits(&file, &limits, Unstoppable),
        Err(TexError::LimitExceeded(_))
    ));
}
