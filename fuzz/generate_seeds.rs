#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(format: u32, width: u16, height: u16, mips: u8, offsets: &[u32]) -> Vec<u8> {
    let mut h = Vec::with_capacity(80);
    h.extend_from_slice(&0x0080_0000u32.to_le_bytes()); // 2D texture
    h.extend_from_slice(&format.to_le_bytes());
    h.extend_from_slice(&width.to_le_bytes());
    h.extend_from_slice(&height.to_le_bytes());
    h.extend_from_slice(&1u16.to_le_bytes()); // depth
    h.push(mips);
    h.push(0); // array size
    for lod in [0i32, 1, 1] {
        h.extend_from_slice(&lod.to_le_bytes());
    }
    for off in offsets {
        h.extend_from_slice(&off.to_le_bytes());
    }
    h.resize(80, 0);
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // B8G8R8A8 2x2
    let mut bgra = header(0x1450, 2, 2, 1, &[80]);
    bgra.extend_from_slice(b"\xff\x00\x00\xff\x00\xff\x00\xff\x00\x00\xff\xff\x80\x80\x80\x80");
    fs::write(format!("{dir}/bgra_2x2.tex"), &bgra).unwrap();

    // B8G8R8A8 2x2 with a 1x1 second mip
    let mut mips = header(0x1450, 2, 2, 2, &[80, 96]);
    mips.extend_from_slice(&[0x11; 16]);
    mips.extend_from_slice(&[0x22; 4]);
    fs::write(format!("{dir}/bgra_2x2_mips.tex"), &mips).unwrap();

    // BC1 header (unsupported format)
    let mut bc1 = header(0x3420, 4, 4, 1, &[80]);
    bc1.extend_from_slice(&[0u8; 8]);
    fs::write(format!("{dir}/bc1_4x4.tex"), &bc1).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/header_only.tex"), &bgra[..80]).unwrap();
    fs::write(format!("{dir}/short_header.bin"), &bgra[..40]).unwrap();
    fs::write(format!("{dir}/offset_past_end.tex"), header(0x1450, 1, 1, 1, &[4096])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
