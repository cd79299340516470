#![no_main]
use libfuzzer_sys::fuzz_target;
use zentex::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = encode(
        decoded.pixels(),
        decoded.width,
        decoded.height,
        enough::Unstoppable,
    )
    .expect("decoded pixels must re-encode");

    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width, decoded2.width);
    assert_eq!(decoded.height, decoded2.height);

    // Our own output is canonical: a second encode is byte-identical
    let again = encode(
        decoded2.pixels(),
        decoded2.width,
        decoded2.height,
        enough::Unstoppable,
    )
    .expect("re-encode");
    assert_eq!(reencoded, again, "encoder not stable");
});
