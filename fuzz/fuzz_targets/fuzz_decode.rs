#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every entry point must reject bad input without panicking
    let _ = zentex::TexInfo::from_bytes(data);
    let _ = zentex::decode(data, enough::Unstoppable);
    let _ = zentex::decode_native(data, enough::Unstoppable);
});
