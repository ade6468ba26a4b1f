use anyhow::{Result, bail};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{Read, Write};

/// Compress data into a zlib-wrapped deflate stream at the default level.
/// The output is decompressible by any standard zlib-compatible inflate.
pub fn compress_deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress a zlib-wrapped deflate stream. Errors on corrupt, truncated,
/// or non-zlib input.
pub fn decompress_deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut result = Vec::new();
    decoder.read_to_end(&mut result)?;
    Ok(result)
}

pub fn decode_hex_string(hex_str: &str) -> Result<Vec<u8>> {
    let hex_str = hex_str.trim();
    if hex_str.len() % 2 != 0 {
        bail!("hex input has an odd number of digits ({})", hex_str.len());
    }

    let mut result = Vec::with_capacity(hex_str.len() / 2);
    for pair in hex_str.as_bytes().chunks_exact(2) {
        // Byte-wise chunking keeps non-ASCII input an error instead of a
        // slicing panic on a char boundary.
        let byte = std::str::from_utf8(pair)
            .ok()
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "invalid hex digit pair '{}'",
                    String::from_utf8_lossy(pair)
                )
            })?;
        result.push(byte);
    }

    Ok(result)
}

pub fn encode_hex_string(data: &[u8]) -> String {
    data.iter().map(|byte| format!("{:02X}", byte)).collect()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip_hex(s in "([0-9a-fA-F]{2})*") {
            let bytes = decode_hex_string(&s).unwrap();
            let encoded = encode_hex_string(&bytes);
            assert_eq!(s.to_lowercase(), encoded.to_lowercase());
        }
    }

    proptest! {
        #[test]
        fn compress_decompress_roundtrip(data in prop::collection::vec(any::<u8>(), 0..10000)) {
            let compressed = compress_deflate(&data).unwrap();
            let decompressed = decompress_deflate(&compressed).unwrap();
            assert_eq!(data, decompressed);
        }
    }

    proptest! {
        #[test]
        fn hex_decode_never_panics(s in "\\PC*") {
            let _ = decode_hex_string(&s);
        }
    }
}
