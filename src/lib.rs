//! # identrs Library
//!
//! A small Rust library for encoding and decoding a short ident string as a
//! deflate-compressed, hex-encoded blob. This library provides functionality
//! for:
//!
//! - **Encoding**: Compress plaintext and render it as an uppercase hex blob
//!   suitable for embedding as a source literal
//! - **Decoding**: Reverse the hex encoding, inflate, and recover the
//!   plaintext, with a structured error for every malformed input
//!
//! The transform is a lossless, deterministic bijection between the plaintext
//! and its hex form. Two thin binaries front the library: `newident` prompts
//! for a string and prints the blob, `decodeident` decodes the embedded blob
//! and prints the plaintext.
//!
//! ## Quick Start
//!
//! ```rust
//! use identrs::ident;
//!
//! let blob = ident::encode("staging fleet 7").expect("encode failed");
//! assert_eq!(ident::decode(&blob).expect("decode failed"), "staging fleet 7");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: Byte-level primitives (zlib deflate/inflate, hex)
//! - [`ident`]: The ident transforms, [`ident::DecodeError`], and the
//!   embedded [`ident::B_IDENT`] blob

pub mod codec;
pub mod ident;
