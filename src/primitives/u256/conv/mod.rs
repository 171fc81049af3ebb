//! Integer conversion utilities
//!
//! This module groups explicit conversions between `U256` and byte arrays
//! or native integer types.
//!
//! Each submodule handles one source width, following these principles:
//! - explicit big-endian semantics
//! - no implicit truncation
//! - fallible conversions when narrowing may lose information

mod u64;
mod u8;
