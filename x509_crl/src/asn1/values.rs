// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! BOOLEAN, INTEGER and BIT STRING value decoding (ITU-T X.690).
//!
//! All functions take the *value* bytes of a TLV, i.e. what
//! [`Parser::read_tag`](super::Parser::read_tag) returns.

extern crate alloc;

use alloc::format;
use alloc::string::ToString;

use super::input::{ByteReader, Input};
use crate::error::{Error, ParseError, Result};

fn parse_bool_internal(input: Input<'_>, relaxed: bool) -> Result<bool> {
    // X.690 8.2: a single octet, zero is FALSE.
    if input.len() != 1 {
        return Err(Error::ParseError(ParseError::InvalidBoolean));
    }
    match input.as_bytes()[0] {
        0x00 => Ok(false),
        // X.690 11.1: DER encodes TRUE as all ones.
        0xff => Ok(true),
        _ if relaxed => Ok(true),
        _ => Err(Error::ParseError(ParseError::InvalidBoolean)),
    }
}

/// Decode a DER BOOLEAN: only `0x00` and `0xFF` are accepted.
pub fn parse_bool(input: Input<'_>) -> Result<bool> {
    parse_bool_internal(input, false)
}

/// Decode a BER BOOLEAN: any nonzero octet is TRUE.
pub fn parse_bool_relaxed(input: Input<'_>) -> Result<bool> {
    parse_bool_internal(input, true)
}

/// Check that `input` is a minimally encoded INTEGER.
///
/// Returns whether the value is negative.
pub fn is_valid_integer(input: Input<'_>) -> Result<bool> {
    let mut reader = ByteReader::new(input);
    let first = reader
        .read_byte()
        .ok_or_else(|| Error::ParseError(ParseError::InvalidInteger("empty".to_string())))?;
    if let Some(second) = reader.read_byte() {
        if (first == 0x00 || first == 0xff) && (first & 0x80) == (second & 0x80) {
            return Err(Error::ParseError(ParseError::InvalidInteger(
                "non-minimal encoding".to_string(),
            )));
        }
    }
    Ok(first & 0x80 == 0x80)
}

fn parse_unsigned(input: Input<'_>, width: usize) -> Result<u64> {
    if is_valid_integer(input)? {
        return Err(Error::ParseError(ParseError::InvalidInteger(
            "negative value".to_string(),
        )));
    }
    let mut bytes = input.as_bytes();
    // Drop the sign octet; minimality was checked above.
    if bytes.len() > 1 && bytes[0] == 0 {
        bytes = &bytes[1..];
    }
    if bytes.len() > width {
        return Err(Error::ParseError(ParseError::InvalidInteger(format!(
            "value does not fit in {} bytes",
            width
        ))));
    }
    Ok(bytes
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)))
}

/// Decode a non-negative INTEGER that fits in a `u64`.
pub fn parse_uint64(input: Input<'_>) -> Result<u64> {
    parse_unsigned(input, 8)
}

/// Decode a non-negative INTEGER that fits in a `u32`.
pub fn parse_uint32(input: Input<'_>) -> Result<u32> {
    // width 4 guarantees the value fits
    parse_unsigned(input, 4).map(|v| v as u32)
}

/// Decode a non-negative INTEGER that fits in a `u8`.
pub fn parse_uint8(input: Input<'_>) -> Result<u8> {
    parse_unsigned(input, 1).map(|v| v as u8)
}

/// A decoded BIT STRING.
///
/// Bits are numbered from the most significant bit of the first byte, as
/// in named-bit lists such as KeyUsage. Unused bits in the final byte are
/// always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitString<'a> {
    bytes: Input<'a>,
    unused_bits: u8,
}

impl<'a> BitString<'a> {
    /// Build from already validated parts.
    ///
    /// `unused_bits` must be below 8, and zero when `bytes` is empty.
    pub fn new(bytes: Input<'a>, unused_bits: u8) -> Self {
        debug_assert!(unused_bits < 8);
        debug_assert!(
            unused_bits == 0
                || bytes
                    .as_bytes()
                    .last()
                    .is_some_and(|last| last & (0xff >> (8 - unused_bits)) == 0)
        );
        BitString { bytes, unused_bits }
    }

    /// Content octets, including the padded final byte
    pub fn bytes(&self) -> Input<'a> {
        self.bytes
    }

    /// Number of padding bits in the final byte
    pub fn unused_bits(&self) -> u8 {
        self.unused_bits
    }

    /// Whether bit `bit_index` is set. Bits beyond the content are unset.
    pub fn asserts_bit(&self, bit_index: usize) -> bool {
        let byte_index = bit_index / 8;
        let Some(byte) = self.bytes.as_bytes().get(byte_index) else {
            return false;
        };
        let bit_in_byte = 7 - (bit_index % 8);
        byte & (1 << bit_in_byte) != 0
    }
}

/// Decode the value of a DER BIT STRING.
pub fn parse_bit_string(input: Input<'_>) -> Result<BitString<'_>> {
    let mut reader = ByteReader::new(input);

    // X.690 8.6.2.2: the initial octet holds the unused bit count (0..=7).
    let unused_bits = reader
        .read_byte()
        .ok_or_else(|| Error::ParseError(ParseError::InvalidBitString("empty".to_string())))?;
    if unused_bits > 7 {
        return Err(Error::ParseError(ParseError::InvalidBitString(format!(
            "{} unused bits",
            unused_bits
        ))));
    }

    let bytes = reader.remaining();
    if unused_bits > 0 {
        // X.690 8.6.2.3: an empty bit string has an initial octet of zero.
        let last = bytes.as_bytes().last().ok_or_else(|| {
            Error::ParseError(ParseError::InvalidBitString(
                "unused bits without content".to_string(),
            ))
        })?;
        // X.690 11.2.1: unused bits must be zero in DER.
        let mask = 0xffu8 >> (8 - unused_bits);
        if last & mask != 0 {
            return Err(Error::ParseError(ParseError::InvalidBitString(
                "nonzero padding bits".to_string(),
            )));
        }
    }

    Ok(BitString::new(bytes, unused_bits))
}
