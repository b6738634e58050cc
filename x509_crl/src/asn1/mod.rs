// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Strict DER decoding primitives.
//!
//! This module provides a zero-copy TLV walker and the primitive value
//! codecs used by the CRL parser:
//!
//! - [`Input`] / [`ByteReader`] - borrowed byte views and a cursor over them
//! - [`Parser`] - reads, peeks and enters TLVs; detects trailing data
//! - [`parse_bool`], [`parse_uint64`], [`parse_bit_string`] and friends
//!
//! Tags come from the `der` crate, which also decodes lengths and enforces
//! the DER length rules (definite, minimal length encodings only).
//! Identifier octets are matched as raw bytes, so universal tags outside
//! [`Tag`] can still be skipped or copied.

mod input;
mod parser;
mod values;

pub use der::{Class, Tag, TagNumber};

pub use self::input::{ByteReader, Input};
pub use self::parser::Parser;
pub use self::values::{
    is_valid_integer, parse_bit_string, parse_bool, parse_bool_relaxed, parse_uint32,
    parse_uint64, parse_uint8, BitString,
};

/// Context-specific constructed tag `[number]`, as used for EXPLICIT tagging
/// and IMPLICIT tagging of constructed types.
pub const fn context_specific_constructed(number: u8) -> Tag {
    Tag::ContextSpecific {
        constructed: true,
        number: TagNumber::new(number),
    }
}

/// Context-specific primitive tag `[number]`
pub const fn context_specific_primitive(number: u8) -> Tag {
    Tag::ContextSpecific {
        constructed: false,
        number: TagNumber::new(number),
    }
}
