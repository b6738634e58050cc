// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! DER tag-length-value walker.

use der::{Decode, Length, Reader, SliceReader, Tag};

use super::input::{ByteReader, Input};
use super::values::{parse_bit_string, parse_uint64, parse_uint8, BitString};
use crate::error::{Error, Result};
use crate::time::{parse_generalized_time, parse_utc_time, GeneralizedTime};

/// Low tag number bits of an identifier octet that announce the high tag
/// number form.
const HIGH_TAG_NUMBER_FORM: u8 = 0x1f;

/// One decoded TLV: identifier octet, value bytes and the full encoding.
///
/// The identifier is kept as a raw octet because `der::Tag` only models the
/// universal tags it knows about. Names carry others (UniversalString,
/// T61String) that must still walk as opaque TLVs.
struct Tlv<'a> {
    identifier: u8,
    value: Input<'a>,
    raw: Input<'a>,
}

impl Tlv<'_> {
    fn has_tag(&self, tag: Tag) -> bool {
        self.identifier == u8::from(tag)
    }

    fn tag(&self) -> Result<Tag> {
        Ok(Tag::try_from(self.identifier)?)
    }
}

/// Decode the TLV at the start of `data` without consuming anything.
///
/// Only single-octet identifiers are accepted. Length decoding is delegated
/// to `der`, which rejects indefinite lengths and non-minimal length octets.
fn decode_tlv(data: &[u8]) -> Result<Tlv<'_>> {
    let (&identifier, rest) = data.split_first().ok_or_else(Error::unexpected_eof)?;
    if identifier & HIGH_TAG_NUMBER_FORM == HIGH_TAG_NUMBER_FORM {
        return Err(Error::malformed("high tag number form"));
    }
    if identifier == 0 {
        return Err(Error::malformed("end-of-contents octets"));
    }
    if rest.is_empty() {
        return Err(Error::unexpected_eof());
    }

    let mut reader = SliceReader::new(rest)?;
    let length = Length::decode(&mut reader)?;
    let header_len = usize::try_from(reader.position())?
        .checked_add(1)
        .ok_or_else(Error::unexpected_eof)?;
    let value_len = usize::try_from(length)?;
    let end = header_len
        .checked_add(value_len)
        .ok_or_else(Error::unexpected_eof)?;
    if end > data.len() {
        return Err(Error::unexpected_eof());
    }
    Ok(Tlv {
        identifier,
        value: Input::new(&data[header_len..end]),
        raw: Input::new(&data[..end]),
    })
}

/// Sequential reader over a run of DER TLVs.
///
/// A `Parser` only ever moves forward. Reads that fail leave it where it
/// was, but callers are expected to abandon the whole decode on the first
/// error.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    reader: ByteReader<'a>,
}

impl<'a> Parser<'a> {
    /// Parse the TLVs contained in `input`
    pub const fn new(input: Input<'a>) -> Self {
        Parser {
            reader: ByteReader::new(input),
        }
    }

    /// Whether unconsumed bytes remain in this scope
    pub const fn has_more(&self) -> bool {
        self.reader.has_more()
    }

    fn peek(&self) -> Result<Tlv<'a>> {
        decode_tlv(self.reader.remaining().as_bytes())
    }

    fn advance(&mut self, tlv: &Tlv<'a>) {
        // `raw` was decoded from the front of `remaining`.
        let _ = self.reader.read_bytes(tlv.raw.len());
    }

    /// Inspect the next TLV without consuming it.
    ///
    /// Fails on universal tags that `der::Tag` cannot represent.
    pub fn peek_tag_and_value(&self) -> Result<(Tag, Input<'a>)> {
        let tlv = self.peek()?;
        Ok((tlv.tag()?, tlv.value))
    }

    /// Whether the next TLV carries `tag`; `false` when the scope is exhausted
    pub fn peek_tag_is(&self, tag: Tag) -> Result<bool> {
        if !self.has_more() {
            return Ok(false);
        }
        Ok(self.peek()?.has_tag(tag))
    }

    /// Consume the next TLV and return its tag and value
    pub fn read_tag_and_value(&mut self) -> Result<(Tag, Input<'a>)> {
        let tlv = self.peek()?;
        let tag = tlv.tag()?;
        self.advance(&tlv);
        Ok((tag, tlv.value))
    }

    /// Consume the next TLV and return its complete encoding
    pub fn read_raw_tlv(&mut self) -> Result<Input<'a>> {
        let tlv = self.peek()?;
        self.advance(&tlv);
        Ok(tlv.raw)
    }

    /// Consume a TLV that must carry `tag`, returning its value
    pub fn read_tag(&mut self, tag: Tag) -> Result<Input<'a>> {
        let tlv = self.peek()?;
        if !tlv.has_tag(tag) {
            return Err(Error::invalid_tag(tag, tlv.identifier));
        }
        self.advance(&tlv);
        Ok(tlv.value)
    }

    /// Consume the next TLV only if it carries `tag`.
    ///
    /// Returns `Ok(None)` without consuming when the scope is exhausted or
    /// the next tag differs. A malformed next TLV is still an error.
    pub fn read_optional_tag(&mut self, tag: Tag) -> Result<Option<Input<'a>>> {
        if !self.has_more() {
            return Ok(None);
        }
        let tlv = self.peek()?;
        if !tlv.has_tag(tag) {
            return Ok(None);
        }
        self.advance(&tlv);
        Ok(Some(tlv.value))
    }

    /// Consume a TLV with `tag`, discarding it
    pub fn skip_tag(&mut self, tag: Tag) -> Result<()> {
        self.read_tag(tag).map(|_| ())
    }

    /// Consume a TLV with `tag` if present; returns whether it was
    pub fn skip_optional_tag(&mut self, tag: Tag) -> Result<bool> {
        self.read_optional_tag(tag).map(|v| v.is_some())
    }

    /// Enter a constructed TLV with `tag`, returning a parser scoped to its value
    pub fn read_constructed(&mut self, tag: Tag) -> Result<Parser<'a>> {
        if !tag.is_constructed() {
            return Err(Error::malformed("read_constructed on a primitive tag"));
        }
        self.read_tag(tag).map(Parser::new)
    }

    /// Enter a SEQUENCE
    pub fn read_sequence(&mut self) -> Result<Parser<'a>> {
        self.read_constructed(Tag::Sequence)
    }

    /// Read an INTEGER that fits in a `u8`
    pub fn read_uint8(&mut self) -> Result<u8> {
        parse_uint8(self.read_tag(Tag::Integer)?)
    }

    /// Read an INTEGER that fits in a `u64`
    pub fn read_uint64(&mut self) -> Result<u64> {
        parse_uint64(self.read_tag(Tag::Integer)?)
    }

    /// Read a BIT STRING
    pub fn read_bit_string(&mut self) -> Result<BitString<'a>> {
        parse_bit_string(self.read_tag(Tag::BitString)?)
    }

    /// Read a GeneralizedTime
    pub fn read_generalized_time(&mut self) -> Result<GeneralizedTime> {
        parse_generalized_time(self.read_tag(Tag::GeneralizedTime)?)
    }

    /// Read an X.509 `Time`, which is either UTCTime or GeneralizedTime
    pub fn read_utc_or_generalized_time(&mut self) -> Result<GeneralizedTime> {
        let tlv = self.peek()?;
        let time = if tlv.has_tag(Tag::UtcTime) {
            parse_utc_time(tlv.value)?
        } else if tlv.has_tag(Tag::GeneralizedTime) {
            parse_generalized_time(tlv.value)?
        } else {
            return Err(Error::invalid_tag(Tag::UtcTime, tlv.identifier));
        };
        self.advance(&tlv);
        Ok(time)
    }

    /// Fail if anything is left in this scope
    pub fn expect_end(&self, what: &'static str) -> Result<()> {
        if self.has_more() {
            return Err(Error::trailing_data(what));
        }
        Ok(())
    }
}
