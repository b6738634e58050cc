// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Borrowed byte views and a forward-only byte cursor.

use core::fmt;

/// An immutable view over a range of DER bytes.
///
/// `Input` never owns data; everything decoded from it borrows the same
/// buffer and carries its lifetime. Equality and ordering are byte-wise.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Input<'a> {
    data: &'a [u8],
}

impl<'a> Input<'a> {
    /// Wrap a byte slice
    pub const fn new(data: &'a [u8]) -> Self {
        Input { data }
    }

    /// The viewed bytes
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Number of bytes in the view
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view is empty
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input({:02x?})", self.data)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(data: &'a [u8]) -> Self {
        Input::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Input::new(data)
    }
}

impl AsRef<[u8]> for Input<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl PartialEq<[u8]> for Input<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.data == other
    }
}

impl PartialEq<&[u8]> for Input<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.data == *other
    }
}

/// Forward-only cursor over an [`Input`].
///
/// Every read is bounds-checked and returns `None` once the input is
/// exhausted; the cursor never moves backwards.
#[derive(Clone, Copy, Debug)]
pub struct ByteReader<'a> {
    remaining: &'a [u8],
}

impl<'a> ByteReader<'a> {
    /// Start reading at the beginning of `input`
    pub const fn new(input: Input<'a>) -> Self {
        ByteReader {
            remaining: input.data,
        }
    }

    /// Consume one byte
    pub fn read_byte(&mut self) -> Option<u8> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(*first)
    }

    /// Consume exactly `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Option<Input<'a>> {
        if len > self.remaining.len() {
            return None;
        }
        let (head, rest) = self.remaining.split_at(len);
        self.remaining = rest;
        Some(Input::new(head))
    }

    /// Look at the next byte without consuming it
    pub fn peek_byte(&self) -> Option<u8> {
        self.remaining.first().copied()
    }

    /// Bytes not consumed yet
    pub const fn remaining(&self) -> Input<'a> {
        Input::new(self.remaining)
    }

    /// Number of bytes not consumed yet
    pub const fn bytes_left(&self) -> usize {
        self.remaining.len()
    }

    /// Whether unconsumed bytes remain
    pub const fn has_more(&self) -> bool {
        !self.remaining.is_empty()
    }
}
