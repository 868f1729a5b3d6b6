//! Absorb-then-finalize hashing over a 512-bit primitive.
//!
//! The oracle does not stream into the underlying hash. Every absorbed
//! value is appended to an internal byte string as `"|" + text`, and the
//! primitive runs exactly once over the whole string when the oracle is
//! finalized. So
//!
//! ```text
//! update(a); update(b); digest()  ==  H("|" + a + "|" + b)
//! ```
//!
//! Text is absorbed as its UTF-8 bytes. Byte strings are absorbed as
//! lowercase hex, each byte written with as few digits as it needs
//! (`0x0a` becomes `"a"`, `0xab` stays `"ab"`). Numbers are absorbed as
//! their decimal text.

use core::marker::PhantomData;

use zeroize::Zeroizing;

/// A cryptographic hash with a 64-byte output.
///
/// Implementors must be deterministic and collision resistant. The Balloon
/// construction is generic over this trait so the primitive can be swapped
/// without touching the derivation itself.
pub trait Hash512 {
    /// Hashes `input` in one shot.
    fn hash512(input: &[u8]) -> [u8; 64];
}

/// SHA-512 using the crate's own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512;

impl Hash512 for Sha512 {
    fn hash512(input: &[u8]) -> [u8; 64] {
        super::sha512(input)
    }
}

/// A value handed to [`HashOracle::update`].
///
/// The variant decides the encoding: text goes in verbatim, raw bytes are
/// hex-encoded first.
#[derive(Debug, Clone, Copy)]
pub enum Absorb<'a> {
    /// UTF-8 text, absorbed as-is.
    Text(&'a str),
    /// Raw bytes, absorbed as lowercase hex.
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Absorb<'a> {
    fn from(text: &'a str) -> Self {
        Absorb::Text(text)
    }
}

impl<'a> From<&'a String> for Absorb<'a> {
    fn from(text: &'a String) -> Self {
        Absorb::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Absorb<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Absorb::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Absorb<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Absorb::Bytes(bytes.as_slice())
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Appends `bytes` to `out` as lowercase hex, dropping each byte's leading
/// zero nibble.
pub(crate) fn push_hex(out: &mut Vec<u8>, bytes: &[u8]) {
    for &b in bytes {
        if b >= 0x10 {
            out.push(HEX_DIGITS[(b >> 4) as usize]);
        }
        out.push(HEX_DIGITS[(b & 0x0f) as usize]);
    }
}

/// Encodes `bytes` with the same hex rendering the oracle uses.
pub fn encode_hex(bytes: &[u8]) -> Zeroizing<String> {
    let mut out = Zeroizing::new(Vec::with_capacity(bytes.len() * 2));
    push_hex(&mut out, bytes);

    // `push_hex` only emits ASCII digits
    let text: String = out.iter().map(|&b| b as char).collect();
    Zeroizing::new(text)
}

/// Single-use incremental hasher.
///
/// [`HashOracle::digest`] consumes the oracle, so a finalized oracle cannot
/// absorb anything else. The accumulated input is wiped when the oracle is
/// dropped, since it usually carries password material.
pub struct HashOracle<H: Hash512 = Sha512> {
    input: Zeroizing<Vec<u8>>,
    _hash: PhantomData<H>,
}

impl<H: Hash512> HashOracle<H> {
    /// Creates an empty oracle.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty oracle that can absorb `capacity` bytes of encoded
    /// input without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            input: Zeroizing::new(Vec::with_capacity(capacity)),
            _hash: PhantomData,
        }
    }

    /// Absorbs one value, prefixed with the `|` delimiter.
    pub fn update<'a>(&mut self, value: impl Into<Absorb<'a>>) -> &mut Self {
        self.input.push(b'|');

        match value.into() {
            Absorb::Text(text) => self.input.extend_from_slice(text.as_bytes()),
            Absorb::Bytes(bytes) => push_hex(&mut self.input, bytes),
        }

        self
    }

    /// Absorbs an unsigned integer as decimal text.
    pub fn update_decimal(&mut self, value: u64) -> &mut Self {
        let text = value.to_string();
        self.update(text.as_str())
    }

    /// Number of encoded bytes absorbed so far, delimiters included.
    pub fn absorbed_len(&self) -> usize {
        self.input.len()
    }

    /// Hashes everything absorbed and returns the 64-byte digest.
    pub fn digest(self) -> [u8; 64] {
        H::hash512(&self.input)
    }
}

impl<H: Hash512> Default for HashOracle<H> {
    fn default() -> Self {
        Self::new()
    }
}
