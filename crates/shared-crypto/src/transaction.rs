//! # Raw Transactions
//!
//! Structural decoder for the Bitcoin transaction wire format:
//!
//! ```text
//! version:u32le | varint n | n * input | varint m | m * output | lock_time:u32le
//! input  = prev_txid[32] | prev_index:u32le | varint len | script | sequence:u32le
//! output = satoshis:u64le | varint len | script
//! ```
//!
//! Only structure is checked. Script semantics, amounts and consensus rules
//! belong to whoever records and broadcasts the transaction.

use crate::hashing::{sha256d, to_display_hex};
use crate::CryptoError;

/// Smallest possible serialized input: 32 + 4 + 1 + 4 bytes.
const MIN_INPUT_LEN: usize = 41;
/// Smallest possible serialized output: 8 + 1 bytes.
const MIN_OUTPUT_LEN: usize = 9;

/// Transaction input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// Previous transaction id, internal byte order
    pub prev_txid: [u8; 32],
    /// Index of the spent output
    pub prev_index: u32,
    /// Unlocking script
    pub script: Vec<u8>,
    /// Sequence number
    pub sequence: u32,
}

/// Transaction output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    /// Value in satoshis
    pub satoshis: u64,
    /// Locking script
    pub script: Vec<u8>,
}

/// A decoded transaction together with its serialized bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransaction {
    /// Transaction version
    pub version: u32,
    /// Inputs in order
    pub inputs: Vec<TxInput>,
    /// Outputs in order
    pub outputs: Vec<TxOutput>,
    /// Lock time
    pub lock_time: u32,
    bytes: Vec<u8>,
}

impl RawTransaction {
    /// Decode a hex-encoded transaction.
    pub fn from_hex(raw_hex: &str) -> Result<Self, CryptoError> {
        let bytes =
            hex::decode(raw_hex.trim()).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        Self::from_bytes(bytes)
    }

    /// Decode a serialized transaction. Every byte must be consumed.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CryptoError> {
        let mut reader = Reader::new(&bytes);

        let version = reader.u32_le("version")?;

        let input_count = reader.varint("input count")?;
        let mut inputs = Vec::with_capacity(reader.bounded_capacity(input_count, MIN_INPUT_LEN));
        for _ in 0..input_count {
            let prev_txid = reader.array::<32>("previous txid")?;
            let prev_index = reader.u32_le("previous index")?;
            let script = reader.var_bytes("unlocking script")?.to_vec();
            let sequence = reader.u32_le("sequence")?;
            inputs.push(TxInput {
                prev_txid,
                prev_index,
                script,
                sequence,
            });
        }

        let output_count = reader.varint("output count")?;
        let mut outputs =
            Vec::with_capacity(reader.bounded_capacity(output_count, MIN_OUTPUT_LEN));
        for _ in 0..output_count {
            let satoshis = reader.u64_le("satoshis")?;
            let script = reader.var_bytes("locking script")?.to_vec();
            outputs.push(TxOutput { satoshis, script });
        }

        let lock_time = reader.u32_le("lock time")?;

        if reader.remaining() > 0 {
            return Err(CryptoError::TrailingBytes(reader.remaining()));
        }

        Ok(Self {
            version,
            inputs,
            outputs,
            lock_time,
            bytes,
        })
    }

    /// Serialized bytes as received.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Transaction id: SHA-256d of the serialized bytes, shown byte-reversed.
    pub fn txid(&self) -> String {
        to_display_hex(&sha256d(&self.bytes))
    }
}

/// Append a Bitcoin compact-size integer.
pub(crate) fn write_varint(buf: &mut Vec<u8>, value: u64) {
    match value {
        0..=0xfc => buf.push(value as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&value.to_le_bytes());
        }
    }
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Cap a declared element count by what the remaining bytes could hold.
    fn bounded_capacity(&self, count: u64, min_len: usize) -> usize {
        let fits = self.remaining() / min_len;
        usize::try_from(count).map_or(fits, |c| c.min(fits))
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], CryptoError> {
        if len > self.remaining() {
            return Err(CryptoError::TruncatedTransaction(field));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], CryptoError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    fn u8(&mut self, field: &'static str) -> Result<u8, CryptoError> {
        Ok(self.take(1, field)?[0])
    }

    fn u32_le(&mut self, field: &'static str) -> Result<u32, CryptoError> {
        Ok(u32::from_le_bytes(self.array::<4>(field)?))
    }

    fn u64_le(&mut self, field: &'static str) -> Result<u64, CryptoError> {
        Ok(u64::from_le_bytes(self.array::<8>(field)?))
    }

    fn varint(&mut self, field: &'static str) -> Result<u64, CryptoError> {
        match self.u8(field)? {
            0xfd => Ok(u16::from_le_bytes(self.array::<2>(field)?) as u64),
            0xfe => Ok(u32::from_le_bytes(self.array::<4>(field)?) as u64),
            0xff => Ok(u64::from_le_bytes(self.array::<8>(field)?)),
            small => Ok(small as u64),
        }
    }

    fn var_bytes(&mut self, field: &'static str) -> Result<&'a [u8], CryptoError> {
        let len = self.varint(field)?;
        let len = usize::try_from(len).map_err(|_| CryptoError::TruncatedTransaction(field))?;
        self.take(len, field)
    }
}
