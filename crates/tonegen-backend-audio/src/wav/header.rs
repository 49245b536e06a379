//! Canonical 44-byte RIFF/WAVE PCM header.

use std::io::{self, Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use tracing::debug;

use crate::error::{AudioError, AudioResult};

use super::format::{WavFormat, MAX_BYTES_PER_SAMPLE};

/// Size of the header in bytes; sample data starts at this offset.
pub const HEADER_LEN: usize = 44;

/// Size of the PCM `fmt ` chunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;

/// `AudioFormat` tag for integer PCM.
pub const PCM_FORMAT: u16 = 1;

/// A validated WAV header ready to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Size of everything after the `ChunkSize` field.
    pub chunk_size: u32,
    /// Format parameters.
    pub format: WavFormat,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Length of the `data` chunk body in bytes.
    pub data_length: u32,
}

impl WavHeader {
    /// Builds the header for `data_length` bytes of sample data.
    ///
    /// Checks run in a fixed order and the first violation is returned:
    /// non-empty data, even data length, `ChunkSize` below 2^32, channel
    /// count and sample rate in range, valid sample width, then byte rate
    /// and block align within their fields.
    pub fn new(format: WavFormat, data_length: u64) -> AudioResult<Self> {
        let chunk_size = 4 + (8 + u64::from(FMT_CHUNK_SIZE)) + (8 + data_length);
        let block_align = format.block_align();
        let byte_rate = format.byte_rate();

        if data_length == 0 {
            return Err(AudioError::EmptyData);
        }
        if data_length % 2 != 0 {
            return Err(AudioError::OddDataLength {
                length: data_length,
            });
        }
        check_field("ChunkSize", chunk_size, u64::from(u32::MAX))?;
        check_nonzero_field("NumChannels", u64::from(format.channels), u64::from(u16::MAX))?;
        check_nonzero_field("SampleRate", u64::from(format.sample_rate), u64::from(u32::MAX))?;
        if format.bytes_per_sample == 0 || format.bytes_per_sample > MAX_BYTES_PER_SAMPLE {
            return Err(AudioError::InvalidBytesPerSample {
                bytes: u32::from(format.bytes_per_sample),
            });
        }
        check_field("ByteRate", byte_rate, u64::from(u32::MAX))?;
        check_nonzero_field("BlockAlign", block_align, u64::from(u16::MAX))?;

        debug!(chunk_size, byte_rate, block_align, data_length, "computed WAV header");

        Ok(Self {
            chunk_size: chunk_size as u32,
            format,
            byte_rate: byte_rate as u32,
            block_align: block_align as u16,
            data_length: data_length as u32,
        })
    }

    /// Writes the 44 header bytes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        // RIFF header
        writer.write_all(b"RIFF")?;
        writer.write_u32::<LittleEndian>(self.chunk_size)?;
        writer.write_all(b"WAVE")?;

        // fmt chunk
        writer.write_all(b"fmt ")?;
        writer.write_u32::<LittleEndian>(FMT_CHUNK_SIZE)?;
        writer.write_u16::<LittleEndian>(PCM_FORMAT)?;
        writer.write_u16::<LittleEndian>(self.format.channels)?;
        writer.write_u32::<LittleEndian>(self.format.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate)?;
        writer.write_u16::<LittleEndian>(self.block_align)?;
        writer.write_u16::<LittleEndian>(self.format.bits_per_sample())?;

        // data chunk
        writer.write_all(b"data")?;
        writer.write_u32::<LittleEndian>(self.data_length)?;

        Ok(())
    }

    /// Returns the header as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(HEADER_LEN);
        self.write_to(&mut buffer)
            .expect("writing to Vec should not fail");
        buffer
    }

    /// Parses a canonical 44-byte PCM header from the start of `bytes`.
    ///
    /// Only the layout this crate writes is accepted: `fmt ` immediately
    /// followed by `data`, integer PCM, mono, 8 or 16 bits.
    pub fn parse(bytes: &[u8]) -> AudioResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(AudioError::malformed(format!(
                "expected at least {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(&bytes[..HEADER_LEN]);
        expect_tag(&mut cursor, b"RIFF")?;
        let chunk_size = cursor.read_u32::<LittleEndian>()?;
        expect_tag(&mut cursor, b"WAVE")?;

        expect_tag(&mut cursor, b"fmt ")?;
        let fmt_size = cursor.read_u32::<LittleEndian>()?;
        if fmt_size != FMT_CHUNK_SIZE {
            return Err(AudioError::malformed(format!(
                "unsupported fmt chunk size {}",
                fmt_size
            )));
        }
        let audio_format = cursor.read_u16::<LittleEndian>()?;
        if audio_format != PCM_FORMAT {
            return Err(AudioError::malformed(format!(
                "unsupported audio format {} (expected PCM)",
                audio_format
            )));
        }
        let channels = cursor.read_u16::<LittleEndian>()?;
        let sample_rate = cursor.read_u32::<LittleEndian>()?;
        let byte_rate = cursor.read_u32::<LittleEndian>()?;
        let block_align = cursor.read_u16::<LittleEndian>()?;
        let bits_per_sample = cursor.read_u16::<LittleEndian>()?;

        expect_tag(&mut cursor, b"data")?;
        let data_length = cursor.read_u32::<LittleEndian>()?;

        if bits_per_sample % 8 != 0 {
            return Err(AudioError::malformed(format!(
                "unsupported bits per sample {}",
                bits_per_sample
            )));
        }
        let format = WavFormat::new(
            u32::from(channels),
            sample_rate,
            u32::from(bits_per_sample / 8),
        )?;
        if u64::from(block_align) != format.block_align() || u64::from(byte_rate) != format.byte_rate()
        {
            return Err(AudioError::malformed(
                "byte rate or block align inconsistent with format",
            ));
        }

        Ok(Self {
            chunk_size,
            format,
            byte_rate,
            block_align,
            data_length,
        })
    }
}

fn check_field(field: &'static str, value: u64, max: u64) -> AudioResult<()> {
    if value > max {
        return Err(AudioError::HeaderFieldOutOfRange { field, value });
    }
    Ok(())
}

fn check_nonzero_field(field: &'static str, value: u64, max: u64) -> AudioResult<()> {
    if value == 0 {
        return Err(AudioError::HeaderFieldOutOfRange { field, value });
    }
    check_field(field, value, max)
}

fn expect_tag(cursor: &mut Cursor<&[u8]>, tag: &[u8; 4]) -> AudioResult<()> {
    let mut found = [0u8; 4];
    cursor.read_exact(&mut found)?;
    if &found != tag {
        return Err(AudioError::malformed(format!(
            "expected tag {:?}, found {:?}",
            String::from_utf8_lossy(tag),
            String::from_utf8_lossy(&found)
        )));
    }
    Ok(())
}
