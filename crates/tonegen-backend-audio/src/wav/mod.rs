//! Mono PCM WAV encoding.
//!
//! Output is the canonical 44-byte header followed by signed little-endian
//! samples. There are no timestamps or optional chunks, so identical input
//! always produces identical bytes.

mod format;
mod header;
mod pcm;
mod quantize;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use format::{WavFormat, MAX_BYTES_PER_SAMPLE};
pub use header::{WavHeader, FMT_CHUNK_SIZE, HEADER_LEN, PCM_FORMAT};
pub use pcm::{compute_pcm_hash, decode_wav, extract_pcm_data, DecodedWav};
pub use quantize::{dequantize_sample, quantize_sample, round_half_up, samples_to_pcm};
pub use result::WavResult;
pub use writer::{
    encode_wav, encode_with_format, pad_to_even, save_wav_file, write_bytes_to_file, write_wav,
};
