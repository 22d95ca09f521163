use crate::{structs::FmtChunk, PcmWav, BITS_PER_SAMPLE, NUM_CHANNELS};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum EncodingError {
    #[error("Sample rate must be a positive integer")]
    ZeroSampleRate,
    #[error("Sample rate {0} is too high to express a byte rate")]
    SampleRateTooHigh(u32),
    #[error("Payload of {0} bytes doesn't fit in a single RIFF chunk")]
    PayloadTooLarge(usize),
}

/// Wraps a raw PCM payload in the canonical 44-byte-header wav container.
///
/// The payload is taken verbatim, no resampling or byte-order conversion
/// happens. Channel count and sample width come from the crate constants.
pub fn encode_pcm(payload: Vec<u8>, sample_rate: u32) -> Result<PcmWav, EncodingError> {
    if sample_rate == 0 {
        return Err(EncodingError::ZeroSampleRate);
    }
    // both data_size and the RIFF size field (36 + data_size) are u32
    if payload.len() as u64 > (u32::MAX - 36) as u64 {
        return Err(EncodingError::PayloadTooLarge(payload.len()));
    }
    let block_align = NUM_CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate
        .checked_mul(block_align.into())
        .ok_or(EncodingError::SampleRateTooHigh(sample_rate))?;
    let fmt = FmtChunk {
        num_channels: NUM_CHANNELS,
        sample_rate,
        byte_rate,
        block_align,
        bits_per_sample: BITS_PER_SAMPLE,
    };
    Ok(PcmWav { fmt, data: payload })
}
