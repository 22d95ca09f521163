mod wav;
pub use wav::*;
pub mod encoder;
pub mod structs;

/// Channel count baked into every emitted header. The CLI banner derives its
/// wording from this constant too, so header and banner cannot disagree.
pub const NUM_CHANNELS: u16 = 1;
/// Sample width baked into every emitted header.
pub const BITS_PER_SAMPLE: u16 = 16;
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;
