use binrw::binrw;

// note: minimal canonical wav layout, a RIFF header followed by a "fmt " chunk
// and a "data" chunk. The three headers together are 44 bytes, everything is
// little-endian.

#[binrw]
#[brw(little, magic = b"RIFF")]
#[br(assert(format == *b"WAVE"))]
#[derive(Debug, Default, Clone)]
pub struct RiffHeader {
    // 36 + size of the data section
    pub chunk_size: u32,
    #[br(temp)]
    #[bw(calc = *b"WAVE")]
    format: [u8; 4],
}

impl RiffHeader {
    pub fn byte_len() -> u32 {
        12
    }
}

#[binrw]
#[brw(little, magic = b"fmt ")]
#[br(assert(subchunk_size == 16), assert(audio_format == 1))]
#[derive(Debug, Default, Clone)]
pub struct FmtChunk {
    // always 16 for plain PCM
    #[br(temp)]
    #[bw(calc = 16)]
    subchunk_size: u32,
    // 1 = linear PCM
    #[br(temp)]
    #[bw(calc = 1)]
    audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FmtChunk {
    pub fn byte_len() -> u32 {
        24
    }
}

#[binrw]
#[brw(little, magic = b"data")]
#[derive(Debug, Default, Clone)]
pub struct DataHeader {
    pub data_size: u32,
}

impl DataHeader {
    pub fn byte_len() -> u32 {
        8
    }
}
