use std::io::{Read, Seek, SeekFrom, Write};

use binrw::{BinReaderExt, BinResult, BinWriterExt};

use crate::structs::{DataHeader, FmtChunk, RiffHeader};

/// A PCM wav file, format description plus the raw sample bytes.
#[derive(Debug, Clone)]
pub struct PcmWav {
    pub fmt: FmtChunk,
    // raw little-endian sample data, written verbatim
    pub data: Vec<u8>,
}

impl PcmWav {
    pub fn header_len() -> u32 {
        RiffHeader::byte_len() + FmtChunk::byte_len() + DataHeader::byte_len()
    }

    pub fn file_len(&self) -> u32 {
        Self::header_len() + self.data.len() as u32
    }

    pub fn duration_seconds(&self) -> f64 {
        // foreign files can carry a bogus zero byte rate
        if self.fmt.byte_rate == 0 {
            return 0.0;
        }
        self.data.len() as f64 / self.fmt.byte_rate as f64
    }

    pub fn parse_reader<RS: Read + Seek>(f: &mut RS) -> BinResult<Self> {
        f.read_le::<RiffHeader>()?;
        let fmt: FmtChunk = f.read_le()?;
        // scan for the data chunk, real files sometimes carry LIST or fact
        // chunks between fmt and data
        let data_header = loop {
            let id: [u8; 4] = f.read_le()?;
            let size: u32 = f.read_le()?;
            if &id == b"data" {
                break DataHeader { data_size: size };
            }
            // chunks are word aligned
            f.seek(SeekFrom::Current(i64::from(size) + i64::from(size & 1)))?;
        };
        let mut data = vec![0; data_header.data_size as usize];
        f.read_exact(&mut data)?;
        Ok(PcmWav { fmt, data })
    }

    pub fn write_wav<WS: Write + Seek>(&self, ws: &mut WS) -> BinResult<()> {
        ws.seek(SeekFrom::Start(0))?;
        let header = RiffHeader {
            // the RIFF size field doesn't count the magic and itself
            chunk_size: Self::header_len() - 8 + self.data.len() as u32,
        };
        ws.write_le(&header)?;
        ws.write_le(&self.fmt)?;
        ws.write_le(&DataHeader {
            data_size: self.data.len() as u32,
        })?;
        ws.write_all(&self.data)?;
        ws.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinWriterExt;

    use crate::encoder::encode_pcm;
    use crate::structs::{DataHeader, FmtChunk, RiffHeader};
    use crate::PcmWav;

    #[test]
    fn known_answer_header() {
        let wav = encode_pcm(vec![1, 2, 3, 4], 16000).unwrap();
        let mut buf = Cursor::new(Vec::new());
        wav.write_wav(&mut buf).unwrap();
        #[rustfmt::skip]
        let expected = [
            b'R', b'I', b'F', b'F', 0x28, 0x00, 0x00, 0x00,
            b'W', b'A', b'V', b'E',
            b'f', b'm', b't', b' ', 0x10, 0x00, 0x00, 0x00,
            // PCM, 1 channel
            0x01, 0x00, 0x01, 0x00,
            // 16000 Hz
            0x80, 0x3E, 0x00, 0x00,
            // 32000 bytes per second
            0x00, 0x7D, 0x00, 0x00,
            // block align 2, 16 bits per sample
            0x02, 0x00, 0x10, 0x00,
            b'd', b'a', b't', b'a', 0x04, 0x00, 0x00, 0x00,
            1, 2, 3, 4,
        ];
        assert_eq!(buf.into_inner(), expected);
    }

    #[test]
    fn empty_payload_is_header_only() {
        let wav = encode_pcm(Vec::new(), 16000).unwrap();
        let mut buf = Cursor::new(Vec::new());
        wav.write_wav(&mut buf).unwrap();
        let bytes = buf.into_inner();
        assert_eq!(bytes.len(), PcmWav::header_len() as usize);
        assert_eq!(&bytes[4..8], &[36, 0, 0, 0]);
        assert_eq!(&bytes[40..44], &[0, 0, 0, 0]);
    }

    #[test]
    fn parse_recovers_payload() {
        let payload: Vec<u8> = (0u8..=255).collect();
        let wav = encode_pcm(payload.clone(), 22050).unwrap();
        assert_eq!(wav.file_len(), 44 + payload.len() as u32);
        let mut buf = Cursor::new(Vec::new());
        wav.write_wav(&mut buf).unwrap();
        buf.set_position(0);
        let parsed = PcmWav::parse_reader(&mut buf).unwrap();
        assert_eq!(parsed.fmt.sample_rate, 22050);
        assert_eq!(parsed.fmt.num_channels, 1);
        assert_eq!(parsed.data, payload);
    }

    #[test]
    fn parse_skips_foreign_chunks() {
        let mut cur = Cursor::new(Vec::new());
        cur.write_le(&RiffHeader { chunk_size: 0 }).unwrap();
        cur.write_le(&FmtChunk {
            num_channels: 1,
            sample_rate: 8000,
            byte_rate: 16000,
            block_align: 2,
            bits_per_sample: 16,
        })
        .unwrap();
        // LIST chunk with 3 content bytes, padded to word alignment
        cur.write_le(b"LIST").unwrap();
        cur.write_le(&3u32).unwrap();
        cur.write_le(&[7u8, 7, 7, 0]).unwrap();
        cur.write_le(&DataHeader { data_size: 2 }).unwrap();
        cur.write_le(&[9u8, 9]).unwrap();
        cur.set_position(0);
        let parsed = PcmWav::parse_reader(&mut cur).unwrap();
        assert_eq!(parsed.fmt.sample_rate, 8000);
        assert_eq!(parsed.data, vec![9, 9]);
    }

    #[test]
    fn duration_from_byte_rate() {
        // 2 seconds of 16 bit mono at 8 kHz
        let wav = encode_pcm(vec![0; 2 * 8000 * 2], 8000).unwrap();
        assert!((wav.duration_seconds() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_byte_rate_has_zero_duration() {
        let wav = PcmWav {
            fmt: FmtChunk {
                num_channels: 1,
                sample_rate: 0,
                byte_rate: 0,
                block_align: 2,
                bits_per_sample: 16,
            },
            data: vec![0; 4],
        };
        assert_eq!(wav.duration_seconds(), 0.0);
    }
}
