#[cfg(test)]
mod models_tests {
    use crate::error::pbzx::{PbzxError, StreamPhase};
    use crate::stream::models::{ChunkHeader, IntroHeader, CONTINUATION_BIT, MAGIC};

    fn intro_bytes(magic: u32, flags: u64) -> Vec<u8> {
        let mut bytes = vec![];
        bytes.extend(magic.to_be_bytes());
        bytes.extend(flags.to_be_bytes());
        bytes
    }

    fn chunk_bytes(flags: u64, size: u64) -> Vec<u8> {
        let mut bytes = vec![];
        bytes.extend(flags.to_be_bytes());
        bytes.extend(size.to_be_bytes());
        bytes
    }

    #[test]
    fn test_magic_is_ascii_pbzx() {
        assert_eq!(MAGIC, u32::from_be_bytes(*b"pbzx"));
    }

    #[test]
    fn test_parse_intro_header() {
        let bytes = intro_bytes(MAGIC, CONTINUATION_BIT);

        let header = IntroHeader::from_reader(&mut bytes.as_slice()).unwrap();

        assert_eq!(header.magic, MAGIC);
        assert_eq!(header.flags, CONTINUATION_BIT);
    }

    #[test]
    fn test_intro_continuation_bit() {
        let set = IntroHeader {
            magic: MAGIC,
            flags: CONTINUATION_BIT,
        };
        let clear = IntroHeader {
            magic: MAGIC,
            flags: 0,
        };
        // Every bit except bit 24
        let other_bits = IntroHeader {
            magic: MAGIC,
            flags: !CONTINUATION_BIT,
        };

        assert!(set.has_next_chunk());
        assert!(!clear.has_next_chunk());
        assert!(!other_bits.has_next_chunk());
    }

    #[test]
    fn test_intro_truncated() {
        let bytes = intro_bytes(MAGIC, CONTINUATION_BIT);

        for len in [0, 4, 11] {
            let result = IntroHeader::from_reader(&mut &bytes[..len]);
            assert!(matches!(
                result,
                Err(PbzxError::TruncatedHeader(StreamPhase::Intro))
            ));
        }
    }

    #[test]
    fn test_parse_chunk_header() {
        let bytes = chunk_bytes(CONTINUATION_BIT, 0x4000);

        let header = ChunkHeader::from_reader(&mut bytes.as_slice(), 0).unwrap();

        assert_eq!(header.flags, CONTINUATION_BIT);
        assert_eq!(header.size, 0x4000);
    }

    #[test]
    fn test_chunk_continuation_bit() {
        let set = ChunkHeader {
            flags: CONTINUATION_BIT,
            size: 0,
        };
        let clear = ChunkHeader { flags: 0, size: 0 };

        assert!(set.has_next_chunk());
        assert!(!clear.has_next_chunk());
    }

    #[test]
    fn test_chunk_truncated_reports_index() {
        let bytes = chunk_bytes(CONTINUATION_BIT, 0x4000);

        let result = ChunkHeader::from_reader(&mut &bytes[..10], 3);

        assert!(matches!(
            result,
            Err(PbzxError::TruncatedHeader(StreamPhase::ChunkHeader(3)))
        ));
    }
}
