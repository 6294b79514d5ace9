/*!
 Data structures for the two fixed-width header records that frame a `pbzx` stream.

 All header integers are big-endian. Each record is read in full or not at all:
 running out of bytes partway through a header is a framing error, not an
 end-of-stream condition.
*/

use std::io::{Error, ErrorKind, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::pbzx::{PbzxError, StreamPhase};

/// Magic number identifying a `pbzx` stream: the ASCII bytes `pbzx`
pub const MAGIC: u32 = 0x7062_7a78;

/// Bit 24 of a header's `flags` field; set when another chunk follows
pub const CONTINUATION_BIT: u64 = 0x100_0000;

/// The 12-byte record at the start of every `pbzx` stream
///
/// Exists only for the duration of one decode call; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroHeader {
    /// Must equal [`MAGIC`]
    pub magic: u32,
    /// Carries the continuation bit for the first chunk
    pub flags: u64,
}

impl IntroHeader {
    /// Read an intro header from the start of `source`
    ///
    /// Fails with [`PbzxError::TruncatedHeader`] if fewer than 12 bytes are
    /// available, including an immediately empty source.
    pub fn from_reader<R: Read + ?Sized>(source: &mut R) -> Result<Self, PbzxError> {
        let magic = source
            .read_u32::<BigEndian>()
            .map_err(|why| read_failure(why, StreamPhase::Intro))?;
        let flags = source
            .read_u64::<BigEndian>()
            .map_err(|why| read_failure(why, StreamPhase::Intro))?;
        Ok(Self { magic, flags })
    }

    /// Whether the continuation bit promises a first chunk
    pub fn has_next_chunk(&self) -> bool {
        self.flags & CONTINUATION_BIT != 0
    }
}

/// The 16-byte record in front of each chunk's payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Carries the continuation bit for the chunk after this one
    pub flags: u64,
    /// Exact byte length of the payload that directly follows this header
    pub size: u64,
}

impl ChunkHeader {
    /// Read the header of the chunk at index `chunk` from `source`
    ///
    /// Fails with [`PbzxError::TruncatedHeader`] if fewer than 16 bytes are
    /// available; a clean end-of-stream here is still an error, because the
    /// previous header's continuation bit promised more data.
    pub fn from_reader<R: Read + ?Sized>(source: &mut R, chunk: u64) -> Result<Self, PbzxError> {
        let phase = StreamPhase::ChunkHeader(chunk);
        let flags = source
            .read_u64::<BigEndian>()
            .map_err(|why| read_failure(why, phase))?;
        let size = source
            .read_u64::<BigEndian>()
            .map_err(|why| read_failure(why, phase))?;
        Ok(Self { flags, size })
    }

    /// Whether the continuation bit promises a chunk after this one
    pub fn has_next_chunk(&self) -> bool {
        self.flags & CONTINUATION_BIT != 0
    }
}

/// Running out of bytes mid-header is a framing problem; anything else is an I/O fault
fn read_failure(why: Error, phase: StreamPhase) -> PbzxError {
    if why.kind() == ErrorKind::UnexpectedEof {
        PbzxError::TruncatedHeader(phase)
    } else {
        PbzxError::Io(phase, why)
    }
}
