/*!
 Errors that can happen when decoding a `pbzx` stream.
*/

use std::{
    fmt::{Display, Formatter, Result},
    io,
};

/// The position in a `pbzx` stream where a fault occurred
///
/// Chunk indexes count from zero in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    /// The 12-byte intro header at the start of the stream
    Intro,
    /// The 16-byte header of the chunk with this index
    ChunkHeader(u64),
    /// The payload of the chunk with this index
    Payload(u64),
}

impl Display for StreamPhase {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            StreamPhase::Intro => write!(fmt, "intro header"),
            StreamPhase::ChunkHeader(chunk) => write!(fmt, "header of chunk {chunk}"),
            StreamPhase::Payload(chunk) => write!(fmt, "payload of chunk {chunk}"),
        }
    }
}

/// Errors that can happen when decoding a `pbzx` stream
#[derive(Debug)]
pub enum PbzxError {
    /// The intro header's magic field did not match [`MAGIC`](crate::stream::models::MAGIC);
    /// the source is not a `pbzx` stream at all
    InvalidMagic(u32),
    /// The source ran out of bytes inside a fixed-width header
    TruncatedHeader(StreamPhase),
    /// The source ran out of bytes before a chunk's declared payload length was reached
    TruncatedPayload {
        chunk: u64,
        copied: u64,
        expected: u64,
    },
    /// A read or write fault unrelated to the framing itself
    Io(StreamPhase, io::Error),
    /// The stream carried more chunks than [`MAX_CHUNKS`](crate::stream::parser::MAX_CHUNKS)
    ChunkLimit(u64),
}

impl Display for PbzxError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            PbzxError::InvalidMagic(magic) => {
                write!(fmt, "source is not a pbzx stream, magic was {magic:#010x}")
            }
            PbzxError::TruncatedHeader(phase) => {
                write!(fmt, "stream ended inside the {phase}")
            }
            PbzxError::TruncatedPayload {
                chunk,
                copied,
                expected,
            } => {
                write!(
                    fmt,
                    "payload of chunk {chunk} ended after {copied} of {expected} bytes"
                )
            }
            PbzxError::Io(phase, why) => write!(fmt, "I/O fault at the {phase}: {why}"),
            PbzxError::ChunkLimit(limit) => {
                write!(fmt, "stream exceeded the limit of {limit} chunks")
            }
        }
    }
}

/// A decode failure paired with the exact number of payload bytes already
/// written to the destination, so callers know how much valid prefix output exists
///
/// The destination is never rolled back; cleanup of partial output belongs to the caller.
#[derive(Debug)]
pub struct CopyError {
    /// Payload bytes written to the destination before the failure
    pub written: u64,
    /// What went wrong
    pub kind: PbzxError,
}

impl Display for CopyError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        write!(fmt, "{} (wrote {} bytes)", self.kind, self.written)
    }
}
