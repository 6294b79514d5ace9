/*!
 Contains the decode loop that strips `pbzx` framing and emits the raw
 concatenation of chunk payloads.

 The loop alternates header reads with bounded payload copies. Any failure is
 fatal to the whole operation: there are no retries and no skip-and-continue,
 and every failure reports the exact number of payload bytes already written.
*/

use std::io::{ErrorKind, Read, Write};

use crate::{
    error::pbzx::{CopyError, PbzxError, StreamPhase},
    stream::models::{ChunkHeader, IntroHeader, MAGIC},
};

/// Payload bytes held in flight per read, the same bounded buffer size
/// `std::io::copy` uses; memory use is independent of chunk and stream size
const COPY_BUF_LEN: usize = 8 * 1024;

/// Ceiling on the number of chunks accepted from one stream
///
/// The format transmits no chunk count, so corrupted continuation flags paired
/// with zero-length chunks could otherwise drive the decode loop forever. At
/// the 16 MiB payloads Apple's tooling emits, this bound still admits streams
/// in the tens of terabytes.
pub const MAX_CHUNKS: u64 = 1 << 20;

/// Copies the payload of every chunk in the `pbzx` stream `source` into
/// `destination`, with all framing removed, and returns the total number of
/// payload bytes written
///
/// Both handles are caller-owned; this function neither opens nor closes
/// anything, and never reads past the final chunk's payload. A stream whose
/// intro header has the continuation bit clear decodes to zero bytes.
///
/// On failure the returned [`CopyError`] pairs the fault with the exact count
/// of bytes already written, so callers can reason about partial output.
pub fn copy<W: Write + ?Sized, R: Read + ?Sized>(
    destination: &mut W,
    source: &mut R,
) -> Result<u64, CopyError> {
    let mut written: u64 = 0;

    let intro = IntroHeader::from_reader(source).map_err(|kind| CopyError { written, kind })?;
    if intro.magic != MAGIC {
        return Err(CopyError {
            written,
            kind: PbzxError::InvalidMagic(intro.magic),
        });
    }

    let mut more_chunks = intro.has_next_chunk();
    let mut chunk: u64 = 0;
    while more_chunks {
        if chunk >= MAX_CHUNKS {
            return Err(CopyError {
                written,
                kind: PbzxError::ChunkLimit(MAX_CHUNKS),
            });
        }
        let header =
            ChunkHeader::from_reader(source, chunk).map_err(|kind| CopyError { written, kind })?;
        // The loop is always gated on the flags of the header just read,
        // never the header before it.
        more_chunks = header.has_next_chunk();
        drain_chunk(destination, source, header.size, chunk, &mut written)
            .map_err(|kind| CopyError { written, kind })?;
        chunk += 1;
    }
    Ok(written)
}

/// Streams exactly `size` payload bytes of the chunk at index `chunk` from
/// `source` to `destination`, adding each write to `written` as it lands
///
/// Never requests more than the declared size, since the bytes after the
/// payload belong to the next header. A source that runs dry first is a
/// [`PbzxError::TruncatedPayload`]; any other fault on either handle is
/// [`PbzxError::Io`]. Interrupted reads are re-issued the way `std::io::copy`
/// re-issues them.
fn drain_chunk<W: Write + ?Sized, R: Read + ?Sized>(
    destination: &mut W,
    source: &mut R,
    size: u64,
    chunk: u64,
    written: &mut u64,
) -> Result<(), PbzxError> {
    let mut buf = [0u8; COPY_BUF_LEN];
    let mut remaining = size;
    while remaining > 0 {
        let want = remaining.min(COPY_BUF_LEN as u64) as usize;
        let got = match source.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(PbzxError::TruncatedPayload {
                    chunk,
                    copied: size - remaining,
                    expected: size,
                });
            }
            Ok(got) => got,
            Err(why) if why.kind() == ErrorKind::Interrupted => continue,
            Err(why) if why.kind() == ErrorKind::UnexpectedEof => {
                return Err(PbzxError::TruncatedPayload {
                    chunk,
                    copied: size - remaining,
                    expected: size,
                });
            }
            Err(why) => return Err(PbzxError::Io(StreamPhase::Payload(chunk), why)),
        };
        destination
            .write_all(&buf[..got])
            .map_err(|why| PbzxError::Io(StreamPhase::Payload(chunk), why))?;
        *written += got as u64;
        remaining -= got as u64;
    }
    Ok(())
}
