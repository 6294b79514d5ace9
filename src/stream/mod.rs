/*!
 Contains logic and data structures used to strip the framing from `pbzx` streams.

 ## Overview

 `pbzx` is a chunked container format used to hold the large payload entries of
 Apple's `.xip` archives, such as the `Contents` file inside the enclosing xar
 archive. A 12-byte intro header identifies the stream, then chunks follow
 back to back, each one a 16-byte header plus a declared number of payload bytes.

 The framing carries no chunk count. Whether another chunk follows is decided
 solely by the continuation bit of the most recently read header: the intro
 header before the first chunk, then each chunk header in turn.

 ## Features

 - Single pass over the source with bounded memory, regardless of stream size
 - Exact accounting of payload bytes written, on success and on failure
 - Robust error handling for malformed or truncated streams

 The decoded output is the byte-for-byte concatenation of every chunk's payload
 in stream order, itself a back-to-back sequence of compressed sub-streams meant
 for a separate decompression stage. This module performs no decompression.

 Logic referenced from Michael Lynn's original write-up of the format:
   - [`parse_pbzx.py`](https://gist.github.com/pudquick/ff412bcb29c9c1fa4b8d)
*/

pub mod models;
pub mod parser;

mod tests;

pub use parser::copy;
