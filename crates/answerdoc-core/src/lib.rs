//! answerdoc-core
//!
//! Pure text vocabulary shared by the renderers and the server: line
//! classification, inline bold spans, download filenames, and the
//! last-answer slot. No I/O and no fallible operations.

pub mod answer;
pub mod filename;
pub mod markup;
pub mod spans;
