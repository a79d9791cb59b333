//! answerdoc-export
//!
//! DOCX + PDF generation from markdown-ish answer text.

pub mod canvas;
pub mod docx;
pub mod error;
pub mod export;
pub mod flow;
pub mod pdf;
pub mod styles;
