//! PDF processing layer
//!
//! Text extraction is backed by PDFium.

mod reader;

pub use reader::PdfReader;
