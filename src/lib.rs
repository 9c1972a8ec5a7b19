//! Academic Tools MCP Server Library
//!
//! This crate provides MCP tools for academic document workflows:
//! - `extract_pdf_text`: Extract the full text of a PDF document
//! - `compile_latex_to_pdf`: Compile a LaTeX source file with pdflatex

pub mod error;
pub mod latex;
pub mod pdf;
pub mod server;

pub use error::{Error, Result};
pub use server::{
    run_server, run_server_with_config, AcademicServer, CompileLatexParams, ExtractPdfTextParams,
    ServerConfig,
};
