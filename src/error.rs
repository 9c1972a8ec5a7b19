//! Error types for the Academic Tools MCP Server

use thiserror::Error;

/// Result type alias for the Academic Tools MCP Server
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Academic Tools MCP Server
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TeX engine binary could not be located or launched
    #[error("LaTeX compiler '{command}' not found")]
    CompilerNotFound { command: String },

    /// TeX engine ran but exited with a non-zero status
    #[error("LaTeX compilation failed")]
    CompilerFailed { stdout: String, stderr: String },
}

impl Error {
    /// Render this error as the string reported by the `extract_pdf_text`
    /// tool. Callers detect failure by the leading prefix, so the shape of
    /// this string is part of the tool contract. Log details via tracing
    /// before calling this.
    pub fn extraction_message(&self) -> String {
        format!("Error extracting text from PDF: {}", self)
    }

    /// Render this error as the string reported by the `compile_latex_to_pdf`
    /// tool. A missing engine and a failed compilation each have a fixed
    /// shape callers match on; anything else is reported as unexpected.
    pub fn compilation_message(&self) -> String {
        match self {
            Error::CompilerNotFound { command } => format!(
                "Error: '{}' command not found. Is LaTeX installed and in your PATH?",
                command
            ),
            Error::CompilerFailed { stdout, stderr } => {
                format!("Error: {}\n{}", stdout, stderr)
            }
            other => format!("An unexpected error occurred: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_message_prefix() {
        let err = Error::PdfNotFound {
            path: "/missing/doc.pdf".to_string(),
        };
        let message = err.extraction_message();
        assert!(message.starts_with("Error extracting text from PDF: "));
        assert!(message.contains("/missing/doc.pdf"));
    }

    #[test]
    fn test_compiler_not_found_message_is_literal() {
        let err = Error::CompilerNotFound {
            command: "pdflatex".to_string(),
        };
        assert_eq!(
            err.compilation_message(),
            "Error: 'pdflatex' command not found. Is LaTeX installed and in your PATH?"
        );
    }

    #[test]
    fn test_compiler_failed_message_joins_both_streams() {
        let err = Error::CompilerFailed {
            stdout: "! Undefined control sequence.".to_string(),
            stderr: "exit status 1".to_string(),
        };
        assert_eq!(
            err.compilation_message(),
            "Error: ! Undefined control sequence.\nexit status 1"
        );
    }

    #[test]
    fn test_unexpected_compilation_error() {
        let err = Error::Io(std::io::Error::other("spawn interrupted"));
        let message = err.compilation_message();
        assert!(message.starts_with("An unexpected error occurred: "));
        assert!(message.contains("spawn interrupted"));
    }
}
