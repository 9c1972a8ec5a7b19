//! LaTeX compilation layer
//!
//! Compilation shells out to an external TeX engine (`pdflatex` unless
//! configured otherwise) in non-interactive mode. The engine writes its
//! artifacts (PDF, log, aux files) next to the source file; partial output
//! from a failed run is left in place.

use crate::error::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// TeX engine invoked when no override is configured.
pub const DEFAULT_COMPILER: &str = "pdflatex";

/// Resolve the directory compiler artifacts are written to: the directory
/// component of the source path, or the current directory for a bare file
/// name.
pub fn output_directory(source: &Path) -> PathBuf {
    match source.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Compile a `.tex` source file with the given TeX engine.
///
/// The engine runs with `-interaction=nonstopmode` and an explicit
/// `-output-directory`, and both output streams are captured in full. A
/// non-zero exit status is returned as [`Error::CompilerFailed`] carrying
/// the captured streams; a missing engine binary is returned as
/// [`Error::CompilerNotFound`]. The subprocess is awaited for its full
/// duration with no timeout.
pub async fn compile(command: &str, source: &Path) -> Result<()> {
    let out_dir = output_directory(source);

    let output = Command::new(command)
        .arg("-interaction=nonstopmode")
        .arg(format!("-output-directory={}", out_dir.display()))
        .arg(source)
        .output()
        .await
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::CompilerNotFound {
                command: command.to_string(),
            },
            _ => Error::Io(e),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(Error::CompilerFailed {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_directory_with_parent() {
        assert_eq!(
            output_directory(Path::new("papers/drafts/main.tex")),
            PathBuf::from("papers/drafts")
        );
    }

    #[test]
    fn test_output_directory_absolute() {
        assert_eq!(
            output_directory(Path::new("/home/user/thesis.tex")),
            PathBuf::from("/home/user")
        );
    }

    #[test]
    fn test_output_directory_bare_file_name() {
        assert_eq!(output_directory(Path::new("main.tex")), PathBuf::from("."));
    }

    #[tokio::test]
    async fn test_compile_missing_engine() {
        let result = compile("definitely-not-a-tex-engine", Path::new("main.tex")).await;
        assert!(matches!(
            result,
            Err(Error::CompilerNotFound { ref command }) if command == "definitely-not-a-tex-engine"
        ));
    }

    #[tokio::test]
    async fn test_compile_zero_exit_is_success() {
        // `true` ignores its arguments and exits 0, standing in for a clean
        // engine run without requiring a TeX installation.
        let result = compile("true", Path::new("main.tex")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_compile_nonzero_exit_captures_streams() {
        let result = compile("false", Path::new("main.tex")).await;
        assert!(matches!(result, Err(Error::CompilerFailed { .. })));
    }
}
