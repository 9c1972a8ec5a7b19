//! MCP Server implementation using rmcp

use crate::latex;
use crate::pdf::PdfReader;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::{
    handler::server::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    schemars::JsonSchema, tool, tool_handler, tool_router, ServerHandler,
};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Port the HTTP listener binds to when `PORT` is unset or unparseable
pub const DEFAULT_PORT: u16 = 8000;

/// Listener and toolchain configuration for the Academic Tools MCP Server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address the HTTP listener binds to
    pub host: String,
    /// TCP port for the HTTP listener
    pub port: u16,
    /// TeX engine invoked by `compile_latex_to_pdf`
    pub latex_command: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            latex_command: latex::DEFAULT_COMPILER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment. `PORT` selects the listener
    /// port; everything else keeps its default.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok().as_deref()),
            ..Self::default()
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractPdfTextParams {
    /// Absolute or relative path to the PDF file
    pub file_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompileLatexParams {
    /// Absolute or relative path to the LaTeX .tex file
    pub file_path: String,
}

// ============================================================================
// Server
// ============================================================================

/// Academic Tools MCP Server
#[derive(Clone)]
pub struct AcademicServer {
    config: Arc<ServerConfig>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AcademicServer {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new AcademicServer with full configuration
    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    /// Extract the full text of a PDF document
    #[tool(
        description = "Extract all text from a PDF file. Returns a single string containing the text of every page in document order, or an error message if the file cannot be processed."
    )]
    async fn extract_pdf_text(
        &self,
        Parameters(params): Parameters<ExtractPdfTextParams>,
    ) -> String {
        match self.process_extract_pdf_text(&params) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, path = %params.file_path, "extract_pdf_text failed");
                e.extraction_message()
            }
        }
    }

    /// Compile a .tex source file into a PDF
    #[tool(
        description = "Compile a .tex file into a PDF using the pdflatex engine. Returns \"Success\" if the compilation succeeds, or \"Error\" followed by the compiler output if it fails. Output artifacts are written to the directory containing the .tex source."
    )]
    async fn compile_latex_to_pdf(
        &self,
        Parameters(params): Parameters<CompileLatexParams>,
    ) -> String {
        match self.process_compile_latex(&params).await {
            Ok(()) => "Success".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, path = %params.file_path, "compile_latex_to_pdf failed");
                e.compilation_message()
            }
        }
    }
}

impl AcademicServer {
    /// Open the document and concatenate the text of every page
    pub fn process_extract_pdf_text(&self, params: &ExtractPdfTextParams) -> crate::error::Result<String> {
        let reader = PdfReader::open(Path::new(&params.file_path))?;
        tracing::debug!(
            path = %params.file_path,
            pages = reader.page_count(),
            "extracted PDF text"
        );
        Ok(reader.concatenated_text())
    }

    /// Run the configured TeX engine against the source file
    pub async fn process_compile_latex(&self, params: &CompileLatexParams) -> crate::error::Result<()> {
        latex::compile(&self.config.latex_command, Path::new(&params.file_path)).await
    }
}

impl Default for AcademicServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for AcademicServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Academic Tools MCP Server provides PDF text extraction and LaTeX compilation. \
                 Both tools take a file path; compile_latex_to_pdf writes its output next to \
                 the .tex source."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server with configuration taken from the environment
pub async fn run_server() -> crate::error::Result<()> {
    run_server_with_config(ServerConfig::from_env()).await
}

/// Run the MCP server with full configuration
///
/// Binds the configured address and serves the streamable HTTP transport at
/// `/mcp` until the process is terminated.
pub async fn run_server_with_config(config: ServerConfig) -> crate::error::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "Academic Tools MCP Server listening");

    let service = StreamableHttpService::new(
        move || Ok(AcademicServer::with_config(config.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    axum::serve(listener, router).await?;

    Ok(())
}
