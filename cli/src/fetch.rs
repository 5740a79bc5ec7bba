//! Source retrieval: local files, stdin and HTTP(S) URLs.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use pagedhtml::{Error, Result};

const USER_AGENT: &str = concat!("pagedhtml/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local file
    File(String),
    /// Standard input (`-`)
    Stdin,
    /// Remote document
    Url(String),
}

impl Source {
    /// Classify a command-line source argument.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_string())
        } else {
            Source::File(arg.to_string())
        }
    }

    /// Label recorded as the document source.
    pub fn label(&self) -> &str {
        match self {
            Source::File(path) | Source::Url(path) => path,
            Source::Stdin => "<stdin>",
        }
    }

    /// Read the whole source as bytes.
    ///
    /// Remote retrieval is a single attempt; any failure is fatal.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Source::File(path) => Ok(std::fs::read(Path::new(path))?),
            Source::Stdin => {
                let mut data = Vec::new();
                std::io::stdin().read_to_end(&mut data)?;
                Ok(data)
            }
            Source::Url(url) => {
                let rt = tokio::runtime::Runtime::new()?;
                rt.block_on(fetch(url))
            }
        }
    }
}

/// Download a document over HTTP(S).
pub async fn fetch(url: &str) -> Result<Vec<u8>> {
    log::debug!("Fetching {}", url);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .map_err(|e| Error::Retrieval(format!("failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::Retrieval(format!("{}: {}", url, e)))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Retrieval(format!("{}: {}", url, e)))?;

    log::debug!("Fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}
