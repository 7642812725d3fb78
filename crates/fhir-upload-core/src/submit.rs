use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::bundle::{bundle_resources, Bundle};
use crate::error::{Result, UploadError};
use crate::load::load_resources;

/// Upper bound for the whole submission, connect through last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Where the transaction Bundle is POSTed (the FHIR base URL).
    pub server_url: String,
    pub timeout: Duration,
}

impl UploadConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Status and raw body of the server's reply.
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl SubmitResponse {
    /// Turn a non-success status into [`UploadError::Status`], keeping the body.
    pub fn error_for_status(self) -> Result<Vec<u8>> {
        if self.status.is_success() {
            Ok(self.body)
        } else {
            Err(UploadError::Status {
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }
}

pub fn build_client(cfg: &UploadConfig) -> Result<Client> {
    Ok(Client::builder().timeout(cfg.timeout).build()?)
}

/// POST the Bundle once. No retries; a timeout surfaces as [`UploadError::Http`].
pub async fn submit_bundle(client: &Client, url: &str, bundle: &Bundle) -> Result<SubmitResponse> {
    info!("submitting {} entr(ies) to {url}", bundle.len());
    let resp = client.post(url).json(bundle).send().await?;
    let status = resp.status();
    let body = resp.bytes().await?.to_vec();
    debug!("server answered {status} ({} bytes)", body.len());
    Ok(SubmitResponse { status, body })
}

/// Load every file, bundle the resources and submit them as one transaction.
/// Returns the body of a successful response.
///
/// The server's body is written to `out` byte for byte before the status is checked, so a
/// rejected transaction still shows the server's OperationOutcome. Nothing is
/// sent when any file fails to load.
pub async fn load_and_submit(
    client: &Client,
    cfg: &UploadConfig,
    paths: &[PathBuf],
    out: &mut impl Write,
) -> Result<Vec<u8>> {
    let resources = load_resources(paths)?;
    let bundle = bundle_resources(resources);
    let resp = submit_bundle(client, &cfg.server_url, &bundle).await?;

    out.write_all(&resp.body).map_err(UploadError::Output)?;
    out.write_all(b"\n").map_err(UploadError::Output)?;
    out.flush().map_err(UploadError::Output)?;
    resp.error_for_status()
}
