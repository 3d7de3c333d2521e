//! Stdin-to-stdout filter pipeline
//!
//! One blocking read of the whole input, one in-memory transformation, one
//! write of the whole output. Any failure propagates before a single byte
//! reaches stdout; there is no partial-output mode.

use crate::config::DeliveryConfig;
use crate::transform;
use crate::utils::error::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

/// Run the full filter: read one YAML document from stdin, apply the
/// delivery defaults, write the result to stdout.
pub async fn run_filter() -> Result<()> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    debug!(bytes = input.len(), "read delivery config from stdin");

    let output = preprocess(&input)?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

/// Parse, transform, and re-serialize a delivery config document.
pub fn preprocess(input: &str) -> Result<String> {
    let mut config: DeliveryConfig = serde_yaml::from_str(input)?;
    transform::apply_delivery_defaults(&mut config);
    Ok(serde_yaml::to_string(&config)?)
}
