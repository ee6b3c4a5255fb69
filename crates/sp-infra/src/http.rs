use std::time::Duration;

use anyhow::Context;

/// Build the shared HTTP client. A zero timeout means no timeout.
pub fn build_http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        "sealpost/",
        env!("CARGO_PKG_VERSION")
    ));
    if !timeout.is_zero() {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build HTTP client")
}
