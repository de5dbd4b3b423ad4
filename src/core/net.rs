use url::Url;

use crate::core::{YfClient, YfError};

/// Issue one GET through the client's transport and return the body of a 2xx response.
///
/// Transport errors are returned as-is; non-2xx statuses become the matching status error.
pub(crate) async fn get_text(client: &YfClient, url: &Url, _endpoint: &str) -> Result<String, YfError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(endpoint = _endpoint, %url, "GET");

    let resp = client.transport().get(url).await?;

    if !resp.is_success() {
        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = _endpoint, status = resp.status, "non-success status");
        return Err(YfError::from_status(resp.status, url));
    }

    Ok(resp.body)
}
