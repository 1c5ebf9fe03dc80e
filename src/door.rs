use reqwest::Client;
use std::time::Duration;

use crate::state::Outcome;

/// Exact response body the relay sends when the door actually clicked open.
pub const SUCCESS_SENTINEL: &str = "Clicked!";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fire the door trigger: one POST with an empty body to the configured
/// endpoint. Never returns an error; every way the request can go wrong
/// collapses into an [`Outcome`] for the display to render.
///
/// Non-2xx statuses are treated as transport failures rather than parsed as
/// body text. The relay reports failures in a 200 body, so a bad status
/// means something between us and the relay broke.
pub async fn open(client: &Client, url: &str) -> Outcome {
    let resp = match client
        .post(url)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("Door request failed: {}", e);
            return Outcome::TransportFailure;
        }
    };

    let resp = match resp.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("Door endpoint returned error status: {}", e);
            return Outcome::TransportFailure;
        }
    };

    match resp.text().await {
        Ok(body) => classify(&body),
        Err(e) => {
            log::error!("Failed to read door response body: {}", e);
            Outcome::TransportFailure
        }
    }
}

/// Map a response body onto an outcome: the sentinel means success, any
/// other non-empty text is the relay's failure reason, an empty body is
/// anyone's guess.
pub fn classify(body: &str) -> Outcome {
    if body == SUCCESS_SENTINEL {
        Outcome::Success
    } else if body.is_empty() {
        Outcome::Unknown
    } else {
        Outcome::ServerFailure(body.to_string())
    }
}

#[cfg(test)]
#[path = "tests/door_tests.rs"]
mod tests;
