use anyhow::{Context, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<Value> {
    let url = format!("{}/{}?{}", base_url.trim_end_matches('/'), endpoint, params);
    log::debug!("GET {}", url);

    let res = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)
        .with_context(|| format!("Malformed JSON from {}", url))?;

    Ok(data)
}

/// Returns the first element of a JSON array, or `None` when the array is empty.
pub fn parse_first_entry<T>(data: Value, error_msg: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => match items.into_iter().next() {
            Some(item) => serde_json::from_value(item)
                .map(Some)
                .with_context(|| error_msg.to_string()),
            None => Ok(None),
        },
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
