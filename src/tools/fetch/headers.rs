use crate::error::{Result, ScrapeError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_DEFAULT: &str = "en-US,en;q=0.9";

/// Default request headers, including User-Agent.
pub(crate) fn default_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_DEFAULT));

    let ua = HeaderValue::from_str(user_agent.trim())
        .map_err(|_| ScrapeError::config(format!("invalid user agent: {user_agent:?}")))?;
    headers.insert(USER_AGENT, ua);

    Ok(headers)
}
