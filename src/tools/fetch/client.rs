use super::headers::default_headers;
use super::types::{FetchSettings, ProxySettings};
use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::{redirect, Proxy};

const REDIRECT_LIMIT: usize = 10;

/// Build the blocking client shared by every request of a run.
pub(crate) fn build_client(settings: &FetchSettings) -> Result<Client> {
    let mut builder = Client::builder()
        .default_headers(default_headers(&settings.user_agent)?)
        .cookie_store(true)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(settings.timeout);

    for proxy in proxies(&settings.proxy)? {
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}

fn proxies(settings: &ProxySettings) -> Result<Vec<Proxy>> {
    let mut out = Vec::new();
    if let Some(url) = non_empty(&settings.http) {
        out.push(Proxy::http(url)?);
    }
    if let Some(url) = non_empty(&settings.https) {
        out.push(Proxy::https(url)?);
    }
    Ok(out)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
