//! # Custom Axum Extractors
//!
//! The `plugin` query selector repeats (`?plugin=http&plugin=db`), which
//! the stock `Query` extractor cannot collect into a `Vec`, so the
//! selector gets its own extractor.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Requested component names, in request order.
///
/// An empty selector means "all registered components". Extraction never
/// rejects: a missing or malformed query string is simply an empty
/// selector.
#[derive(Debug, Clone, Default)]
pub struct PluginSelector {
    plugins: Vec<String>,
}

impl PluginSelector {
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PluginSelector
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let plugins = parts
            .uri
            .query()
            .map(parse_plugin_params)
            .unwrap_or_default();

        Ok(Self { plugins })
    }
}

fn parse_plugin_params(query: &str) -> Vec<String> {
    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == "plugin" && !value.is_empty()).then(|| value.to_string())
        })
        .collect()
}
