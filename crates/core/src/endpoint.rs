//! URL assembly for the search, lookup and chart endpoints.
//!
//! Query values are form-urlencoded and path segments are percent-encoded by
//! the `url` crate, so terms containing spaces, reserved characters or
//! non-ASCII text reach the API intact.

use url::Url;

use crate::error::{ItunesError, Result};
use crate::lookup::Chart;
use crate::params::Country;

/// Replaces the query of `base` with `pairs`, keeping their order.
pub fn assemble<K, V>(base: &str, pairs: &[(K, V)]) -> Result<Url>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        return Err(ItunesError::UrlConstruction(format!(
            "{} cannot be used as an endpoint",
            base
        )));
    }
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (key, value) in pairs {
            query.append_pair(key.as_ref(), value.as_ref());
        }
    }
    Ok(url)
}

/// `<lookup>?id=<id>`
pub fn lookup_url(base: &str, id: u64) -> Result<Url> {
    assemble(base, &[("id", id.to_string())])
}

/// `<charts>/<cc>/<category>/<feed>/all/<limit>/explicit.json`
pub fn chart_url(base: &str, country: Country, chart: Chart, limit: u32) -> Result<Url> {
    let mut url = Url::parse(base)?;
    let country = country.to_lowercase();
    let limit = limit.to_string();
    url.path_segments_mut()
        .map_err(|_| {
            ItunesError::UrlConstruction(format!("{} cannot be used as a chart base", base))
        })?
        .pop_if_empty()
        .extend([
            country.as_str(),
            chart.category(),
            chart.feed(),
            "all",
            limit.as_str(),
            "explicit.json",
        ]);
    Ok(url)
}
