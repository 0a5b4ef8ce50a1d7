//! NCBI E-utilities client (esearch + efetch)
//!
//! Both calls degrade to an empty result on any failure. The error is
//! logged at debug level, so it only shows with `--debug`.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::Config;
use crate::parser::{PubmedArticle, parse_pubmed_xml};

#[derive(Debug, Deserialize)]
struct EsearchResponse {
    esearchresult: EsearchResult,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
    #[serde(rename = "ERROR")]
    error: Option<String>,
}

/// Extract PMIDs from an esearch JSON body.
pub fn parse_esearch_json(body: &str) -> Result<Vec<String>> {
    let response: EsearchResponse =
        serde_json::from_str(body).context("Failed to parse esearch response")?;
    if let Some(error) = response.esearchresult.error {
        anyhow::bail!("esearch error: {error}");
    }
    Ok(response.esearchresult.idlist)
}

/// Above this many ids, efetch sends them as a POST form body; NCBI
/// rejects the equivalent GET once the URL grows past a few kilobytes.
pub const POST_ID_THRESHOLD: usize = 200;

/// HTTP method used for an E-utilities request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

impl Method {
    fn for_id_count(count: usize) -> Self {
        if count > POST_ID_THRESHOLD {
            Self::Post
        } else {
            Self::Get
        }
    }
}

/// Client for the PubMed database over E-utilities
pub struct EutilsClient<'a> {
    config: &'a Config,
}

impl<'a> EutilsClient<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Parameters sent with every request.
    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("tool", self.config.tool.clone()),
        ];
        if let Some(email) = &self.config.email {
            params.push(("email", email.clone()));
        }
        if let Some(key) = &self.config.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    fn search_params(&self, query: &str, max_results: usize) -> Vec<(&'static str, String)> {
        let mut params = self.base_params();
        params.push(("term", query.to_string()));
        params.push(("retmax", max_results.to_string()));
        params.push(("retmode", "json".to_string()));
        params
    }

    fn fetch_params(&self, pmids: &[String]) -> Vec<(&'static str, String)> {
        let mut params = self.base_params();
        params.push(("id", pmids.join(",")));
        params.push(("retmode", "xml".to_string()));
        params
    }

    /// Search PubMed and return PMIDs.
    pub fn try_search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = self.config.endpoint("esearch.fcgi");
        let body = affilscan_core::get_text(&url, &self.search_params(query, max_results))
            .context("esearch request failed")?;
        let ids = parse_esearch_json(&body)?;
        log::debug!("esearch returned {} PMIDs", ids.len());
        Ok(ids)
    }

    /// Search PubMed; any failure yields no ids.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<String> {
        self.try_search(query, max_results).unwrap_or_else(|e| {
            log::debug!("Search error: {e:#}");
            Vec::new()
        })
    }

    /// Fetch and parse full records for the given PMIDs.
    pub fn try_fetch_records(&self, pmids: &[String]) -> Result<Vec<PubmedArticle>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.config.endpoint("efetch.fcgi");
        let params = self.fetch_params(pmids);
        let method = Method::for_id_count(pmids.len());
        log::debug!("efetch {} PMIDs via {method:?}", pmids.len());
        let xml = match method {
            Method::Get => affilscan_core::get_text(&url, &params),
            Method::Post => affilscan_core::post_form_text(&url, &params),
        }
        .context("efetch request failed")?;
        parse_pubmed_xml(&xml)
    }

    /// Fetch records; empty input makes no request, any failure yields no records.
    pub fn fetch_records(&self, pmids: &[String]) -> Vec<PubmedArticle> {
        self.try_fetch_records(pmids).unwrap_or_else(|e| {
            log::debug!("Fetch error: {e:#}");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> Config {
        Config {
            base_url: "http://127.0.0.1:9/eutils".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn parse_esearch_ids() {
        let body = r#"{"header":{"type":"esearch","version":"0.3"},
            "esearchresult":{"count":"2","retmax":"2","retstart":"0",
            "idlist":["39000001","39000002"],"translationset":[]}}"#;
        assert_eq!(
            parse_esearch_json(body).unwrap(),
            vec!["39000001", "39000002"]
        );
    }

    #[test]
    fn parse_esearch_without_idlist() {
        let body = r#"{"esearchresult":{"count":"0"}}"#;
        assert!(parse_esearch_json(body).unwrap().is_empty());
    }

    #[test]
    fn parse_esearch_error_field() {
        let body = r#"{"esearchresult":{"ERROR":"Invalid query"}}"#;
        let err = parse_esearch_json(body).unwrap_err();
        assert!(format!("{err}").contains("Invalid query"));
    }

    #[test]
    fn parse_esearch_garbage() {
        assert!(parse_esearch_json("<html>busy</html>").is_err());
    }

    #[test]
    fn params_include_optional_credentials() {
        let config = Config {
            email: Some("dev@example.com".to_string()),
            api_key: Some("k3y".to_string()),
            ..Default::default()
        };
        let client = EutilsClient::new(&config);
        let params = client.search_params("cancer", 5);

        assert!(params.contains(&("email", "dev@example.com".to_string())));
        assert!(params.contains(&("api_key", "k3y".to_string())));
        assert!(params.contains(&("term", "cancer".to_string())));
        assert!(params.contains(&("retmax", "5".to_string())));
    }

    #[test]
    fn params_omit_missing_credentials() {
        let config = Config::default();
        let params = EutilsClient::new(&config).fetch_params(&["1".to_string(), "2".to_string()]);

        assert!(params.iter().all(|(k, _)| *k != "api_key" && *k != "email"));
        assert!(params.contains(&("id", "1,2".to_string())));
    }

    #[test]
    fn large_id_sets_switch_to_post() {
        assert_eq!(Method::for_id_count(1), Method::Get);
        assert_eq!(Method::for_id_count(POST_ID_THRESHOLD), Method::Get);
        assert_eq!(Method::for_id_count(POST_ID_THRESHOLD + 1), Method::Post);
        assert_eq!(Method::for_id_count(10_000), Method::Post);
    }

    #[test]
    fn large_fetch_failure_degrades_to_empty() {
        let config = unreachable_config();
        let client = EutilsClient::new(&config);
        let pmids: Vec<String> = (0..10_000).map(|i| (39_000_000 + i).to_string()).collect();

        assert!(client.try_fetch_records(&pmids).is_err());
        assert!(client.fetch_records(&pmids).is_empty());
    }

    #[test]
    fn fetch_with_no_ids_skips_request() {
        let config = unreachable_config();
        let client = EutilsClient::new(&config);
        assert!(client.try_fetch_records(&[]).unwrap().is_empty());
    }

    #[test]
    fn failures_degrade_to_empty() {
        let config = unreachable_config();
        let client = EutilsClient::new(&config);
        assert!(client.try_search("cancer", 1).is_err());
        assert!(client.search("cancer", 1).is_empty());
        assert!(client.fetch_records(&["1".to_string()]).is_empty());
    }
}
