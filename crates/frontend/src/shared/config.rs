use contracts::usecases::u102_query_documents::DEFAULT_N_RESULTS;
use serde::Deserialize;

/// Name of the `<meta>` tag that overrides the API base URL
pub const API_BASE_META: &str = "api-base";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QueryConfig {
    #[serde(default = "default_n_results")]
    pub n_results: u32,
}

fn default_n_results() -> u32 {
    DEFAULT_N_RESULTS
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            n_results: DEFAULT_N_RESULTS,
        }
    }
}

/// Default configuration embedded in the wasm binary
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

const FALLBACK_BASE_URL: &str = "http://localhost:8000";

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: FALLBACK_BASE_URL.to_string(),
            },
            query: QueryConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Replace the base URL when `value` is present and not blank
    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        self
    }
}

pub fn parse_config(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration for the running page
///
/// Search order:
/// 1. `<meta name="api-base">` in the host document (base URL only)
/// 2. Embedded `config.toml`
/// 3. Built-in defaults, if the embedded file does not parse
pub fn load_config() -> ClientConfig {
    let config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config.toml is invalid, using defaults: {}", e);
            ClientConfig::default()
        }
    };
    let config = config.with_base_url_override(meta_content(API_BASE_META));
    log::info!("Document service at {}", config.api.base_url);
    config
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.query.n_results, 3);
    }

    #[test]
    fn test_query_section_is_optional() {
        let config = parse_config("[api]\nbase_url = \"http://search:9000\"\n").unwrap();
        assert_eq!(config.query.n_results, DEFAULT_N_RESULTS);
    }

    #[test]
    fn test_missing_api_section_is_an_error() {
        assert!(parse_config("[query]\nn_results = 5\n").is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default()
            .with_base_url_override(Some("https://search.example.com/ ".into()));
        assert_eq!(config.api.base_url, "https://search.example.com");

        let untouched = ClientConfig::default().with_base_url_override(Some("   ".into()));
        assert_eq!(untouched.api.base_url, FALLBACK_BASE_URL);

        let absent = ClientConfig::default().with_base_url_override(None);
        assert_eq!(absent, ClientConfig::default());
    }

    #[test]
    fn test_default_page_leaves_base_url_to_config_toml() {
        let mut page = include_str!("../../index.html");
        let mut live = String::new();
        while let Some(start) = page.find("<!--") {
            live.push_str(&page[..start]);
            page = page[start..].split_once("-->").map_or("", |(_, rest)| rest);
        }
        live.push_str(page);
        assert!(!live.contains(API_BASE_META));
    }
}
