use gloo::console::error;
use serde::Deserialize;
use web_sys::window;

pub const DEFAULT_API_URL: &str =
    "https://mate-academy.github.io/react_people-table/api/people.json";

// <script id="page-config" type="application/json">{ "api_url": "..." }</script>
const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub api_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: PageConfig = serde_json::from_str(json)?;
        cfg.api_url = cfg.api_url.trim().to_string();
        if cfg.api_url.is_empty() {
            cfg.api_url = DEFAULT_API_URL.into();
        }
        Ok(cfg)
    }

    /// Reads the optional config element from the host page, falling back to
    /// defaults when it is absent or unreadable.
    pub fn load() -> Self {
        let Some(json) = config_json_from_dom() else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(format!("Ignoring malformed #{CONFIG_ELEMENT_ID}: {e}"));
                Self::default()
            }
        }
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_api_url() {
        let cfg = PageConfig::from_json(r#"{ "api_url": " http://localhost:8080/people.json " }"#)
            .unwrap();
        assert_eq!(cfg.api_url, "http://localhost:8080/people.json");
    }

    #[test]
    fn empty_object_and_blank_url_keep_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
        assert_eq!(
            PageConfig::from_json(r#"{ "api_url": "  " }"#).unwrap().api_url,
            DEFAULT_API_URL
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{ api_url: ").is_err());
    }
}
