use gloo_net::http::Request;
use thiserror::Error;

use crate::model::Person;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("could not decode people: {0}")]
    Decode(String),
}

/// Fetches the full people list.
pub async fn get_people(url: &str) -> Result<Vec<Person>, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    parse_people(&body)
}

pub fn parse_people(body: &str) -> Result<Vec<Person>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_in_order() {
        let body = r#"[
            { "slug": "b", "name": "Bob", "sex": "m", "motherName": "Alice" },
            { "slug": "a", "name": "Alice", "sex": "f", "motherName": null }
        ]"#;

        let people = parse_people(body).unwrap();
        let slugs: Vec<&str> = people.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a"]);
    }

    #[test]
    fn empty_list_is_ok() {
        assert!(parse_people("[]").unwrap().is_empty());
    }

    #[test]
    fn non_list_body_is_decode_error() {
        let err = parse_people(r#"{ "people": [] }"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(FetchError::Status(404).to_string(), "server answered HTTP 404");
    }
}
