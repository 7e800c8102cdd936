use std::time::Duration;

use serde::Deserialize;

use crate::translation::domain::translation_request::TranslationRequest;
use crate::translation::domain::translator::{TranslateError, Translator};

#[derive(Debug, Default, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Translator backed by the MyMemory HTTP API.
pub struct MyMemoryTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl MyMemoryTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TranslateError::Transport)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for MyMemoryTranslator {
    fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        log::debug!(
            "POST {} langpair={} ({} chars)",
            self.endpoint,
            request.langpair(),
            request.text.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request.body())
            .send()
            .map_err(TranslateError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body = response.text().map_err(TranslateError::Transport)?;
        parse_response(&body)
    }
}

/// Extract the translated text; absent fields mean an empty translation.
fn parse_response(body: &str) -> Result<String, TranslateError> {
    let parsed: MyMemoryResponse = serde_json::from_str(body).map_err(TranslateError::Decode)?;
    Ok(parsed
        .response_data
        .and_then(|d| d.translated_text)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_translated_text() {
        let body = r#"{"responseData":{"translatedText":"Bonjour, comment allez-vous?"}}"#;
        assert_eq!(
            parse_response(body).unwrap(),
            "Bonjour, comment allez-vous?"
        );
    }

    #[rstest]
    #[case::empty_object("{}")]
    #[case::null_data(r#"{"responseData":null}"#)]
    #[case::missing_text(r#"{"responseData":{}}"#)]
    fn test_parse_missing_text_is_empty(#[case] body: &str) {
        assert_eq!(parse_response(body).unwrap(), "");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"responseData":{"translatedText":"Hola","match":1},"responseStatus":200}"#;
        assert_eq!(parse_response(body).unwrap(), "Hola");
    }

    #[test]
    fn test_parse_invalid_json_is_decode_error() {
        assert!(matches!(
            parse_response("<html>"),
            Err(TranslateError::Decode(_))
        ));
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        let translator = MyMemoryTranslator::new(
            "http://invalid.nonexistent.example.com/get",
            Duration::from_secs(5),
        )
        .unwrap();
        let request = TranslationRequest::new("Hello", "en", "fr");

        let result = translator.translate(&request);

        assert!(matches!(result, Err(TranslateError::Transport(_))));
    }
}
