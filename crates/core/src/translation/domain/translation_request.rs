use serde::Serialize;

use crate::language::domain::catalog;

/// A single translation attempt. Auto-detect is already resolved to a
/// concrete code by the time a request exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_code: String,
    pub target_code: String,
}

/// JSON body expected by the translation endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RequestBody<'a> {
    pub q: &'a str,
    pub langpair: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source_id: &str, target_id: &str) -> Self {
        Self {
            text: text.into(),
            source_code: catalog::resolve_code(source_id).to_string(),
            target_code: target_id.to_string(),
        }
    }

    /// `"<from>|<to>"`.
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source_code, self.target_code)
    }

    pub fn body(&self) -> RequestBody<'_> {
        RequestBody {
            q: &self.text,
            langpair: self.langpair(),
        }
    }
}
