use serde::{Deserialize, Serialize};

use crate::session::Field;

#[derive(Debug, derive_more::Display)]
pub enum Error {
    #[display("no settings element in the page")]
    MissingElement,
    #[display("malformed settings: {_0}")]
    Json(serde_json::Error),
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the drive API, without a trailing slash.
    pub api_url: String,
    /// Persistent-storage slot holding the auth token.
    pub token_key: String,
    pub user_key: String,
}

impl Settings {
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }

    pub fn key(&self, field: Field) -> &str {
        match field {
            Field::Token => &self.token_key,
            Field::User => &self.user_key,
        }
    }

    /// Parses the settings document; `null` means defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str::<Option<Self>>(json)?.unwrap_or_default())
    }

    /// Reads `<script id="settings">` from the page, falling back to the
    /// defaults when it is missing or malformed.
    pub fn load() -> Self {
        match Self::read_from_page().and_then(|json| Self::from_json(&json)) {
            Ok(settings) => settings,
            Err(Error::MissingElement) => Self::default(),
            Err(e) => {
                tracing::warn!("using default settings: {}", e);
                Self::default()
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn read_from_page() -> Result<String, Error> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector("script[id='settings']").ok())
            .flatten()
            .map(|element| element.inner_html())
            .ok_or(Error::MissingElement)
    }

    #[cfg(not(feature = "hydrate"))]
    fn read_from_page() -> Result<String, Error> {
        Err(Error::MissingElement)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".into(),
            token_key: "token".into(),
            user_key: "user".into(),
        }
    }
}
