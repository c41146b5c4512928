use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Ranking strategy understood by the search backend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Lucene,
    Mixer,
    #[serde(rename = "mixerpr")]
    MixerPr,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Lucene, Method::Mixer, Method::MixerPr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Lucene => "lucene",
            Method::Mixer => "mixer",
            Method::MixerPr => "mixerpr",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search method: {0:?}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = trim_input(s).to_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or(UnknownMethod(normalized))
    }
}

/// Trims whitespace plus the byte-order mark, which `str::trim` keeps.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// A validated search request, ready to be forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub method: Method,
    pub page: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Categories {
    #[serde(default)]
    pub html: Vec<String>,
    #[serde(default)]
    pub href: Vec<String>,
}

/// One hit as returned by the backend. `title` and `snippet` carry `<b>` highlight markup.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultPage {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub categories: Categories,
    pub last_modify: String,
    pub score: String,
}

/// Paginated hit data. Searches without hits only carry `hits` and `elapsedTime`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub page_no: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub hits: i64,
    #[serde(default)]
    pub pages: Vec<ResultPage>,
    #[serde(default)]
    pub elapsed_time: u64,
}

impl SearchPage {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_time as f64 / 1000.0
    }
}

/// The three shapes a backend body can take.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendReply {
    /// Well-formed answer with hit data.
    Found(SearchPage),
    /// `error: true`; carries the backend's `data` payload.
    Failed(Value),
    /// No `error` discriminator, or hit data that could not be read.
    Malformed(Value),
}

impl BackendReply {
    /// Any body with an `error` key is well-formed; only `error: true` is a failure.
    pub fn classify(body: Value) -> BackendReply {
        let Some(flag) = body.get("error") else {
            return BackendReply::Malformed(body);
        };

        if flag.as_bool() == Some(true) {
            let data = body.get("data").cloned().unwrap_or(Value::Null);
            return BackendReply::Failed(data);
        }

        let parsed = {
            let data = body
                .get("data")
                .filter(|data| data.is_object())
                .unwrap_or(&body);
            SearchPage::deserialize(data)
        };

        match parsed {
            Ok(page) => BackendReply::Found(page),
            Err(e) => {
                log::warn!("backend hit data could not be read: {e}");
                BackendReply::Malformed(body)
            }
        }
    }
}
