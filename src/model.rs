// Core structs: ItemRecord, SearchQuery, and the collaborator error types
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One marketplace listing as handed over by a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub seller: String,
    pub sockets: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_stat: Option<String>,
}

impl ItemRecord {
    pub fn new(
        name: impl Into<String>,
        seller: impl Into<String>,
        sockets: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            seller: seller.into(),
            sockets: sockets.into(),
            price: price.into(),
            secondary_stat: None,
        }
    }

    pub fn with_secondary_stat(mut self, stat: impl Into<String>) -> Self {
        self.secondary_stat = Some(stat.into());
        self
    }
}

/// Search form values keyed by control name, e.g. `"type" -> ["Bow"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub params: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_true")]
    pub buyout_only: bool,
    #[serde(default = "default_true")]
    pub online_only: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            params: BTreeMap::new(),
            buyout_only: true,
            online_only: true,
        }
    }
}

impl SearchQuery {
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Flattens the query into URL query pairs. The buyout/online checkboxes
    /// are sent as `x` like the site's own form does.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .params
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.clone(), v.clone())))
            .collect();
        if self.buyout_only {
            pairs.push(("buyout".into(), "x".into()));
        }
        if self.online_only {
            pairs.push(("online".into(), "x".into()));
        }
        pairs
    }

    /// Short human label used in log lines and the table header.
    pub fn describe(&self) -> String {
        if self.params.is_empty() {
            return "<any>".to_string();
        }
        self.params
            .iter()
            .map(|(key, values)| format!("{}={}", key, values.join("|")))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("fetch failed: server responded with status {0}")]
    Status(u16),
    #[error("failed to read listings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode listings: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
