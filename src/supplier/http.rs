use crate::model::{ItemRecord, SearchQuery, SupplyError};
use crate::supplier::traits::ItemSupplier;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) TradeRanker/0.1";

/// Fetches listings as JSON from a search endpoint, sending the query as
/// URL parameters.
pub struct HttpSupplier {
    client: Client,
    base_url: String,
}

impl HttpSupplier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SupplyError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl ItemSupplier for HttpSupplier {
    fn fetch(&self, query: &SearchQuery) -> Result<Vec<ItemRecord>, SupplyError> {
        info!("Fetching listings for [{}] from {}", query.describe(), self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&query.pairs())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search endpoint responded [{}]", status);
            return Err(SupplyError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let records: Vec<ItemRecord> = serde_json::from_str(&body)?;
        info!("Received {} listings", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn listings_json() -> serde_json::Value {
        serde_json::json!([
            { "name": "Hoag", "seller": "anna", "sockets": "R-R", "price": "2 chaos", "secondary_stat": "101.5" },
            { "name": "Windripper", "seller": "bob", "sockets": "G-G-G", "price": "3 exalted" }
        ])
    }

    // The blocking client owns its own runtime, so build and drop it off the async thread.
    async fn fetch_from(server: &MockServer, query: SearchQuery) -> Result<Vec<ItemRecord>, SupplyError> {
        let url = format!("{}/search", server.uri());
        tokio::task::spawn_blocking(move || {
            HttpSupplier::new(url, Duration::from_secs(5))?.fetch(&query)
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn decodes_records_and_sends_query_pairs() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("type", "Bow"))
            .and(query_param("buyout", "x"))
            .and(query_param("online", "x"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listings_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let records = fetch_from(&mock_server, SearchQuery::default().with_param("type", "Bow"))
            .await
            .unwrap();

        assert_eq!(
            records,
            vec![
                ItemRecord::new("Hoag", "anna", "R-R", "2 chaos").with_secondary_stat("101.5"),
                ItemRecord::new("Windripper", "bob", "G-G-G", "3 exalted"),
            ]
        );
    }

    #[tokio::test]
    async fn server_error_is_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = fetch_from(&mock_server, SearchQuery::default()).await;

        assert!(matches!(result, Err(SupplyError::Status(500))));
    }

    #[tokio::test]
    async fn unparseable_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let result = fetch_from(&mock_server, SearchQuery::default()).await;

        assert!(matches!(result, Err(SupplyError::Decode(_))));
    }
}
