//! HTTP client wrapper - fetches and parses the skip catalog

use crate::constants::CATALOG_URL;
use crate::messages::NetworkResponse;
use crate::models::{filter_available, Location, Skip};

/// Parse a catalog response body. The endpoint returns a JSON array of
/// offerings; anything else is a malformed body.
pub fn parse_catalog(body: &str) -> Result<Vec<Skip>, serde_json::Error> {
    let skips: Vec<Skip> = serde_json::from_str(body)?;
    Ok(filter_available(skips))
}

/// Build the by-location request. The query pair goes through reqwest's
/// encoder so an injected location with spaces or '&' stays well-formed.
fn catalog_request(client: &reqwest::Client, location: &Location) -> reqwest::RequestBuilder {
    client.get(CATALOG_URL).query(&[
        ("postcode", location.postcode.as_str()),
        ("area", location.area.as_str()),
    ])
}

/// Fetch the skip catalog for a location and return the filtered list
pub async fn fetch_catalog(
    client: &reqwest::Client,
    location: Location,
    request_id: u64,
) -> NetworkResponse {
    let result = catalog_request(client, &location).send().await;

    match result {
        Ok(resp) => {
            let status = resp.status();
            if !status.is_success() {
                return NetworkResponse::Error {
                    id: request_id,
                    message: format!("Failed to fetch skip data (HTTP {})", status.as_u16()),
                };
            }
            match resp.text().await {
                Ok(body) => match parse_catalog(&body) {
                    Ok(skips) => NetworkResponse::Catalog {
                        id: request_id,
                        skips,
                    },
                    Err(e) => NetworkResponse::Error {
                        id: request_id,
                        message: format!("Unexpected response from skip service: {}", e),
                    },
                },
                Err(e) => NetworkResponse::Error {
                    id: request_id,
                    message: format!("Error reading body: {}", e),
                },
            }
        }
        Err(e) => {
            let msg = if e.is_timeout() {
                "Request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Error {
                id: request_id,
                message: msg,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_catalog() {
        let body = r#"[
            {"id": 17933, "size": 4, "hire_period_days": 14,
             "price_before_vat": 278.0, "vat": 55.6, "area": "Lowestoft",
             "allowed_on_road": true, "allows_heavy_waste": true, "forbidden": false},
            {"id": 17934, "size": 6, "hire_period_days": 14,
             "price_before_vat": 305.0, "vat": 61.0, "transport_cost": 45.0,
             "area": "Lowestoft", "allowed_on_road": true,
             "allows_heavy_waste": true, "forbidden": true}
        ]"#;
        let skips = parse_catalog(body).unwrap();
        assert_eq!(skips.len(), 1);
        assert_eq!(skips[0].id, 17933);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array_body() {
        assert!(parse_catalog(r#"{"error": "not found"}"#).is_err());
        assert!(parse_catalog("<html>502</html>").is_err());
    }

    #[test]
    fn test_catalog_request_includes_location() {
        let client = create_client();
        let request = catalog_request(&client, &Location::new("NR32", "Lowestoft"))
            .build()
            .unwrap();
        assert_eq!(
            request.url().query(),
            Some("postcode=NR32&area=Lowestoft")
        );
    }

    #[test]
    fn test_catalog_request_encodes_location() {
        let client = create_client();
        let request = catalog_request(&client, &Location::new("NR32", "Great Yarmouth & Lowestoft"))
            .build()
            .unwrap();
        let query = request.url().query().unwrap();
        assert!(query.contains("area=Great+Yarmouth+%26+Lowestoft"), "query was {}", query);
    }
}
