use crate::domain::model::{CallFailure, Merchant, Offer, Outcome, ProductRequest};
use crate::domain::ports::OfferCaller;
use crate::utils::validation::validate_price;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Offer caller over plain HTTP: POSTs the request as JSON to the
/// merchant's api url and reads back the offer. One outbound call per
/// invocation, no retries.
pub struct HttpOfferCaller {
    client: Client,
}

impl HttpOfferCaller {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn post_request(
        &self,
        request: &ProductRequest,
        merchant: &Merchant,
    ) -> Result<Outcome, CallFailure> {
        let response = self
            .client
            .post(&merchant.api_url)
            .json(request)
            .send()
            .await
            .map_err(|e| CallFailure::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(Outcome::Absent);
        }
        if !status.is_success() {
            return Err(CallFailure::UnexpectedStatus(status.as_u16()));
        }

        let offer: Offer = response
            .json()
            .await
            .map_err(|e| CallFailure::Decode(e.to_string()))?;

        validate_price("offer price", offer.price()).map_err(|e| CallFailure::InvalidOffer {
            reason: e.to_string(),
        })?;

        Ok(Outcome::Offer(offer))
    }
}

impl Default for HttpOfferCaller {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OfferCaller for HttpOfferCaller {
    async fn call(&self, request: &ProductRequest, merchant: &Merchant) -> Outcome {
        tracing::debug!(
            "Sending product request {} to merchant {}",
            request.id,
            merchant.api_url
        );

        match self.post_request(request, merchant).await {
            Ok(outcome) => {
                tracing::debug!("Outcome received from merchant {}", merchant.api_url);
                outcome
            }
            Err(failure) => {
                tracing::warn!(
                    "Failed to receive offer from merchant {}: {}",
                    merchant.api_url,
                    failure
                );
                Outcome::Failed(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn request() -> ProductRequest {
        ProductRequest {
            id: "req-1".to_string(),
            search_term: "laptop".to_string(),
            min_price: 0.0,
            max_price: 1000.0,
        }
    }

    fn merchant_for(server: &MockServer, path: &str) -> Merchant {
        Merchant::new("m-1", "Merchant 1", server.url(path))
    }

    fn offer_body(price: f64) -> serde_json::Value {
        serde_json::json!({
            "id": "resp-1",
            "product": {
                "id": "p-1",
                "name": "Laptop",
                "description": "A laptop",
                "merchant": {"id": "m-1", "name": "Merchant 1", "apiUrl": "http://merchant-1.com/api/product"},
                "price": price
            }
        })
    }

    #[tokio::test]
    async fn test_call_returns_offer_on_200_with_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/product")
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": "req-1",
                    "searchTerm": "laptop",
                    "minPrice": 0.0,
                    "maxPrice": 1000.0
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(offer_body(9.99));
        });

        let caller = HttpOfferCaller::new();
        let outcome = caller.call(&request(), &merchant_for(&server, "/api/product")).await;

        api_mock.assert();
        let offer = outcome.offer().expect("expected an offer");
        assert_eq!(offer.price(), 9.99);
        assert_eq!(offer.id, "resp-1");
    }

    #[tokio::test]
    async fn test_call_returns_absent_on_204() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/product");
            then.status(204);
        });

        let caller = HttpOfferCaller::new();
        let outcome = caller.call(&request(), &merchant_for(&server, "/api/product")).await;

        api_mock.assert();
        assert_eq!(outcome, Outcome::Absent);
    }

    #[tokio::test]
    async fn test_call_captures_server_error_as_failed() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/product");
            then.status(500);
        });

        let caller = HttpOfferCaller::new();
        let outcome = caller.call(&request(), &merchant_for(&server, "/api/product")).await;

        api_mock.assert();
        assert_eq!(
            outcome,
            Outcome::Failed(CallFailure::UnexpectedStatus(500))
        );
    }

    #[tokio::test]
    async fn test_call_captures_malformed_payload_as_failed() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/product");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("{\"not\": \"an offer\"}");
        });

        let caller = HttpOfferCaller::new();
        let outcome = caller.call(&request(), &merchant_for(&server, "/api/product")).await;

        api_mock.assert();
        assert!(matches!(outcome, Outcome::Failed(CallFailure::Decode(_))));
    }

    #[tokio::test]
    async fn test_call_rejects_negative_price_as_failed() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/product");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(offer_body(-1.0));
        });

        let caller = HttpOfferCaller::new();
        let outcome = caller.call(&request(), &merchant_for(&server, "/api/product")).await;

        api_mock.assert();
        assert!(matches!(
            outcome,
            Outcome::Failed(CallFailure::InvalidOffer { .. })
        ));
    }

    #[tokio::test]
    async fn test_call_captures_connection_failure_as_failed() {
        // nothing is listening on this address
        let merchant = Merchant::new("m-1", "Merchant 1", "http://127.0.0.1:1/api/product");

        let caller = HttpOfferCaller::new();
        let outcome = caller.call(&request(), &merchant).await;

        assert!(matches!(outcome, Outcome::Failed(CallFailure::Transport(_))));
    }
}
