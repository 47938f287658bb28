use crate::domain::model::{Merchant, ProductRequest};
use crate::domain::ports::MerchantResolver;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use url::Url;

/// Resolves every request to the same configured merchant list.
///
/// Stand-in for the endpoint-selection business rule that is not built
/// yet; swapping in a real implementation only touches this adapter.
pub struct StaticMerchantResolver {
    merchants: Vec<Merchant>,
}

impl StaticMerchantResolver {
    /// Builds the merchant list from configured URLs. Duplicates collapse,
    /// first-seen order is kept, and every URL is validated up front.
    pub fn from_urls(urls: &[String]) -> Result<Self> {
        let mut merchants: Vec<Merchant> = Vec::new();

        for url in urls {
            validate_url("merchants", url)?;
            if merchants.iter().any(|m| m.api_url == *url) {
                continue;
            }
            let name = Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| url.clone());
            let id = format!("merchant-{}", merchants.len() + 1);
            merchants.push(Merchant::new(id, name, url.clone()));
        }

        Ok(Self { merchants })
    }

    pub fn with_merchants(merchants: Vec<Merchant>) -> Self {
        Self { merchants }
    }
}

#[async_trait]
impl MerchantResolver for StaticMerchantResolver {
    // TODO: select merchants by the request's search term once the business
    // rule for merchant selection exists.
    async fn resolve(&self, request: &ProductRequest) -> Result<Vec<Merchant>> {
        tracing::debug!(
            "Resolved {} merchants for product request {}",
            self.merchants.len(),
            request.id
        );
        Ok(self.merchants.clone())
    }
}
