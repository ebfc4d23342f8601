//! # Business Insight Collaborator
//!
//! The dashboard shows one short advisory sentence derived from sales
//! data. The collaborator producing it is strictly best-effort: whatever
//! it does internally, the dashboard receives a string, and a failing or
//! absent provider yields the static fallback. Nothing here can block or
//! alter a checkout.

use serde::Serialize;
use tracing::debug;

/// Fallback advisory shown when no provider is wired up or the provider
/// fails.
pub const FALLBACK_INSIGHT: &str =
    "Tip: keep the key-cutting machines well maintained for accurate cuts.";

/// The aggregate handed to a provider. Deliberately small: a provider
/// never sees individual sales or staff records.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDigest {
    pub total_revenue_cents: i64,
    pub sale_count: usize,
    pub product_count: usize,
    pub low_stock_count: usize,
}

/// A source of one advisory sentence.
///
/// Implementations must be infallible from the caller's perspective: on
/// any internal failure, return [`FALLBACK_INSIGHT`] instead of erroring.
pub trait InsightProvider {
    fn business_insight(&self, digest: &SalesDigest) -> String;
}

/// The offline provider: always the static fallback.
///
/// Stands in for the external analytics service; swapping in a networked
/// provider is a matter of implementing the trait, with the same
/// can-never-fail contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticInsight;

impl InsightProvider for StaticInsight {
    fn business_insight(&self, digest: &SalesDigest) -> String {
        debug!(
            revenue = digest.total_revenue_cents,
            sales = digest.sale_count,
            "Serving static business insight"
        );
        FALLBACK_INSIGHT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_returns_fallback() {
        let digest = SalesDigest {
            total_revenue_cents: 123_400,
            sale_count: 7,
            product_count: 12,
            low_stock_count: 2,
        };
        assert_eq!(StaticInsight.business_insight(&digest), FALLBACK_INSIGHT);
    }
}
