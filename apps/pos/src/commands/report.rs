//! # Report Commands
//!
//! Dashboard aggregation: overall revenue, counts, low-stock alerts and
//! the advisory insight line.
//!
//! Everything here is a read-only projection over the collections,
//! recomputed per call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::insight::{InsightProvider, SalesDigest};
use crate::state::{ConfigState, StoreState};

/// A product flagged by the low-stock alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub id: String,
    pub name: String,
    pub stock: i64,
}

/// The dashboard numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue_cents: i64,
    pub sale_count: usize,
    pub product_count: usize,
    pub employee_count: usize,
    pub low_stock: Vec<LowStockItem>,
    /// Advisory line from the best-effort insight collaborator.
    pub insight: String,
}

/// Builds the dashboard summary.
///
/// The insight provider is consulted last, over an aggregate digest only;
/// by contract it cannot fail, so the dashboard always renders.
pub fn dashboard(
    store: &StoreState,
    config: &ConfigState,
    provider: &dyn InsightProvider,
) -> DashboardSummary {
    debug!("dashboard command");

    let (total_revenue_cents, sale_count, product_count, employee_count, low_stock) =
        store.with_store(|s| {
            let revenue: i64 = s.sales().iter().map(|sale| sale.grand_total_cents).sum();
            let low_stock: Vec<LowStockItem> = s
                .products()
                .iter()
                .filter(|p| p.stock < config.low_stock_threshold)
                .map(|p| LowStockItem {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    stock: p.stock,
                })
                .collect();
            (
                revenue,
                s.sales().len(),
                s.products().len(),
                s.employees().len(),
                low_stock,
            )
        });

    let digest = SalesDigest {
        total_revenue_cents,
        sale_count,
        product_count,
        low_stock_count: low_stock.len(),
    };

    DashboardSummary {
        total_revenue_cents,
        sale_count,
        product_count,
        employee_count,
        low_stock,
        insight: provider.business_insight(&digest),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
