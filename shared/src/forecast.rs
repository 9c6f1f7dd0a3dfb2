//! Forecast windows and purchase recommendations

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    Batch, ForecastDateRange, FreshnessStatus, PredictionDashboard, PurchasePlan,
    PurchaseRecommendation, StockStatus, Trend,
};
use crate::types::DateRange;

/// Days covered by the default forecast window, beyond its first day
const DEFAULT_WINDOW_DAYS: i64 = 6;
/// Daily demand (kg) above which the trend is shown as rising
const TREND_THRESHOLD_KG: i64 = 50;

/// Resolve the forecast window and the comparison window before it.
///
/// `from` defaults to `today`; `to` defaults to six days after `from`.
pub fn forecast_date_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> ForecastDateRange {
    let from = from.unwrap_or(today);
    let to = to.unwrap_or_else(|| from + Duration::days(DEFAULT_WINDOW_DAYS));
    let duration = (to - from).num_days();

    ForecastDateRange {
        from,
        to,
        last_from: from - Duration::days(duration),
        last_to: from,
    }
}

/// Initial date selection of the forecast page: one week from today
pub fn default_selection(today: NaiveDate) -> DateRange {
    DateRange {
        start: today,
        end: today + Duration::days(7),
    }
}

/// Usable stock per ingredient: active batches that are not expired
pub fn current_stock(batches: &[Batch]) -> HashMap<String, Decimal> {
    let mut stock: HashMap<String, Decimal> = HashMap::new();
    for batch in batches {
        let expired = matches!(batch.freshness_status, Some(FreshnessStatus::Expired));
        if batch.active && !expired {
            *stock.entry(batch.ingredient_name.clone()).or_default() += batch.weight;
        }
    }
    stock
}

pub fn stock_status(predicted: Decimal, stock: Decimal) -> StockStatus {
    if stock < predicted * Decimal::new(5, 1) {
        StockStatus::Kritis
    } else if stock < predicted {
        StockStatus::Perlu
    } else {
        StockStatus::Aman
    }
}

pub fn trend(daily_average_kg: Decimal) -> Trend {
    if daily_average_kg > Decimal::from(TREND_THRESHOLD_KG) {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// Compare predicted demand with current stock
pub fn purchase_plan(prediction: &PredictionDashboard, batches: &[Batch]) -> PurchasePlan {
    let stock = current_stock(batches);
    let summary = &prediction.prediction_summary;

    let items: Vec<PurchaseRecommendation> = summary
        .total_predicted_demand
        .iter()
        .map(|demand| {
            let price = summary
                .latest_item_prices
                .iter()
                .find(|p| p.item_name == demand.item_name);
            let current = stock.get(&demand.item_name).copied().unwrap_or_default();
            let recommended = (demand.total_kg - current).max(Decimal::ZERO);
            let unit_price = price.map(|p| p.unit_price).unwrap_or_default();

            PurchaseRecommendation {
                ingredient_name: demand.item_name.clone(),
                category: price
                    .and_then(|p| p.category.clone())
                    .unwrap_or_else(|| "-".to_string()),
                current_stock: current,
                predicted_demand: demand.total_kg,
                recommended_purchase: recommended,
                estimated_price: recommended * unit_price,
                status: stock_status(demand.total_kg, current),
                trend: trend(demand.daily_average_kg),
            }
        })
        .collect();

    let stockout = items
        .iter()
        .filter(|i| i.current_stock < i.predicted_demand)
        .cloned()
        .collect();
    let overstock = items
        .iter()
        .filter(|i| i.current_stock > i.predicted_demand)
        .cloned()
        .collect();

    PurchasePlan {
        items,
        stockout,
        overstock,
    }
}
