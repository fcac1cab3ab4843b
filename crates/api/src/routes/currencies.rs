//! Currency listing routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code.
    pub code: String,
    /// Currency symbol.
    pub symbol: String,
    /// Currency name.
    pub name: String,
    /// Units per one unit of the base currency.
    pub rate: String,
}

/// Response for the currency list.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    /// Base currency code.
    pub base: String,
    /// Supported currencies, base first.
    pub currencies: Vec<CurrencyResponse>,
}

/// GET `/currencies` - List supported currencies.
async fn list_currencies(State(state): State<AppState>) -> Json<CurrencyListResponse> {
    let currencies = state
        .currencies
        .iter()
        .map(|info| CurrencyResponse {
            code: info.code.to_string(),
            symbol: info.symbol.clone(),
            name: info.name.clone(),
            rate: info.rate.to_string(),
        })
        .collect();

    Json(CurrencyListResponse {
        base: state.currencies.base().to_string(),
        currencies,
    })
}
