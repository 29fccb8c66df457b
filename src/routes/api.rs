// ABOUTME: JSON API route handlers for listing categories, units, and converting values
// ABOUTME: Failures are returned as structured error bodies carrying the request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! JSON conversion API
//!
//! - `GET /api/categories`
//! - `GET /api/categories/:category/units`
//! - `GET /api/convert?category=&from=&to=&value=`

use crate::{
    errors::{AppError, AppResult},
    middleware::request_id,
    server::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use converter_core::{format_value, CategoryKind, CategoryTable, Unit};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// One entry of `GET /api/categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Category key
    pub key: String,
    /// Display label
    pub label: String,
    /// Base unit symbol
    pub base_unit: Option<String>,
    /// `linear` or `affine`
    pub kind: String,
}

impl From<&CategoryTable> for CategoryInfo {
    fn from(table: &CategoryTable) -> Self {
        let category = table.category();
        let kind = match table.kind() {
            CategoryKind::Linear(_) => "linear",
            CategoryKind::Affine { .. } => "affine",
        };
        Self {
            key: category.key().to_owned(),
            label: category.label().to_owned(),
            base_unit: table.base_unit().map(|unit| unit.symbol.to_owned()),
            kind: kind.to_owned(),
        }
    }
}

/// One entry of `GET /api/categories/:category/units`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitInfo {
    /// Canonical symbol
    pub symbol: String,
    /// Full name
    pub name: String,
    /// Alternative spellings
    pub aliases: Vec<String>,
}

impl From<&Unit> for UnitInfo {
    fn from(unit: &Unit) -> Self {
        Self {
            symbol: unit.symbol.to_owned(),
            name: unit.name.to_owned(),
            aliases: unit.aliases.iter().map(|alias| (*alias).to_owned()).collect(),
        }
    }
}

/// Query string of `GET /api/convert`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConvertQuery {
    /// Category key
    pub category: Option<String>,
    /// Source unit
    pub from: Option<String>,
    /// Target unit
    pub to: Option<String>,
    /// Value to convert
    pub value: Option<String>,
}

/// Body of a successful `GET /api/convert`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertResponse {
    /// Canonical category key
    pub category: String,
    /// Canonical source unit symbol
    pub from: String,
    /// Canonical target unit symbol
    pub to: String,
    /// Input value
    pub value: f64,
    /// Converted value
    pub result: f64,
    /// Converted value as shown on the converter page
    pub formatted: String,
}

/// JSON API routes
pub struct ApiRoutes;

impl ApiRoutes {
    /// Create the JSON API routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/categories", get(Self::handle_categories))
            .route("/api/categories/:category/units", get(Self::handle_units))
            .route("/api/convert", get(Self::handle_convert))
            .with_state(state)
    }

    async fn handle_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryInfo>> {
        Json(state.table.iter().map(CategoryInfo::from).collect())
    }

    async fn handle_units(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        Path(category): Path<String>,
    ) -> AppResult<Json<Vec<UnitInfo>>> {
        let units = state
            .table
            .list_units(&category)
            .map_err(|e| attach_request_id(AppError::from(e), &headers))?;
        Ok(Json(units.into_iter().map(UnitInfo::from).collect()))
    }

    async fn handle_convert(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        Query(query): Query<ConvertQuery>,
    ) -> AppResult<Json<ConvertResponse>> {
        Self::convert(&state, &query)
            .map(Json)
            .map_err(|e| {
                info!(error = %e, "Rejected API conversion");
                attach_request_id(e, &headers)
            })
    }

    fn convert(state: &AppState, query: &ConvertQuery) -> AppResult<ConvertResponse> {
        let category = required(query.category.as_deref(), "category")?;
        let category_table = state.table.category(category)?;

        let raw_value = required(query.value.as_deref(), "value")?;
        let value: f64 = raw_value
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_format(format!("'{raw_value}' is not a number")))?;

        let from = required(query.from.as_deref(), "from")?;
        let to = required(query.to.as_deref(), "to")?;
        let result = category_table.convert(from, to, value)?;
        let response = ConvertResponse {
            category: category_table.category().key().to_owned(),
            from: category_table.resolve(from)?.symbol.to_owned(),
            to: category_table.resolve(to)?.symbol.to_owned(),
            value,
            result,
            formatted: format_value(result),
        };
        debug!(
            category = %response.category,
            from = %response.from,
            to = %response.to,
            value,
            result,
            "Converted value"
        );
        Ok(response)
    }
}

fn required<'a>(field: Option<&'a str>, name: &str) -> AppResult<&'a str> {
    field
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::missing_field(name))
}

fn attach_request_id(error: AppError, headers: &HeaderMap) -> AppError {
    match request_id(headers) {
        Some(id) => error.with_request_id(id),
        None => error,
    }
}
