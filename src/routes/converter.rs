// ABOUTME: Route handlers for the server-rendered converter form
// ABOUTME: Landing page, form conversion with flash-and-redirect errors, and result swapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Converter form routes
//!
//! `POST /convert` validates the category first, then the value, then the
//! units. A rejected submission stores a flash message in a signed cookie and
//! redirects back to `/` with `303 See Other`.

use crate::{
    constants::{defaults, messages, paths},
    pages::{ConversionDisplay, ConverterPage},
    server::AppState,
};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use converter_core::{ConversionError, ConversionResult, ConversionTable};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Fields posted by the converter form and the swap form
///
/// Every field is optional so that a partial submission reaches the handler
/// and gets a flash message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConversionForm {
    /// Category key
    pub dimension: Option<String>,
    /// Raw value text
    pub value: Option<String>,
    /// Source unit
    pub unit_from: Option<String>,
    /// Target unit
    pub unit_to: Option<String>,
}

/// Converter page routes
pub struct ConverterRoutes;

impl ConverterRoutes {
    /// Create the converter page routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(paths::INDEX, get(Self::handle_index))
            .route(paths::CONVERT, post(Self::handle_convert))
            .route(paths::SWAP, post(Self::handle_swap))
            .with_state(state)
    }

    async fn handle_index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
        let mut response_headers = HeaderMap::new();
        let flash = state.flash.take(&headers, &mut response_headers);
        let html = ConverterPage::landing(state.table)
            .with_flash(flash)
            .render(state.table);
        (response_headers, Html(html)).into_response()
    }

    async fn handle_convert(
        State(state): State<Arc<AppState>>,
        Form(form): Form<ConversionForm>,
    ) -> Response {
        match run_conversion(state.table, &form) {
            Ok((category, shown)) => {
                debug!(
                    category = %category,
                    from = %shown.from,
                    to = %shown.to,
                    value = shown.value,
                    result = shown.result,
                    "Converted value"
                );
                Html(ConverterPage::converted(&category, shown).render(state.table))
                    .into_response()
            }
            Err(error) => {
                info!(error = %error, "Rejected conversion form");
                let mut headers = HeaderMap::new();
                state.flash.set(&mut headers, flash_message(&error));
                (headers, Redirect::to(paths::INDEX)).into_response()
            }
        }
    }

    async fn handle_swap(
        State(state): State<Arc<AppState>>,
        Form(form): Form<ConversionForm>,
    ) -> Response {
        let Ok(value) = parse_value(form.value.as_deref()) else {
            debug!("Swap form carried no usable value");
            return Redirect::to(paths::INDEX).into_response();
        };

        let requested = form.dimension.unwrap_or_default();
        let category = state.table.category(&requested).map_or_else(
            |_| defaults::CATEGORY.to_owned(),
            |table| table.category().key().to_owned(),
        );
        let canonical = |unit: Option<String>| {
            let unit = unit.unwrap_or_default();
            state
                .table
                .resolve_unit(&category, &unit)
                .map_or(unit, |resolved| resolved.symbol.to_owned())
        };

        let page = ConverterPage {
            unit_from: canonical(form.unit_from),
            unit_to: canonical(form.unit_to),
            category,
            value: Some(value),
            conversion: None,
            flash: None,
        };
        Html(page.render(state.table)).into_response()
    }
}

/// Validate and convert one form submission
///
/// Returns the canonical category key and the result with canonical unit symbols.
fn run_conversion(
    table: &ConversionTable,
    form: &ConversionForm,
) -> ConversionResult<(String, ConversionDisplay)> {
    let category_table = table.category(form.dimension.as_deref().unwrap_or_default())?;
    let value = parse_value(form.value.as_deref())?;
    let from = form.unit_from.as_deref().unwrap_or_default();
    let to = form.unit_to.as_deref().unwrap_or_default();

    let result = category_table.convert(from, to, value)?;
    let display = ConversionDisplay {
        value,
        from: category_table.resolve(from)?.symbol.to_owned(),
        to: category_table.resolve(to)?.symbol.to_owned(),
        result,
    };
    Ok((category_table.category().key().to_owned(), display))
}

/// Parse a finite number from form text
fn parse_value(raw: Option<&str>) -> ConversionResult<f64> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ConversionError::invalid_value("value is missing"));
    }
    let value: f64 = text
        .parse()
        .map_err(|_| ConversionError::invalid_value(format!("'{text}' is not a number")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::invalid_value(format!("'{text}' is not finite")))
    }
}

/// User-facing message for a rejected submission
const fn flash_message(error: &ConversionError) -> &'static str {
    match error {
        ConversionError::UnknownCategory(_) => messages::INVALID_CATEGORY,
        ConversionError::UnknownUnit { .. } => messages::INVALID_UNITS,
        ConversionError::InvalidValue(_) => messages::INVALID_NUMBER,
    }
}
