// ABOUTME: Server-rendered converter page built from an HTML template
// ABOUTME: Fills category and unit selects, the result line, flash alert, and unit chips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Converter page rendering
//!
//! The template lives in `templates/converter.html` and uses `{{KEY}}`
//! placeholders. Placeholders are substituted in a single pass, so text that
//! came from a request is never re-scanned for placeholders. Every dynamic
//! value is HTML-escaped.

use crate::constants::{defaults, paths};
use converter_core::{format_value, ConversionTable, Unit};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::{Map, Value};
use std::fmt::Write;

const TEMPLATE: &str = include_str!("../templates/converter.html");

/// A completed conversion shown under the form
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionDisplay {
    /// Input value
    pub value: f64,
    /// Canonical source unit symbol
    pub from: String,
    /// Canonical target unit symbol
    pub to: String,
    /// Converted value
    pub result: f64,
}

/// Everything the converter page shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConverterPage {
    /// Selected category key
    pub category: String,
    /// Value in the input box
    pub value: Option<f64>,
    /// Selected source unit
    pub unit_from: String,
    /// Selected target unit
    pub unit_to: String,
    /// Result block, present after a successful conversion
    pub conversion: Option<ConversionDisplay>,
    /// Pending flash message
    pub flash: Option<String>,
}

impl ConverterPage {
    /// Landing page: default category, first two units, empty value
    #[must_use]
    pub fn landing(table: &ConversionTable) -> Self {
        let units = table.list_units(defaults::CATEGORY).unwrap_or_default();
        let first = units.first().map(|u| u.symbol.to_owned()).unwrap_or_default();
        let second = units
            .get(1)
            .map_or_else(|| first.clone(), |u| u.symbol.to_owned());
        Self {
            category: defaults::CATEGORY.to_owned(),
            value: None,
            unit_from: first,
            unit_to: second,
            conversion: None,
            flash: None,
        }
    }

    /// Page showing a finished conversion
    #[must_use]
    pub fn converted(category: &str, conversion: ConversionDisplay) -> Self {
        Self {
            category: category.to_owned(),
            value: Some(conversion.value),
            unit_from: conversion.from.clone(),
            unit_to: conversion.to.clone(),
            conversion: Some(conversion),
            flash: None,
        }
    }

    /// Attach a flash message
    #[must_use]
    pub fn with_flash(mut self, flash: Option<String>) -> Self {
        self.flash = flash;
        self
    }

    /// Render the page as HTML
    #[must_use]
    pub fn render(&self, table: &ConversionTable) -> String {
        let units = table
            .list_units(&self.category)
            .or_else(|_| table.list_units(defaults::CATEGORY))
            .unwrap_or_default();

        fill(
            TEMPLATE,
            &[
                ("FLASH", self.flash_alert()),
                ("CATEGORY_OPTIONS", self.category_options(table)),
                (
                    "VALUE",
                    self.value
                        .map(|v| encode_double_quoted_attribute(&v.to_string()).into_owned())
                        .unwrap_or_default(),
                ),
                ("FROM_OPTIONS", unit_options(&units, &self.unit_from)),
                ("TO_OPTIONS", unit_options(&units, &self.unit_to)),
                ("RESULT", self.result_block()),
                ("UNIT_CHIPS", unit_chips(table)),
                ("UNIT_MAP", unit_map_json(table)),
            ],
        )
    }

    fn flash_alert(&self) -> String {
        self.flash.as_deref().map_or_else(String::new, |message| {
            format!(
                "<div class=\"alert alert-warning\" role=\"alert\">{}</div>",
                encode_text(message)
            )
        })
    }

    fn category_options(&self, table: &ConversionTable) -> String {
        table.categories().iter().fold(String::new(), |mut html, category| {
            let _ = writeln!(
                html,
                "                <option value=\"{}\"{}>{}</option>",
                encode_double_quoted_attribute(category.key()),
                selected(category.key() == self.category),
                encode_text(category.label()),
            );
            html
        })
    }

    fn result_block(&self) -> String {
        let Some(conversion) = &self.conversion else {
            return String::new();
        };
        let from = encode_text(&conversion.from);
        let to = encode_text(&conversion.to);
        format!(
            r#"          <hr/>
          <div class="d-flex align-items-center justify-content-between">
            <div>
              <div class="h5 mb-0">Result</div>
              <div class="muted" id="result">{value} {from} = <strong>{formatted}</strong> {to}</div>
            </div>
            <form method="post" action="{swap}">
              <input type="hidden" name="dimension" value="{category}"/>
              <input type="hidden" name="value" value="{result}"/>
              <input type="hidden" name="unit_from" value="{to_attr}"/>
              <input type="hidden" name="unit_to" value="{from_attr}"/>
              <button class="btn btn-outline-light">Swap</button>
            </form>
          </div>
"#,
            value = format_value(conversion.value),
            formatted = format_value(conversion.result),
            swap = paths::SWAP,
            category = encode_double_quoted_attribute(&self.category),
            result = conversion.result,
            to_attr = encode_double_quoted_attribute(&conversion.to),
            from_attr = encode_double_quoted_attribute(&conversion.from),
        )
    }
}

const fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}

fn unit_options(units: &[&Unit], current: &str) -> String {
    units.iter().fold(String::new(), |mut html, unit| {
        let symbol = encode_double_quoted_attribute(unit.symbol);
        let _ = writeln!(
            html,
            "                <option value=\"{symbol}\"{}>{}</option>",
            selected(unit.symbol == current),
            encode_text(unit.symbol),
        );
        html
    })
}

fn unit_chips(table: &ConversionTable) -> String {
    table.iter().fold(String::new(), |mut html, category_table| {
        let category = category_table.category();
        let chips = category_table
            .units_for_display()
            .iter()
            .fold(String::new(), |mut chips, unit| {
                let _ = write!(
                    chips,
                    "<span class=\"unit-chip\" title=\"{}\">{}</span>",
                    encode_double_quoted_attribute(unit.name),
                    encode_text(unit.symbol)
                );
                chips
            });
        let _ = writeln!(
            html,
            "          <div class=\"col-md-6 mb-3\">\n            \
             <div class=\"fw-semibold\">{}</div>\n            \
             <div class=\"mt-1\">{chips}</div>\n          </div>",
            encode_text(category.label()),
        );
        html
    })
}

/// Category key to unit symbols, safe to embed inside a `<script>` element
#[must_use]
pub fn unit_map_json(table: &ConversionTable) -> String {
    let map: Map<String, Value> = table
        .iter()
        .map(|category_table| {
            let symbols = category_table
                .units_for_display()
                .iter()
                .map(|unit| Value::from(unit.symbol))
                .collect();
            (
                category_table.category().key().to_owned(),
                Value::Array(symbols),
            )
        })
        .collect();

    Value::Object(map)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// Substitute `{{KEY}}` placeholders in one pass; unknown placeholders are kept
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => {
                output.push_str("{{");
                output.push_str(key);
                output.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_single_pass() {
        let rendered = fill(
            "<p>{{A}}</p><p>{{B}}</p>{{C}}",
            &[("A", "{{B}}".to_owned()), ("B", "two".to_owned())],
        );
        assert_eq!(rendered, "<p>{{B}}</p><p>two</p>{{C}}");
    }

    #[test]
    fn test_landing_page_defaults() {
        let page = ConverterPage::landing(ConversionTable::standard());
        assert_eq!(page.category, "temperature");
        assert_eq!(page.unit_from, "K");
        assert_eq!(page.unit_to, "°C");
        assert_eq!(page.value, None);
    }

    #[test]
    fn test_render_marks_selection() {
        let table = ConversionTable::standard();
        let html = ConverterPage::landing(table).render(table);

        assert!(html.contains("<option value=\"temperature\" selected>Temperature</option>"));
        assert!(html.contains("<option value=\"K\" selected>K</option>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_flash_is_escaped() {
        let table = ConversionTable::standard();
        let html = ConverterPage::landing(table)
            .with_flash(Some("<b>bad</b>".to_owned()))
            .render(table);

        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(!html.contains("<b>bad</b>"));
    }

    #[test]
    fn test_result_block_carries_swap_form() {
        let table = ConversionTable::standard();
        let page = ConverterPage::converted(
            "length",
            ConversionDisplay {
                value: 2.0,
                from: "km".to_owned(),
                to: "m".to_owned(),
                result: 2000.0,
            },
        );
        let html = page.render(table);

        assert!(html.contains("2 km = <strong>2000</strong> m"));
        assert!(html.contains("name=\"unit_from\" value=\"m\""));
        assert!(html.contains("name=\"unit_to\" value=\"km\""));
        assert!(html.contains("name=\"value\" value=\"2000\""));
    }

    #[test]
    fn test_unit_map_lists_every_category() {
        let json: Value =
            serde_json::from_str(&unit_map_json(ConversionTable::standard())).unwrap();
        assert_eq!(json["temperature"][0], "K");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }
}
