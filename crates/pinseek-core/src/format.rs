//! Chat rendering — one Telegram-HTML block per matched record.
//!
//! The block layout is fixed: an optional `Result N` header, nine labeled
//! fields in a fixed order, and a Google Maps link when (and only when) the
//! record carries both coordinates. The glyph table is transport decoration;
//! the document renderer deliberately reuses the same field order without it.

use crate::types::PostOffice;
use phf::phf_map;

/// Category glyph per field key, plus `result` for the block header and
/// `location` for the map link.
static ICONS: phf::Map<&'static str, &'static str> = phf_map! {
    "pincode" => "📌",
    "office" => "🏢",
    "type" => "🏷️",
    "delivery" => "📦",
    "circle" => "🔵",
    "region" => "🗺️",
    "division" => "🏛️",
    "district" => "📍",
    "state" => "🏳️",
    "location" => "🌐",
    "result" => "🔹",
};

fn icon(key: &str) -> &'static str {
    ICONS.get(key).copied().unwrap_or_default()
}

/// The nine rendered fields of a record, in presentation order. Shared by
/// the chat and document renderers so the two can never drift apart.
pub(crate) fn field_rows(record: &PostOffice) -> [(&'static str, &'static str, String); 9] {
    [
        ("pincode", "Pincode", record.pincode.to_string()),
        ("office", "Office", record.office.clone()),
        ("type", "Type", record.office_type.clone()),
        ("delivery", "Delivery", record.delivery.clone()),
        ("circle", "Circle", record.circle.clone()),
        ("region", "Region", record.region.clone()),
        ("division", "Division", record.division.clone()),
        ("district", "District", record.district.clone()),
        ("state", "State", record.state.clone()),
    ]
}

/// Render one record as a Telegram-HTML chat block.
///
/// `index` is 0-based; when given, the block opens with a bold
/// `Result N` header (1-based). Field values are HTML-escaped so an office
/// name containing `&` or `<` cannot break Telegram's HTML parse mode.
pub fn format_text(record: &PostOffice, index: Option<usize>) -> String {
    let mut lines = Vec::with_capacity(11);

    if let Some(index) = index {
        lines.push(format!("{} <b>Result {}</b>", icon("result"), index + 1));
    }

    for (key, label, value) in field_rows(record) {
        lines.push(format!("{} <b>{label}:</b> {}", icon(key), escape_html(&value)));
    }

    if let Some(url) = record.maps_url() {
        lines.push(format!(
            "{} <a href='{url}'>View on Google Maps</a>",
            icon("location")
        ));
    }

    lines.join("\n")
}

/// Minimal escaping for Telegram HTML parse mode; only `&`, `<`, `>` are
/// special in text content. `&` must go first.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
