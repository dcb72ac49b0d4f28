//! Reply text rendering. Vehicle and help texts use Telegram Markdown.

use vib_protocol::{RecordKey, VehicleRecord};

/// Shown for missing record fields.
pub const PLACEHOLDER: &str = "N/A";

const WELCOME: &str =
    "🚗 Welcome to Vehicle Info Bot!\n\nUse /info to learn how to search for vehicles.";

const HELP: &str = "🚗 *Vehicle Info Bot*

*Usage:*
• Send a vehicle ID (e.g. 400)
• Send a vehicle name (e.g. Landstalker)
• Send a hex value (e.g. 190)

*Examples:*
`400` - Search by ID
`Landstalker` - Search by name
`190` - Search by hex

The bot will return vehicle information including ID, hex, name, model, and GXT.";

const FETCH_ERROR: &str =
    "⚠️ Error occurred while fetching vehicle data. Please try again later.";

pub fn render_welcome() -> String {
    WELCOME.to_string()
}

pub fn render_help() -> String {
    HELP.to_string()
}

pub fn render_fetch_error() -> String {
    FETCH_ERROR.to_string()
}

pub fn render_not_found(query: &str) -> String {
    format!("❌ No vehicle found for: \"{query}\"\n\nTry searching by ID, name, or hex value.")
}

/// Render a record as a labeled block: ID, Hex, Name, Model, GXT and,
/// when present and non-empty, a trailing Notes line.
pub fn render_vehicle(record: &VehicleRecord) -> String {
    let mut out = format!(
        "🚗 *Vehicle Information*\n\n\
         *ID:* `{}`\n\
         *Hex:* `{}`\n\
         *Name:* {}\n\
         *Model:* `{}`\n\
         *GXT:* `{}`",
        key_or_placeholder(record.id.as_ref()),
        key_or_placeholder(record.hex.as_ref()),
        text_or_placeholder(record.name.as_deref()),
        text_or_placeholder(record.model.as_deref()),
        text_or_placeholder(record.gxt.as_deref()),
    );

    if let Some(notes) = record.notes.as_deref().filter(|n| !n.is_empty()) {
        out.push_str(&format!("\n*Notes:* {notes}"));
    }

    out
}

fn key_or_placeholder(key: Option<&RecordKey>) -> String {
    key.map_or_else(|| PLACEHOLDER.to_string(), RecordKey::to_string)
}

fn text_or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}
