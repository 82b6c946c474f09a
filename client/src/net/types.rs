//! Wire DTOs for the hosted backend and the session model.
//!
//! DESIGN
//! ======
//! `SupplyRow` is the lenient read shape of a `medical_supplies` row: every
//! column may be null or missing and numbers may arrive as integers, reals,
//! or numeric strings. `SupplyItem` is the complete record the UI works with.
//! `SupplyPayload` is the insert/update body and never carries `id`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend collection holding inventory records.
pub const SUPPLY_TABLE: &str = "medical_supplies";

/// Image shown when an item has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/logo.png";

/// Expiration date assumed for rows stored without one.
pub const FALLBACK_EXPIRES_ON: &str = "2025-12-31";

/// Category labels offered by the type selects. `Other` covers anything else.
pub const SUPPLY_TYPES: [&str; 9] = [
    "PPE",
    "Airway and Oxygen",
    "Catheters and IV Supplies",
    "Needles and Syringes",
    "Wound Care",
    "Surgical",
    "Diagnostic",
    "Emergency",
    "Other",
];

// =============================================================================
// SUPPLY ITEM
// =============================================================================

/// One inventory record describing a medical supply batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplyItem {
    /// Backend-assigned identifier. Never changes.
    pub id: String,
    pub name: String,
    pub description: String,
    pub lot_number: String,
    /// ISO `YYYY-MM-DD` date.
    pub expires_on: String,
    pub quantity: u32,
    pub image_url: String,
    /// Set by hand; not derived from `expires_on`.
    pub is_expired: bool,
    pub type_of_supply: String,
    pub pallet_location: String,
    pub company: String,
    pub cardboard_boxes_per_pallet: u32,
    pub unit_boxes_per_cardboard: u32,
    pub units_per_box: u32,
    pub weight_per_cardboard_box: f64,
    pub dimensions_cardboard_box: String,
    pub cost_per_unit_box: f64,
    pub cost_per_cardboard_box: f64,
    pub relevant_link: String,
    pub other_notes: String,
}

impl SupplyItem {
    /// Badge text for the expiry column and the detail dialog.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_expired { "Expired" } else { "Active" }
    }
}

/// Lenient read shape of a backend row.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SupplyRow {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub lot_number: Option<String>,
    pub expires_on: Option<String>,
    #[serde(deserialize_with = "deserialize_count")]
    pub quantity: u32,
    pub image_url: Option<String>,
    pub is_expired: Option<bool>,
    pub type_of_supply: Option<String>,
    pub pallet_location: Option<String>,
    pub company: Option<String>,
    #[serde(deserialize_with = "deserialize_count")]
    pub cardboard_boxes_per_pallet: u32,
    #[serde(deserialize_with = "deserialize_count")]
    pub unit_boxes_per_cardboard: u32,
    #[serde(deserialize_with = "deserialize_count")]
    pub units_per_box: u32,
    #[serde(deserialize_with = "deserialize_amount")]
    pub weight_per_cardboard_box: f64,
    pub dimensions_cardboard_box: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub cost_per_unit_box: f64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub cost_per_cardboard_box: f64,
    pub relevant_link: Option<String>,
    pub other_notes: Option<String>,
}

impl From<SupplyRow> for SupplyItem {
    fn from(row: SupplyRow) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            lot_number: row.lot_number.unwrap_or_default(),
            expires_on: non_empty_or(row.expires_on, FALLBACK_EXPIRES_ON),
            quantity: row.quantity,
            image_url: non_empty_or(row.image_url, PLACEHOLDER_IMAGE),
            is_expired: row.is_expired.unwrap_or(false),
            type_of_supply: row.type_of_supply.unwrap_or_default(),
            pallet_location: row.pallet_location.unwrap_or_default(),
            company: row.company.unwrap_or_default(),
            cardboard_boxes_per_pallet: row.cardboard_boxes_per_pallet,
            unit_boxes_per_cardboard: row.unit_boxes_per_cardboard,
            units_per_box: row.units_per_box,
            weight_per_cardboard_box: row.weight_per_cardboard_box,
            dimensions_cardboard_box: row.dimensions_cardboard_box.unwrap_or_default(),
            cost_per_unit_box: row.cost_per_unit_box,
            cost_per_cardboard_box: row.cost_per_cardboard_box,
            relevant_link: row.relevant_link.unwrap_or_default(),
            other_notes: row.other_notes.unwrap_or_default(),
        }
    }
}

/// Decode a select-all response body into complete items.
///
/// # Errors
///
/// Returns the serde error message if the body is not a JSON array of rows.
pub fn parse_supply_rows(body: &str) -> Result<Vec<SupplyItem>, String> {
    let rows: Vec<SupplyRow> = serde_json::from_str(body).map_err(|e| e.to_string())?;
    Ok(rows.into_iter().map(SupplyItem::from).collect())
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_owned(),
    }
}

// =============================================================================
// PAYLOAD
// =============================================================================

/// Full-record body for insert and update. Column names are the wire names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SupplyPayload {
    pub name: String,
    pub description: String,
    pub lot_number: String,
    pub expires_on: String,
    pub quantity: u32,
    pub image_url: String,
    pub is_expired: bool,
    pub type_of_supply: String,
    pub pallet_location: String,
    pub company: String,
    pub cardboard_boxes_per_pallet: u32,
    pub unit_boxes_per_cardboard: u32,
    pub units_per_box: u32,
    pub weight_per_cardboard_box: f64,
    pub dimensions_cardboard_box: String,
    pub cost_per_unit_box: f64,
    pub cost_per_cardboard_box: f64,
    pub relevant_link: String,
    pub other_notes: String,
}

// =============================================================================
// SESSION
// =============================================================================

/// Seconds before `expires_at` at which a session already counts as expired.
pub const EXPIRY_SKEW_SECS: i64 = 10;

/// Identity attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated session as issued by the auth backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl Session {
    /// Whether the access token should no longer be used at `now` (unix seconds).
    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at
            .is_some_and(|at| now >= at - EXPIRY_SKEW_SECS)
    }
}

/// Email + password pair submitted to the auth backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a successful sign-up call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The backend auto-confirmed the account and issued a session.
    SignedIn(Session),
    /// The account exists but must be confirmed by email first.
    ConfirmationSent,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

/// Decode a token-endpoint body into a session. `expires_at` is derived from
/// `expires_in` when the backend omits it.
///
/// # Errors
///
/// Returns the serde error message if the body is not a token response.
pub fn parse_session(body: &str, now: i64) -> Result<Session, String> {
    let token: TokenResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    Ok(session_from_token(token, now))
}

/// Decode a sign-up body. A body with an access token is a live session;
/// anything else that parses as JSON is an unconfirmed user.
///
/// # Errors
///
/// Returns the serde error message if the body is not JSON.
pub fn parse_sign_up(body: &str, now: i64) -> Result<SignUpOutcome, String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if value.get("access_token").is_some_and(|t| !t.is_null()) {
        let token: TokenResponse = serde_json::from_value(value).map_err(|e| e.to_string())?;
        return Ok(SignUpOutcome::SignedIn(session_from_token(token, now)));
    }
    Ok(SignUpOutcome::ConfirmationSent)
}

fn session_from_token(token: TokenResponse, now: i64) -> Session {
    let expires_at = token
        .expires_at
        .or_else(|| token.expires_in.map(|secs| now + secs));
    Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_at,
        user: token.user,
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// Data errors carry `message`; auth errors carry `msg`, `error_description`,
/// or `error` depending on the endpoint version.
#[must_use]
pub fn parse_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                if !text.trim().is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    format!("request failed: {status}")
}

// =============================================================================
// LENIENT NUMBERS
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value))
}

/// Non-negative integer from any JSON scalar; anything unusable becomes 0.
pub(crate) fn count_from_value(value: &serde_json::Value) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let from_float = |f: f64| {
        if f.is_finite() && f >= 0.0 {
            f.trunc().min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    };
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
            .or_else(|| n.as_f64().map(from_float))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().map(from_float).unwrap_or(0),
        _ => 0,
    }
}

/// Finite non-negative real from any JSON scalar; anything unusable becomes 0.
pub(crate) fn amount_from_value(value: &serde_json::Value) -> f64 {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() && raw >= 0.0 { raw } else { 0.0 }
}
