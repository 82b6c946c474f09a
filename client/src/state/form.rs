//! Editable item draft shared by the edit and create dialogs.
//!
//! DESIGN
//! ======
//! `ItemDraft` is an optional-field patch over `SupplyItem`. Inputs write
//! into it through [`ItemDraft::set`], which coerces text but never rejects
//! it. Required-field checks happen only at save time, and
//! [`ItemDraft::to_payload`] fills every absent field with its default.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;

use crate::net::types::{PLACEHOLDER_IMAGE, SupplyItem, SupplyPayload, amount_from_value};

/// How a field's raw input text is coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
    Flag,
}

/// Every user-editable column of a supply record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Description,
    LotNumber,
    ExpiresOn,
    Quantity,
    ImageUrl,
    IsExpired,
    TypeOfSupply,
    PalletLocation,
    Company,
    CardboardBoxesPerPallet,
    UnitBoxesPerCardboard,
    UnitsPerBox,
    WeightPerCardboardBox,
    DimensionsCardboardBox,
    CostPerUnitBox,
    CostPerCardboardBox,
    RelevantLink,
    OtherNotes,
}

impl DraftField {
    pub const ALL: [Self; 19] = [
        Self::Name,
        Self::Description,
        Self::LotNumber,
        Self::ExpiresOn,
        Self::Quantity,
        Self::ImageUrl,
        Self::IsExpired,
        Self::TypeOfSupply,
        Self::PalletLocation,
        Self::Company,
        Self::CardboardBoxesPerPallet,
        Self::UnitBoxesPerCardboard,
        Self::UnitsPerBox,
        Self::WeightPerCardboardBox,
        Self::DimensionsCardboardBox,
        Self::CostPerUnitBox,
        Self::CostPerCardboardBox,
        Self::RelevantLink,
        Self::OtherNotes,
    ];

    /// Form key used for input ids, e.g. `lotNumber`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::LotNumber => "lotNumber",
            Self::ExpiresOn => "expiresOn",
            Self::Quantity => "quantity",
            Self::ImageUrl => "imageUrl",
            Self::IsExpired => "isExpired",
            Self::TypeOfSupply => "typeOfSupply",
            Self::PalletLocation => "palletLocation",
            Self::Company => "company",
            Self::CardboardBoxesPerPallet => "cardboardBoxesPerPallet",
            Self::UnitBoxesPerCardboard => "unitBoxesPerCardboard",
            Self::UnitsPerBox => "unitsPerBox",
            Self::WeightPerCardboardBox => "weightPerCardboardBox",
            Self::DimensionsCardboardBox => "dimensionsCardboardBox",
            Self::CostPerUnitBox => "costPerUnitBox",
            Self::CostPerCardboardBox => "costPerCardboardBox",
            Self::RelevantLink => "relevantLink",
            Self::OtherNotes => "otherNotes",
        }
    }

    /// Backend column name, e.g. `lot_number`.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::LotNumber => "lot_number",
            Self::ExpiresOn => "expires_on",
            Self::Quantity => "quantity",
            Self::ImageUrl => "image_url",
            Self::IsExpired => "is_expired",
            Self::TypeOfSupply => "type_of_supply",
            Self::PalletLocation => "pallet_location",
            Self::Company => "company",
            Self::CardboardBoxesPerPallet => "cardboard_boxes_per_pallet",
            Self::UnitBoxesPerCardboard => "unit_boxes_per_cardboard",
            Self::UnitsPerBox => "units_per_box",
            Self::WeightPerCardboardBox => "weight_per_cardboard_box",
            Self::DimensionsCardboardBox => "dimensions_cardboard_box",
            Self::CostPerUnitBox => "cost_per_unit_box",
            Self::CostPerCardboardBox => "cost_per_cardboard_box",
            Self::RelevantLink => "relevant_link",
            Self::OtherNotes => "other_notes",
        }
    }

    /// Inverse of [`DraftField::column`].
    #[must_use]
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.column() == column)
    }

    /// Inverse of [`DraftField::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Quantity | Self::CardboardBoxesPerPallet | Self::UnitBoxesPerCardboard | Self::UnitsPerBox => {
                FieldKind::Integer
            }
            Self::WeightPerCardboardBox | Self::CostPerUnitBox | Self::CostPerCardboardBox => FieldKind::Real,
            Self::IsExpired => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::LotNumber => "Lot Number",
            Self::ExpiresOn => "Expires On",
            Self::Quantity => "Quantity",
            Self::ImageUrl => "Image URL",
            Self::IsExpired => "Mark as Expired",
            Self::TypeOfSupply => "Type of Supply",
            Self::PalletLocation => "Pallet Location",
            Self::Company => "Company",
            Self::CardboardBoxesPerPallet => "Cardboard Boxes per Pallet",
            Self::UnitBoxesPerCardboard => "Unit Boxes per Cardboard",
            Self::UnitsPerBox => "Units per Box",
            Self::WeightPerCardboardBox => "Weight per Cardboard Box",
            Self::DimensionsCardboardBox => "Dimensions of Cardboard Box",
            Self::CostPerUnitBox => "Cost per Unit Box",
            Self::CostPerCardboardBox => "Cost per Cardboard Box",
            Self::RelevantLink => "Relevant Link",
            Self::OtherNotes => "Other Notes",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Quantity | Self::TypeOfSupply | Self::ExpiresOn)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Save-time rejection of a draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", join_labels(.0))]
    MissingFields(Vec<DraftField>),
}

fn join_labels(fields: &[DraftField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}

/// Optional-field record behind the edit/create dialogs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub lot_number: Option<String>,
    pub expires_on: Option<String>,
    pub quantity: Option<u32>,
    pub image_url: Option<String>,
    pub is_expired: Option<bool>,
    pub type_of_supply: Option<String>,
    pub pallet_location: Option<String>,
    pub company: Option<String>,
    pub cardboard_boxes_per_pallet: Option<u32>,
    pub unit_boxes_per_cardboard: Option<u32>,
    pub units_per_box: Option<u32>,
    pub weight_per_cardboard_box: Option<f64>,
    pub dimensions_cardboard_box: Option<String>,
    pub cost_per_unit_box: Option<f64>,
    pub cost_per_cardboard_box: Option<f64>,
    pub relevant_link: Option<String>,
    pub other_notes: Option<String>,
}

impl ItemDraft {
    /// Draft seeded with the defaults of a brand-new item.
    #[must_use]
    pub fn for_new_item() -> Self {
        Self {
            name: Some(String::new()),
            description: Some(String::new()),
            lot_number: Some(String::new()),
            expires_on: Some(String::new()),
            quantity: Some(0),
            image_url: Some(PLACEHOLDER_IMAGE.to_owned()),
            is_expired: Some(false),
            type_of_supply: Some(String::new()),
            pallet_location: Some(String::new()),
            company: Some(String::new()),
            cardboard_boxes_per_pallet: Some(0),
            unit_boxes_per_cardboard: Some(0),
            units_per_box: Some(0),
            weight_per_cardboard_box: Some(0.0),
            dimensions_cardboard_box: Some(String::new()),
            cost_per_unit_box: Some(0.0),
            cost_per_cardboard_box: Some(0.0),
            relevant_link: Some(String::new()),
            other_notes: Some(String::new()),
        }
    }

    /// Draft seeded with every field of an existing item. `id` stays behind.
    #[must_use]
    pub fn from_item(item: &SupplyItem) -> Self {
        Self {
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            lot_number: Some(item.lot_number.clone()),
            expires_on: Some(item.expires_on.clone()),
            quantity: Some(item.quantity),
            image_url: Some(item.image_url.clone()),
            is_expired: Some(item.is_expired),
            type_of_supply: Some(item.type_of_supply.clone()),
            pallet_location: Some(item.pallet_location.clone()),
            company: Some(item.company.clone()),
            cardboard_boxes_per_pallet: Some(item.cardboard_boxes_per_pallet),
            unit_boxes_per_cardboard: Some(item.unit_boxes_per_cardboard),
            units_per_box: Some(item.units_per_box),
            weight_per_cardboard_box: Some(item.weight_per_cardboard_box),
            dimensions_cardboard_box: Some(item.dimensions_cardboard_box.clone()),
            cost_per_unit_box: Some(item.cost_per_unit_box),
            cost_per_cardboard_box: Some(item.cost_per_cardboard_box),
            relevant_link: Some(item.relevant_link.clone()),
            other_notes: Some(item.other_notes.clone()),
        }
    }

    /// Write raw input text into a field, coercing by the field's kind.
    ///
    /// Integer and real fields fall back to 0 on unparseable text. Flags are
    /// `true` only for the exact text `"true"`.
    pub fn set(&mut self, field: DraftField, raw: &str) {
        match field.kind() {
            FieldKind::Text => self.set_text(field, raw.to_owned()),
            FieldKind::Integer => self.set_count(field, parse_count(raw)),
            FieldKind::Real => self.set_amount(field, parse_amount(raw)),
            FieldKind::Flag => {
                if field == DraftField::IsExpired {
                    self.is_expired = Some(raw == "true");
                }
            }
        }
    }

    fn set_text(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::LotNumber => &mut self.lot_number,
            DraftField::ExpiresOn => &mut self.expires_on,
            DraftField::ImageUrl => &mut self.image_url,
            DraftField::TypeOfSupply => &mut self.type_of_supply,
            DraftField::PalletLocation => &mut self.pallet_location,
            DraftField::Company => &mut self.company,
            DraftField::DimensionsCardboardBox => &mut self.dimensions_cardboard_box,
            DraftField::RelevantLink => &mut self.relevant_link,
            DraftField::OtherNotes => &mut self.other_notes,
            _ => return,
        };
        *slot = Some(value);
    }

    fn set_count(&mut self, field: DraftField, value: u32) {
        let slot = match field {
            DraftField::Quantity => &mut self.quantity,
            DraftField::CardboardBoxesPerPallet => &mut self.cardboard_boxes_per_pallet,
            DraftField::UnitBoxesPerCardboard => &mut self.unit_boxes_per_cardboard,
            DraftField::UnitsPerBox => &mut self.units_per_box,
            _ => return,
        };
        *slot = Some(value);
    }

    fn set_amount(&mut self, field: DraftField, value: f64) {
        let slot = match field {
            DraftField::WeightPerCardboardBox => &mut self.weight_per_cardboard_box,
            DraftField::CostPerUnitBox => &mut self.cost_per_unit_box,
            DraftField::CostPerCardboardBox => &mut self.cost_per_cardboard_box,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Current value of a field as input text (empty when unset).
    #[must_use]
    pub fn display(&self, field: DraftField) -> String {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let count = |v: Option<u32>| v.unwrap_or(0).to_string();
        let amount = |v: Option<f64>| v.unwrap_or(0.0).to_string();
        match field {
            DraftField::Name => text(&self.name),
            DraftField::Description => text(&self.description),
            DraftField::LotNumber => text(&self.lot_number),
            DraftField::ExpiresOn => text(&self.expires_on),
            DraftField::Quantity => count(self.quantity),
            DraftField::ImageUrl => text(&self.image_url),
            DraftField::IsExpired => self.is_expired.unwrap_or(false).to_string(),
            DraftField::TypeOfSupply => text(&self.type_of_supply),
            DraftField::PalletLocation => text(&self.pallet_location),
            DraftField::Company => text(&self.company),
            DraftField::CardboardBoxesPerPallet => count(self.cardboard_boxes_per_pallet),
            DraftField::UnitBoxesPerCardboard => count(self.unit_boxes_per_cardboard),
            DraftField::UnitsPerBox => count(self.units_per_box),
            DraftField::WeightPerCardboardBox => amount(self.weight_per_cardboard_box),
            DraftField::DimensionsCardboardBox => text(&self.dimensions_cardboard_box),
            DraftField::CostPerUnitBox => amount(self.cost_per_unit_box),
            DraftField::CostPerCardboardBox => amount(self.cost_per_cardboard_box),
            DraftField::RelevantLink => text(&self.relevant_link),
            DraftField::OtherNotes => text(&self.other_notes),
        }
    }

    /// Required fields that are missing, blank, or (for quantity) zero.
    #[must_use]
    pub fn missing_required(&self) -> Vec<DraftField> {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push(DraftField::Name);
        }
        if self.quantity.unwrap_or(0) == 0 {
            missing.push(DraftField::Quantity);
        }
        if blank(&self.type_of_supply) {
            missing.push(DraftField::TypeOfSupply);
        }
        if blank(&self.expires_on) {
            missing.push(DraftField::ExpiresOn);
        }
        missing
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] naming every missing
    /// required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_required();
        if missing.is_empty() { Ok(()) } else { Err(ValidationError::MissingFields(missing)) }
    }

    /// Merge the draft into a complete payload, filling absent fields with
    /// empty strings, zeros, `false`, and the placeholder image.
    #[must_use]
    pub fn to_payload(&self) -> SupplyPayload {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let image_url = match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_owned(),
            _ => PLACEHOLDER_IMAGE.to_owned(),
        };
        SupplyPayload {
            name: text(&self.name),
            description: text(&self.description),
            lot_number: text(&self.lot_number),
            expires_on: text(&self.expires_on),
            quantity: self.quantity.unwrap_or(0),
            image_url,
            is_expired: self.is_expired.unwrap_or(false),
            type_of_supply: text(&self.type_of_supply),
            pallet_location: text(&self.pallet_location),
            company: text(&self.company),
            cardboard_boxes_per_pallet: self.cardboard_boxes_per_pallet.unwrap_or(0),
            unit_boxes_per_cardboard: self.unit_boxes_per_cardboard.unwrap_or(0),
            units_per_box: self.units_per_box.unwrap_or(0),
            weight_per_cardboard_box: self.weight_per_cardboard_box.unwrap_or(0.0),
            dimensions_cardboard_box: text(&self.dimensions_cardboard_box),
            cost_per_unit_box: self.cost_per_unit_box.unwrap_or(0.0),
            cost_per_cardboard_box: self.cost_per_cardboard_box.unwrap_or(0.0),
            relevant_link: text(&self.relevant_link),
            other_notes: text(&self.other_notes),
        }
    }
}

/// Input text → non-negative integer from its leading digits, 0 when there
/// are none or the value is negative. Trailing text is ignored (`"12abc"` is
/// 12, `"1e3"` is 1).
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    let text = raw.trim_start();
    if text.starts_with('-') {
        return 0;
    }
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    let digits = &text[..end];
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Input text → finite non-negative real, 0 when unparseable.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    amount_from_value(&serde_json::Value::String(raw.to_owned()))
}
