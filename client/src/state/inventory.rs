//! Inventory view state: loaded items, filter facets, dialogs, and the
//! load/save flows that drive them.
//!
//! DESIGN
//! ======
//! `InventoryState` is a plain struct owned by the dashboard page. Every
//! transition is a synchronous method so the dialog state machine and the
//! filter derivation are testable without a browser. The async flows
//! (`load_items`, `save_item`) only sequence backend calls around those
//! transitions.
//!
//! INVARIANTS
//! ==========
//! - `filtered` is always `filter.apply(&items)`; it is recomputed on every
//!   change to `items` or `filter` and never edited directly.
//! - At most one dialog is open, enforced by `DialogState` being one enum.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use std::fmt;
use std::str::FromStr;

use super::Shared;
use super::form::{DraftField, ItemDraft, ValidationError};
use super::toast::ToastState;
use crate::net::backend::SupplyStore;
use crate::net::types::{SupplyItem, SupplyPayload};

// =============================================================================
// FILTERS
// =============================================================================

/// Expiration facet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpiryFilter {
    #[default]
    All,
    Expired,
    NotExpired,
}

impl ExpiryFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Expired, Self::NotExpired];

    /// Select option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Expired => "expired",
            Self::NotExpired => "not-expired",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Expired => "Expired",
            Self::NotExpired => "Not expired",
        }
    }

    #[must_use]
    pub fn matches(self, item: &SupplyItem) -> bool {
        match self {
            Self::All => true,
            Self::Expired => item.is_expired,
            Self::NotExpired => !item.is_expired,
        }
    }
}

impl FromStr for ExpiryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown expiry filter: {s}"))
    }
}

/// Supply-type facet: everything, or one exact category label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// Parse a select value; `"all"` bypasses the facet.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "all" { Self::All } else { Self::Only(value.to_owned()) }
    }

    #[must_use]
    pub fn matches(&self, item: &SupplyItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => item.type_of_supply == *label,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(label) => f.write_str(label),
        }
    }
}

/// The three facets of the inventory table, ANDed together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub search: String,
    pub expiry: ExpiryFilter,
    pub supply_type: TypeFilter,
}

impl ItemFilter {
    /// Case-insensitive substring match on name or type. Blank search
    /// matches everything.
    #[must_use]
    pub fn matches_text(&self, item: &SupplyItem) -> bool {
        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        item.name.to_lowercase().contains(&needle) || item.type_of_supply.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn matches(&self, item: &SupplyItem) -> bool {
        self.matches_text(item) && self.expiry.matches(item) && self.supply_type.matches(item)
    }

    /// Derive the visible subset without touching the source list.
    #[must_use]
    pub fn apply(&self, items: &[SupplyItem]) -> Vec<SupplyItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

// =============================================================================
// DIALOGS
// =============================================================================

/// Which dialog, if any, is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Viewing(SupplyItem),
    Editing(SupplyItem),
    Creating,
}

/// Where a save goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Update(String),
    Insert,
}

impl SaveTarget {
    #[must_use]
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Update(_) => "Item updated successfully!",
            Self::Insert => "Item created successfully!",
        }
    }

    #[must_use]
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Update(_) => "Failed to update item",
            Self::Insert => "Failed to create item",
        }
    }
}

/// A validated save, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub target: SaveTarget,
    pub payload: SupplyPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("no edit or create dialog is open")]
    NoOpenForm,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryState {
    pub items: Vec<SupplyItem>,
    pub filtered: Vec<SupplyItem>,
    pub filter: ItemFilter,
    pub dialog: DialogState,
    pub draft: ItemDraft,
    /// True until the first load finishes and while a reload is in flight.
    pub loading: bool,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            filter: ItemFilter::default(),
            dialog: DialogState::Closed,
            draft: ItemDraft::default(),
            loading: true,
        }
    }
}

impl InventoryState {
    /// Swap in a freshly loaded list.
    pub fn replace_items(&mut self, items: Vec<SupplyItem>) {
        self.items = items;
        self.refilter();
    }

    pub fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.items);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
        self.refilter();
    }

    pub fn set_expiry_filter(&mut self, expiry: ExpiryFilter) {
        self.filter.expiry = expiry;
        self.refilter();
    }

    pub fn set_type_filter(&mut self, supply_type: TypeFilter) {
        self.filter.supply_type = supply_type;
        self.refilter();
    }

    /// Open the read-only detail dialog.
    pub fn select_item(&mut self, item: SupplyItem) {
        self.dialog = DialogState::Viewing(item);
    }

    /// Seed the draft from `item` and open the edit dialog in place of any
    /// other dialog.
    pub fn begin_edit(&mut self, item: SupplyItem) {
        self.draft = ItemDraft::from_item(&item);
        self.dialog = DialogState::Editing(item);
    }

    /// Seed the draft with new-item defaults and open the create dialog.
    pub fn begin_create(&mut self) {
        self.draft = ItemDraft::for_new_item();
        self.dialog = DialogState::Creating;
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Route raw input text into the draft.
    pub fn edit_field(&mut self, field: DraftField, raw: &str) {
        self.draft.set(field, raw);
    }

    /// Validate the draft and decide between update and insert.
    ///
    /// # Errors
    ///
    /// [`SaveError::NoOpenForm`] when neither form dialog is open, or
    /// [`SaveError::Invalid`] when a required field is missing.
    pub fn prepare_save(&self) -> Result<SaveRequest, SaveError> {
        let target = match &self.dialog {
            DialogState::Editing(item) => SaveTarget::Update(item.id.clone()),
            DialogState::Creating => SaveTarget::Insert,
            DialogState::Closed | DialogState::Viewing(_) => return Err(SaveError::NoOpenForm),
        };
        self.draft.validate()?;
        Ok(SaveRequest { target, payload: self.draft.to_payload() })
    }

    /// Close the form dialog and clear the draft after a successful save.
    pub fn finish_save(&mut self) {
        self.dialog = DialogState::Closed;
        self.draft = ItemDraft::default();
    }
}

// =============================================================================
// FLOWS
// =============================================================================

/// Fetch every record into `inventory`.
///
/// On failure the current list is kept and an error toast is shown.
pub async fn load_items<S, I, T>(store: &S, inventory: &I, toasts: &T)
where
    S: SupplyStore + ?Sized,
    I: Shared<InventoryState>,
    T: Shared<ToastState>,
{
    inventory.update_with(|s| s.loading = true);
    match store.fetch_all().await {
        Ok(items) => {
            if items.is_empty() {
                leptos::logging::log!("no medical supplies found");
            }
            inventory.update_with(|s| s.replace_items(items));
        }
        Err(e) => {
            leptos::logging::warn!("loading medical supplies failed: {e}");
            toasts.update_with(|t| t.error(format!("Failed to load medical supplies: {e}")));
        }
    }
    inventory.update_with(|s| s.loading = false);
}

/// Validate and persist the open draft, then reload and close the dialog.
///
/// Returns `true` when the record was saved. Validation failures never
/// reach the store; backend failures leave the dialog open.
pub async fn save_item<S, I, T>(store: &S, inventory: &I, toasts: &T) -> bool
where
    S: SupplyStore + ?Sized,
    I: Shared<InventoryState>,
    T: Shared<ToastState>,
{
    let Some(prepared) = inventory.read_with(InventoryState::prepare_save) else {
        return false;
    };
    let request = match prepared {
        Ok(request) => request,
        Err(SaveError::Invalid(e)) => {
            toasts.update_with(|t| t.error(e.to_string()));
            return false;
        }
        Err(SaveError::NoOpenForm) => return false,
    };

    let result = match &request.target {
        SaveTarget::Update(id) => store.update(id, &request.payload).await,
        SaveTarget::Insert => store.insert(&request.payload).await,
    };
    if let Err(e) = result {
        leptos::logging::warn!("saving item failed ({:?}): {e}", request.target);
        toasts.update_with(|t| t.error(request.target.failure_message()));
        return false;
    }

    toasts.update_with(|t| t.success(request.target.success_message()));
    load_items(store, inventory, toasts).await;
    inventory.update_with(InventoryState::finish_save);
    true
}
