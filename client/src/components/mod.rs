//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the inventory table, its dialogs, and the toast stack.
//! They read and write page state passed in as signals, or shared state from
//! Leptos context providers.

pub mod filter_bar;
pub mod item_detail_dialog;
pub mod item_form_dialog;
pub mod item_table;
pub mod toaster;
