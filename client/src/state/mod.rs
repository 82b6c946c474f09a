//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `inventory`, `form`, `toast`) as
//! plain structs. Pages hold them in `RwSignal`s; async flows reach them
//! through [`Shared`] so the same flow runs against a signal in the browser
//! and a `RefCell` in tests.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod form;
pub mod inventory;
pub mod session;
pub mod toast;

use std::cell::RefCell;

use leptos::prelude::*;

/// Mutable access to state owned elsewhere.
///
/// Both methods return `None` when the owner is gone (a signal disposed
/// after its page unmounted), which turns late network completions into
/// no-ops.
pub trait Shared<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T> Shared<T> for RefCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<T: Send + Sync + 'static> Shared<T> for RwSignal<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
