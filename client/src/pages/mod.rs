//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, backend calls, local
//! signals) and delegates rendering details to `components`.

pub mod home;
pub mod inventory;
pub mod not_found;
pub mod signin;
pub mod signup;
