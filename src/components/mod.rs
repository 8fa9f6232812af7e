//! Reusable UI components.

pub mod auth_modal;
pub mod navigation;
pub mod request_card;
