//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod client;
pub use client::{use_api, ApiHandle, ApiProvider};

mod form_status;
pub use form_status::{FormStatus, Ticket};
