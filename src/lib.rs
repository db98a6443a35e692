//! Core domain library for the media catalog.
//!
//! This crate exposes the self-validating [`Category`] entity together
//! with the form and DTO layers used to move it across process
//! boundaries. No `Category` with a violated invariant is constructible
//! or observable through this API.
//!
//! [`Category`]: domain::category::Category

pub mod domain;
pub mod dto;
pub mod forms;
