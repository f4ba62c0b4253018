//! Models shared by the EatGo web client and its tests.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

/// Wire and form models of the restaurant review API.
pub mod models;
