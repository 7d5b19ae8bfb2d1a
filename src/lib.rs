#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(has_doc_auto_cfg, feature(doc_auto_cfg))]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

mod ffi;
mod macros;
mod ops;
mod thin;
mod unit;

pub use crate::{ops::*, thin::*, unit::Unit};

/// An error indicating that no nul terminator was present or that a unit slice contains interior
/// nul units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NulError(());
