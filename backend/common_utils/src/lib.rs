#![warn(missing_docs)]
//! Shared utilities for the Novalnet checkout workspace.

pub mod consts;
pub mod crypto;
pub mod errors;
pub mod ext_traits;
pub mod fp_utils;
pub mod pii;
pub mod request;
pub mod types;

pub use errors::CustomResult;
