//! Constant values for the descsp block cipher contexts
//!
//! Sizes are expressed in octets. The identifier strings are the names
//! a host key store uses to select key material for each algorithm.

#![no_std]
#![forbid(unsafe_code)]

pub mod utils;
