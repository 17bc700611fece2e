// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Codec families. Each submodule turns a table or algorithm into
//! implementations of the traits in [`crate::types`].

pub mod dbcs;
pub mod gb18030;
pub mod singlebyte;
pub mod utf_16;
pub mod utf_7;
