//! UI module for the PIN pad widget
//!
//! # Structure
//! - `pin_pad` - Widget state, messages and the top-level view
//! - `keypad` - Digit grid and clear control, generated from the core layout table
//! - `indicator` - Status region and dot row
//! - `shaky` - Horizontal offset wrapper used for the shake

pub mod indicator;
pub mod keypad;
pub mod pin_pad;
pub mod shaky;
