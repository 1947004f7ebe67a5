//! UI module for SciCalc GUI
//!
//! # Panel Structure
//! - `toolbar` - Title, angle mode toggle, theme toggle
//! - `display_panel` - Expression trace above the current value
//! - `keypad` - Button grid, one button per action
//! - `status_bar` - Pending operation and status messages

pub mod display_panel;
pub mod keypad;
pub mod status_bar;
pub mod toolbar;
