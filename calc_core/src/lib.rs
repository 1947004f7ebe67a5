//! # calc_core - Scientific Calculator Engine
//!
//! `calc_core` is the computational heart of SciCalc: the keypad state
//! machine that decides, for any sequence of inputs, what the display shows
//! and which operation is pending. Front ends (`calc_gui`, `calc_cli`) map
//! raw input events to [`Action`]s and render the engine's two observable
//! strings.
//!
//! ## Design Philosophy
//!
//! - **Owned State**: One [`CalculatorState`] held by one [`CalculatorEngine`]
//! - **Closed Actions**: Every input is a variant of [`Action`]
//! - **Never Fails**: Domain errors become display states, not panics
//! - **One Formatter**: All numbers go through [`format::format_result`]
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Action, CalculatorEngine};
//!
//! let mut engine = CalculatorEngine::new();
//! for code in ["1", "7", "0", "factorial"] {
//!     engine.dispatch(code.parse::<Action>().unwrap());
//! }
//! assert_eq!(engine.expression(), "170! =");
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator state machine
//! - [`state`] - Calculator state data
//! - [`actions`] - Closed set of inputs
//! - [`calculations`] - Binary operators and scientific functions
//! - [`format`] - Significant-digit rounding and number rendering
//! - [`keymap`] - Keyboard key to action mapping
//! - [`preferences`] - Persisted theme and angle mode
//! - [`errors`] - Structured error types

pub mod actions;
pub mod calculations;
pub mod engine;
pub mod errors;
pub mod format;
pub mod keymap;
pub mod preferences;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use actions::{Action, Digit};
pub use calculations::{AngleMode, BinaryOperator, Constant, UnaryFunction};
pub use engine::CalculatorEngine;
pub use errors::{CalcError, CalcResult};
pub use preferences::{Preferences, ThemePreference};
pub use state::CalculatorState;
