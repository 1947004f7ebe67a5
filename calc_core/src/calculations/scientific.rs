//! # Scientific Functions
//!
//! Single-operand functions applied to the displayed value: trigonometry,
//! logarithms, exponentials, powers and roots, factorial and percent, plus
//! the constants π and e.
//!
//! Functions are pure: [`evaluate`] takes the value and the angle mode and
//! returns either the raw result or a [`CalcError::DomainError`]. The engine
//! decides how to show it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::scientific::{evaluate, AngleMode, UnaryFunction};
//!
//! let half = evaluate(UnaryFunction::Sin, 30.0, AngleMode::Degrees).unwrap();
//! assert!((half - 0.5).abs() < 1e-12);
//!
//! assert!(evaluate(UnaryFunction::Arcsin, 2.0, AngleMode::Radians).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::number_to_string;

/// Largest n for which n! is finite in an f64
pub const MAX_FACTORIAL: f64 = 170.0;

/// Interpretation of trigonometric input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// Convert an angle in this mode to radians
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle * std::f64::consts::PI / 180.0,
        }
    }

    /// Convert an angle in radians to this mode
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            AngleMode::Radians => radians,
            AngleMode::Degrees => radians * 180.0 / std::f64::consts::PI,
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        }
    }

    /// Short label for status lines ("RAD" / "DEG")
    pub fn label(&self) -> &'static str {
        match self {
            AngleMode::Radians => "RAD",
            AngleMode::Degrees => "DEG",
        }
    }

    /// Stable identifier ("radians" / "degrees")
    pub fn code(&self) -> &'static str {
        match self {
            AngleMode::Radians => "radians",
            AngleMode::Degrees => "degrees",
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Function applied to the displayed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// e^v
    Exp,
    /// 10^v
    Pow10,
    /// v²
    Square,
    Sqrt,
    Cbrt,
    /// General n-th root
    Root(u32),
    Factorial,
    /// v / 100
    Percent,
}

impl UnaryFunction {
    /// Every fixed-arity function offered on the keypad
    pub const KEYPAD: [UnaryFunction; 15] = [
        UnaryFunction::Sin,
        UnaryFunction::Cos,
        UnaryFunction::Tan,
        UnaryFunction::Arcsin,
        UnaryFunction::Arccos,
        UnaryFunction::Arctan,
        UnaryFunction::Log,
        UnaryFunction::Ln,
        UnaryFunction::Exp,
        UnaryFunction::Pow10,
        UnaryFunction::Square,
        UnaryFunction::Sqrt,
        UnaryFunction::Cbrt,
        UnaryFunction::Factorial,
        UnaryFunction::Percent,
    ];

    /// Stable action identifier (e.g., "arcsin", "root-4")
    pub fn code(&self) -> String {
        match self {
            UnaryFunction::Sin => "sin".to_string(),
            UnaryFunction::Cos => "cos".to_string(),
            UnaryFunction::Tan => "tan".to_string(),
            UnaryFunction::Arcsin => "arcsin".to_string(),
            UnaryFunction::Arccos => "arccos".to_string(),
            UnaryFunction::Arctan => "arctan".to_string(),
            UnaryFunction::Log => "log".to_string(),
            UnaryFunction::Ln => "ln".to_string(),
            UnaryFunction::Exp => "exp".to_string(),
            UnaryFunction::Pow10 => "pow10".to_string(),
            UnaryFunction::Square => "square".to_string(),
            UnaryFunction::Sqrt => "sqrt".to_string(),
            UnaryFunction::Cbrt => "cbrt".to_string(),
            UnaryFunction::Root(n) => format!("root-{}", n),
            UnaryFunction::Factorial => "factorial".to_string(),
            UnaryFunction::Percent => "percent".to_string(),
        }
    }

    /// Parse from an identifier, e.g. "sin", "asin", "root-5"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        if let Some(degree) = normalized.strip_prefix("root-") {
            return degree
                .parse()
                .map(UnaryFunction::Root)
                .map_err(|_| CalcError::invalid_input("function", s, "Root degree must be a whole number"));
        }
        match normalized.as_str() {
            "sin" => Ok(UnaryFunction::Sin),
            "cos" => Ok(UnaryFunction::Cos),
            "tan" => Ok(UnaryFunction::Tan),
            "arcsin" | "asin" => Ok(UnaryFunction::Arcsin),
            "arccos" | "acos" => Ok(UnaryFunction::Arccos),
            "arctan" | "atan" => Ok(UnaryFunction::Arctan),
            "log" | "log10" => Ok(UnaryFunction::Log),
            "ln" => Ok(UnaryFunction::Ln),
            "exp" => Ok(UnaryFunction::Exp),
            "pow10" => Ok(UnaryFunction::Pow10),
            "square" | "sqr" => Ok(UnaryFunction::Square),
            "sqrt" => Ok(UnaryFunction::Sqrt),
            "cbrt" => Ok(UnaryFunction::Cbrt),
            "factorial" | "!" => Ok(UnaryFunction::Factorial),
            "percent" | "%" => Ok(UnaryFunction::Percent),
            _ => Err(CalcError::invalid_input("function", s, "Unknown function")),
        }
    }

    /// Keypad label
    pub fn label(&self) -> String {
        match self {
            UnaryFunction::Sin => "sin".to_string(),
            UnaryFunction::Cos => "cos".to_string(),
            UnaryFunction::Tan => "tan".to_string(),
            UnaryFunction::Arcsin => "sin⁻¹".to_string(),
            UnaryFunction::Arccos => "cos⁻¹".to_string(),
            UnaryFunction::Arctan => "tan⁻¹".to_string(),
            UnaryFunction::Log => "log".to_string(),
            UnaryFunction::Ln => "ln".to_string(),
            UnaryFunction::Exp => "eˣ".to_string(),
            UnaryFunction::Pow10 => "10ˣ".to_string(),
            UnaryFunction::Square => "x²".to_string(),
            UnaryFunction::Sqrt => "√".to_string(),
            UnaryFunction::Cbrt => "∛".to_string(),
            UnaryFunction::Root(n) => format!("{}√", n),
            UnaryFunction::Factorial => "n!".to_string(),
            UnaryFunction::Percent => "%".to_string(),
        }
    }

    /// Expression trace for applying this function to `value`, without the
    /// trailing "=" (e.g., "sin(30)", "5!", "√9")
    pub fn trace(&self, value: f64) -> String {
        let v = number_to_string(value);
        match self {
            UnaryFunction::Sin => format!("sin({})", v),
            UnaryFunction::Cos => format!("cos({})", v),
            UnaryFunction::Tan => format!("tan({})", v),
            UnaryFunction::Arcsin => format!("arcsin({})", v),
            UnaryFunction::Arccos => format!("arccos({})", v),
            UnaryFunction::Arctan => format!("arctan({})", v),
            UnaryFunction::Log => format!("log10({})", v),
            UnaryFunction::Ln => format!("ln({})", v),
            UnaryFunction::Exp => format!("e^{}", v),
            UnaryFunction::Pow10 => format!("10^{}", v),
            UnaryFunction::Square => format!("{}^2", v),
            UnaryFunction::Sqrt => format!("√{}", v),
            UnaryFunction::Cbrt => format!("∛{}", v),
            UnaryFunction::Root(n) => format!("{}√{}", n, v),
            UnaryFunction::Factorial => format!("{}!", v),
            UnaryFunction::Percent => format!("{}%", v),
        }
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Constants that can be entered in place of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    /// Symbol shown as the expression trace
    pub fn symbol(&self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
        }
    }

    /// Stable action identifier
    pub fn code(&self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }
}

/// Evaluate a unary function.
///
/// # Returns
///
/// * `Ok(f64)` - The raw (unrounded) result; may be infinite or NaN
/// * `Err(CalcError::DomainError)` - `value` is outside the function's domain
pub fn evaluate(function: UnaryFunction, value: f64, angle_mode: AngleMode) -> CalcResult<f64> {
    match function {
        UnaryFunction::Sin => Ok(angle_mode.to_radians(value).sin()),
        UnaryFunction::Cos => Ok(angle_mode.to_radians(value).cos()),
        UnaryFunction::Tan => Ok(angle_mode.to_radians(value).tan()),
        UnaryFunction::Arcsin => {
            check_unit_interval(function, value)?;
            Ok(angle_mode.from_radians(value.asin()))
        }
        UnaryFunction::Arccos => {
            check_unit_interval(function, value)?;
            Ok(angle_mode.from_radians(value.acos()))
        }
        UnaryFunction::Arctan => Ok(angle_mode.from_radians(value.atan())),
        UnaryFunction::Log => {
            check_positive(function, value)?;
            Ok(value.log10())
        }
        UnaryFunction::Ln => {
            check_positive(function, value)?;
            Ok(value.ln())
        }
        UnaryFunction::Exp => Ok(value.exp()),
        UnaryFunction::Pow10 => Ok(10f64.powf(value)),
        UnaryFunction::Square => Ok(value.powf(2.0)),
        UnaryFunction::Sqrt => nth_root(value, 2),
        UnaryFunction::Cbrt => nth_root(value, 3),
        UnaryFunction::Root(degree) => nth_root(value, degree),
        UnaryFunction::Factorial => factorial(value),
        UnaryFunction::Percent => Ok(value / 100.0),
    }
}

/// The `degree`-th root of `value`.
///
/// Even roots of negative values and the zeroth root are domain errors.
/// Odd roots of negative values return the real (negative) root.
pub fn nth_root(value: f64, degree: u32) -> CalcResult<f64> {
    let function = UnaryFunction::Root(degree);
    if degree == 0 || (value < 0.0 && degree % 2 == 0) {
        return Err(CalcError::domain_error(function.code(), number_to_string(value)));
    }
    let root = match degree {
        2 => value.sqrt(),
        3 => value.cbrt(),
        _ if value < 0.0 => -(-value).powf(1.0 / degree as f64),
        _ => value.powf(1.0 / degree as f64),
    };
    Ok(root)
}

/// n! for a non-negative integer n, computed as an iterative product.
///
/// Values above [`MAX_FACTORIAL`] overflow to infinity.
pub fn factorial(value: f64) -> CalcResult<f64> {
    if value < 0.0 || value.fract() != 0.0 {
        return Err(CalcError::domain_error(
            UnaryFunction::Factorial.code(),
            number_to_string(value),
        ));
    }
    if value > MAX_FACTORIAL {
        return Ok(f64::INFINITY);
    }

    let n = value as u32;
    let product = (2..=n).fold(1.0, |acc, i| acc * i as f64);
    Ok(product)
}

fn check_unit_interval(function: UnaryFunction, value: f64) -> CalcResult<()> {
    if !(-1.0..=1.0).contains(&value) && !value.is_nan() {
        return Err(CalcError::domain_error(function.code(), number_to_string(value)));
    }
    Ok(())
}

fn check_positive(function: UnaryFunction, value: f64) -> CalcResult<()> {
    if value <= 0.0 {
        return Err(CalcError::domain_error(function.code(), number_to_string(value)));
    }
    Ok(())
}
