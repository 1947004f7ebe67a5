//! # Calculator Engine
//!
//! Deterministic state machine behind the keypad. Every operation reads and
//! mutates the one [`CalculatorState`] the engine owns, and none of them
//! performs I/O or fails: domain errors become the `"Error"` display, overflow
//! becomes `"Infinity"`, and division by zero propagates as `"NaN"`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::actions::Digit;
//! use calc_core::calculations::BinaryOperator;
//! use calc_core::engine::CalculatorEngine;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.input_digit(Digit::new(3).unwrap());
//! engine.handle_operator(BinaryOperator::Add);
//! engine.input_digit(Digit::new(4).unwrap());
//! engine.handle_operator(BinaryOperator::Multiply); // 3 + 4 resolves here
//! assert_eq!(engine.display(), "7");
//!
//! engine.input_digit(Digit::new(2).unwrap());
//! engine.equals();
//! assert_eq!(engine.display(), "14");
//! assert_eq!(engine.expression(), "7 × 2 =");
//! ```

use tracing::{debug, trace};

use crate::actions::{Action, Digit};
use crate::calculations::{scientific, AngleMode, BinaryOperator, Constant, UnaryFunction};
use crate::format::{format_result, is_numeral, number_to_string, parse_display, ERROR_TOKEN};
use crate::state::{CalculatorState, INITIAL_DISPLAY};

/// Owns the calculator state and applies inputs to it.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Engine in the initial state, radians mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine in the initial state with the given angle mode
    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        CalculatorEngine {
            state: CalculatorState::new(angle_mode),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current display text
    pub fn display(&self) -> &str {
        &self.state.display_value
    }

    /// Current expression trace
    pub fn expression(&self) -> &str {
        &self.state.expression
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.state.angle_mode
    }

    pub fn last_action(&self) -> Option<Action> {
        self.state.last_action
    }

    /// Apply one input and remember it as the last action.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = %action, "dispatch");
        match action {
            Action::Digit(digit) => self.input_digit(digit),
            Action::Decimal => self.input_decimal(),
            Action::Operator(op) => self.handle_operator(op),
            Action::Equals => self.equals(),
            Action::Clear => self.clear(),
            Action::ClearEntry => self.clear_entry(),
            Action::Function(function) => self.apply(function),
            Action::Constant(constant) => self.input_constant(constant),
            Action::SetAngleMode(mode) => self.set_angle_mode(mode),
            Action::ToggleAngleMode => self.toggle_angle_mode(),
        }
        self.state.last_action = Some(action);
        trace!(
            display = %self.state.display_value,
            expression = %self.state.expression,
            "state updated"
        );
    }

    /// Type a digit.
    ///
    /// Starts a new entry right after an operator, replaces a lone `"0"` or a
    /// non-numeric display (`"Error"`, `"NaN"`), and appends otherwise.
    pub fn input_digit(&mut self, digit: Digit) {
        let state = &mut self.state;
        if state.waiting_for_second_operand {
            state.display_value = digit.to_string();
            state.waiting_for_second_operand = false;
        } else if state.display_value == INITIAL_DISPLAY || !is_numeral(&state.display_value) {
            state.display_value = digit.to_string();
        } else {
            state.display_value.push(digit.as_char());
        }
    }

    /// Type a decimal point. A second point in the same entry is ignored.
    pub fn input_decimal(&mut self) {
        let state = &mut self.state;
        if state.waiting_for_second_operand {
            state.display_value = "0.".to_string();
            state.waiting_for_second_operand = false;
            return;
        }

        if !is_numeral(&state.display_value) {
            state.display_value = "0.".to_string();
        } else if !state.display_value.contains(['.', 'e']) {
            state.display_value.push('.');
        }
    }

    /// Choose a binary operator.
    ///
    /// - Right after another operator: replace it, compute nothing.
    /// - No first operand yet: capture the displayed value.
    /// - Operand, operator and second entry present: resolve immediately
    ///   (`3 + 4 ×` shows `7`) and keep the result as the first operand.
    /// - Operand kept from `=`: continue from the unrounded result.
    pub fn handle_operator(&mut self, op: BinaryOperator) {
        let state = &mut self.state;
        let input = parse_display(&state.display_value);

        if state.has_pending_operation() && state.waiting_for_second_operand {
            state.operator = Some(op);
            return;
        }

        match (state.first_operand, state.operator) {
            (Some(first), Some(pending)) => {
                let result = pending.resolve(first, input);
                debug!(first, second = input, op = %pending, result, "chained resolution");
                state.display_value = format_result(result);
                state.first_operand = Some(result);
            }
            (Some(_), None) => {}
            (None, _) => {
                // A non-numeric display leaves the operand to be captured later
                state.first_operand = (!input.is_nan()).then_some(input);
            }
        }

        state.operator = Some(op);
        state.waiting_for_second_operand = true;
    }

    /// Resolve the pending binary operation.
    ///
    /// Pressing `=` straight after an operator redisplays the first operand.
    /// With nothing pending, or a non-numeric display, this is a no-op.
    pub fn equals(&mut self) {
        let state = &mut self.state;

        if state.has_pending_operation() && state.waiting_for_second_operand {
            if let Some(first) = state.first_operand {
                state.display_value = format_result(first);
                state.expression = format!("{} =", format_result(first));
            }
            state.operator = None;
            state.waiting_for_second_operand = false;
            return;
        }

        let input = parse_display(&state.display_value);
        let (Some(op), Some(first)) = (state.operator, state.first_operand) else {
            return;
        };
        if input.is_nan() {
            return;
        }

        let result = op.resolve(first, input);
        state.display_value = format_result(result);
        state.expression = format!(
            "{} {} {} =",
            format_result(first),
            op.symbol(),
            number_to_string(input)
        );
        state.first_operand = Some(result);
        state.waiting_for_second_operand = true;
        state.operator = None;
    }

    /// Apply a scientific function to the displayed value.
    ///
    /// Only the display and expression change; any pending binary operation
    /// is left exactly as it was.
    pub fn apply(&mut self, function: UnaryFunction) {
        let state = &mut self.state;
        let value = parse_display(&state.display_value);
        let trace = function.trace(value);

        match scientific::evaluate(function, value, state.angle_mode) {
            Ok(result) => {
                state.display_value = format_result(result);
                state.expression = format!("{} =", trace);
            }
            Err(err) => {
                debug!(error = %err, "domain error");
                state.display_value = ERROR_TOKEN.to_string();
                state.expression = format!("{} - Domain Error", trace);
            }
        }
    }

    /// Replace the display with a constant at full precision.
    pub fn input_constant(&mut self, constant: Constant) {
        self.state.display_value = number_to_string(constant.value());
        self.state.expression = constant.symbol().to_string();
    }

    /// Reset to the initial state, keeping the angle mode.
    pub fn clear(&mut self) {
        self.state = CalculatorState::new(self.state.angle_mode);
    }

    /// Reset the display only; a pending operation survives.
    pub fn clear_entry(&mut self) {
        self.state.display_value = INITIAL_DISPLAY.to_string();
    }

    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.state.angle_mode = angle_mode;
    }

    pub fn toggle_angle_mode(&mut self) {
        self.state.angle_mode = self.state.angle_mode.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dispatch whitespace-separated action codes; multi-digit tokens are
    /// typed one character at a time.
    fn press(engine: &mut CalculatorEngine, keys: &str) {
        for token in keys.split_whitespace() {
            if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                for c in token.chars() {
                    engine.dispatch(c.to_string().parse().unwrap());
                }
            } else {
                engine.dispatch(token.parse().unwrap());
            }
        }
    }

    fn run(keys: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, keys);
        engine
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run("1 2 3").display(), "123");
        assert_eq!(run("0 5").display(), "5");
        assert_eq!(run("0 0 7 0").display(), "70");
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(run("1 . .").display(), "1.");
        assert_eq!(run(". . 5").display(), "0.5");
        assert_eq!(run("2 . 5 .").display(), "2.5");
    }

    #[test]
    fn test_decimal_starts_second_operand() {
        let engine = run("5 + . 5");
        assert_eq!(engine.display(), "0.5");
        assert!(!engine.state().waiting_for_second_operand);
    }

    #[test]
    fn test_chained_evaluation() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "3 + 4 *");
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.state().first_operand, Some(7.0));

        press(&mut engine, "2 =");
        assert_eq!(engine.display(), "14");
    }

    #[test]
    fn test_operator_replacement() {
        let engine = run("8 + * 2 =");
        assert_eq!(engine.display(), "16");
        assert_eq!(engine.expression(), "8 × 2 =");
    }

    #[test]
    fn test_divide_by_zero_shows_nan() {
        let engine = run("5 / 0 =");
        assert_eq!(engine.display(), "NaN");
        assert_eq!(engine.expression(), "5 ÷ 0 =");
    }

    #[test]
    fn test_rounding_to_significant_digits() {
        let engine = run("0.1 + 0.2 =");
        assert_eq!(engine.display(), "0.3");
        assert_eq!(engine.expression(), "0.1 + 0.2 =");

        let engine = run("100000000000.5 + 0 =");
        assert_eq!(engine.display(), "100000000001");
        assert_eq!(engine.expression(), "100000000001 + 0 =");
    }

    #[test]
    fn test_power_operator() {
        let engine = run("2 power 10 =");
        assert_eq!(engine.display(), "1024");
        assert_eq!(engine.expression(), "2 ^ 10 =");
    }

    #[test]
    fn test_equals_right_after_operator() {
        let engine = run("7 + =");
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.expression(), "7 =");
        assert_eq!(engine.state().operator, None);
        assert!(!engine.state().waiting_for_second_operand);
    }

    #[test]
    fn test_equals_without_pending_operation_is_noop() {
        let mut engine = run("4 2");
        let before = engine.state().clone();
        engine.equals();
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_repeated_equals_keeps_result() {
        let engine = run("3 + 4 = =");
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.expression(), "3 + 4 =");
    }

    #[test]
    fn test_continue_from_result() {
        assert_eq!(run("3 + 4 = * 2 =").display(), "14");
        // The kept result stays the first operand even after a fresh entry
        assert_eq!(run("3 + 4 = 9 + 1 =").display(), "8");
    }

    #[test]
    fn test_continue_from_result_keeps_full_precision() {
        let engine = run("1 / 3 = * 3 =");
        assert_eq!(engine.display(), "1");
        assert_eq!(engine.expression(), "0.333333333333 × 3 =");
        assert_eq!(engine.state().first_operand, Some(1.0));
    }

    #[test]
    fn test_result_is_stored_as_first_operand() {
        let engine = run("6 * 7 =");
        assert_eq!(engine.state().first_operand, Some(42.0));
        assert!(engine.state().waiting_for_second_operand);
        assert_eq!(engine.state().operator, None);
    }

    #[test]
    fn test_domain_error_leaves_binary_state() {
        let mut engine = run("7 + 2");
        let before = engine.state().clone();

        press(&mut engine, "arcsin");
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.expression(), "arcsin(2) - Domain Error");
        assert_eq!(engine.state().first_operand, before.first_operand);
        assert_eq!(engine.state().operator, before.operator);
        assert_eq!(
            engine.state().waiting_for_second_operand,
            before.waiting_for_second_operand
        );
    }

    #[test]
    fn test_digit_replaces_error() {
        let engine = run("2 arcsin 5");
        assert_eq!(engine.display(), "5");

        let engine = run("5 / 0 = clear-entry 3 .");
        assert_eq!(engine.display(), "3.");
    }

    #[test]
    fn test_factorial_boundary() {
        let engine = run("170 factorial");
        assert_ne!(engine.display(), "Infinity");
        assert!(parse_display(engine.display()).is_finite());

        let engine = run("171 factorial");
        assert_eq!(engine.display(), "Infinity");
        assert_eq!(engine.expression(), "171! =");
    }

    #[test]
    fn test_factorial_values_and_domain() {
        assert_eq!(run("5 factorial").display(), "120");
        assert_eq!(run("0 factorial").display(), "1");

        let engine = run("2.5 factorial");
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.expression(), "2.5! - Domain Error");
    }

    #[test]
    fn test_clear_entry_keeps_pending_operation() {
        let mut engine = run("7 + 9");
        assert_eq!(engine.display(), "9");

        press(&mut engine, "clear-entry");
        assert_eq!(engine.display(), "0");

        press(&mut engine, "=");
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.expression(), "7 + 0 =");
    }

    #[test]
    fn test_clear_restores_initial_state() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 2 + 3 = sin 4 *");
        engine.clear();
        assert_eq!(engine.state(), &CalculatorState::default());
    }

    #[test]
    fn test_clear_preserves_angle_mode() {
        let mut engine = CalculatorEngine::with_angle_mode(AngleMode::Degrees);
        press(&mut engine, "9 0 sin");
        engine.clear();
        assert_eq!(engine.angle_mode(), AngleMode::Degrees);
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_trig_in_degrees() {
        let mut engine = CalculatorEngine::new();
        engine.set_angle_mode(AngleMode::Degrees);
        press(&mut engine, "3 0 sin");
        assert_eq!(engine.display(), "0.5");
        assert_eq!(engine.expression(), "sin(30) =");

        press(&mut engine, "clear 1 arctan");
        assert_eq!(engine.display(), "45");
    }

    #[test]
    fn test_toggle_angle_mode() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "angle-mode");
        assert_eq!(engine.angle_mode(), AngleMode::Degrees);
        press(&mut engine, "radians");
        assert_eq!(engine.angle_mode(), AngleMode::Radians);
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(run("100 log").display(), "2");
        assert_eq!(run("100 log").expression(), "log10(100) =");

        let engine = run("0 ln");
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.expression(), "ln(0) - Domain Error");
    }

    #[test]
    fn test_roots() {
        assert_eq!(run("9 sqrt").display(), "3");
        assert_eq!(run("27 cbrt").display(), "3");
        assert_eq!(run("16 root-4").display(), "2");

        let engine = run("4 sqrt");
        assert_eq!(engine.expression(), "√4 =");
    }

    #[test]
    fn test_sqrt_of_negative_is_domain_error() {
        // negative values can only be reached as results
        let engine = run("0 - 4 = sqrt");
        assert_eq!(engine.display(), "Error");
        assert_eq!(engine.expression(), "√-4 - Domain Error");
    }

    #[test]
    fn test_exponentials_and_square() {
        assert_eq!(run("3 pow10").display(), "1000");
        assert_eq!(run("3 pow10").expression(), "10^3 =");
        assert_eq!(run("1 exp").display(), "2.71828182846");
        assert_eq!(run("1 2 square").display(), "144");
    }

    #[test]
    fn test_percent() {
        let engine = run("5 0 percent");
        assert_eq!(engine.display(), "0.5");
        assert_eq!(engine.expression(), "50% =");
    }

    #[test]
    fn test_constants() {
        let engine = run("pi");
        assert_eq!(engine.display(), "3.141592653589793");
        assert_eq!(engine.expression(), "π");

        assert_eq!(run("e").display(), "2.718281828459045");
    }

    #[test]
    fn test_unary_does_not_touch_pending_operation() {
        let mut engine = run("7 + 9 square");
        assert_eq!(engine.display(), "81");
        assert_eq!(engine.state().first_operand, Some(7.0));
        assert_eq!(engine.state().operator, Some(BinaryOperator::Add));

        press(&mut engine, "=");
        assert_eq!(engine.display(), "88");
    }

    #[test]
    fn test_dispatch_records_last_action() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.last_action(), None);

        engine.dispatch(Action::Function(UnaryFunction::Sin));
        assert_eq!(engine.last_action(), Some(Action::Function(UnaryFunction::Sin)));

        engine.dispatch(Action::Operator(BinaryOperator::Add));
        assert_eq!(engine.last_action(), Some(Action::Operator(BinaryOperator::Add)));
    }

    #[test]
    fn test_operator_after_error_waits_for_operand() {
        // "Error" cannot become an operand; the next operator captures one
        let mut engine = run("2 arcsin +");
        assert_eq!(engine.state().first_operand, None);
        assert_eq!(engine.state().operator, Some(BinaryOperator::Add));

        press(&mut engine, "4 + 1 =");
        assert_eq!(engine.display(), "5");
    }
}
