//! Token scripts for `calc_cli run`.
//!
//! A script is a list of tokens, each one of:
//! - a number literal (`42`, `0.5`, `.25`), typed digit by digit
//! - an operator symbol (`+ - * / x × ÷ ^`) or `=`
//! - any action identifier (`sin`, `clear-entry`, `root-4`, `pi`, ...)
//!
//! So `3 + 4 x 2 =` drives the engine exactly like the keypad would. The
//! keypad has no sign key, so a negative number is written `0 - 4`.

use calc_core::{Action, CalcError, CalcResult, Digit};

/// Expand script tokens into the actions they stand for.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> CalcResult<Vec<Action>> {
    let mut actions = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        if is_number_literal(token) {
            actions.extend(number_actions(token)?);
        } else if token.strip_prefix('-').is_some_and(is_number_literal) {
            return Err(CalcError::invalid_input(
                "number",
                token,
                "Negative numbers are entered as 0 - N",
            ));
        } else {
            actions.push(token.parse()?);
        }
    }
    Ok(actions)
}

/// A literal made only of digits and at most one decimal point
fn is_number_literal(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn number_actions(literal: &str) -> CalcResult<Vec<Action>> {
    if literal.matches('.').count() > 1 {
        return Err(CalcError::invalid_input(
            "number",
            literal,
            "A number may contain one decimal point",
        ));
    }
    literal
        .chars()
        .map(|c| {
            if c == '.' {
                Ok(Action::Decimal)
            } else {
                Digit::try_from(c).map(Action::Digit)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{BinaryOperator, CalculatorEngine, UnaryFunction};

    fn run(script: &str) -> CalculatorEngine {
        let tokens: Vec<&str> = script.split_whitespace().collect();
        let mut engine = CalculatorEngine::new();
        for action in parse_tokens(&tokens).unwrap() {
            engine.dispatch(action);
        }
        engine
    }

    #[test]
    fn test_number_literals_expand_to_keystrokes() {
        let actions = parse_tokens(&["12.5"]).unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[2], Action::Decimal);
    }

    #[test]
    fn test_symbols_and_names() {
        let actions = parse_tokens(&["x", "sin", "="]).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Operator(BinaryOperator::Multiply),
                Action::Function(UnaryFunction::Sin),
                Action::Equals,
            ]
        );
    }

    #[test]
    fn test_scripts_drive_engine() {
        assert_eq!(run("3 + 4 x 2 =").display(), "14");
        assert_eq!(run("5 / 0 =").display(), "NaN");
        assert_eq!(run(".1 + .2 =").display(), "0.3");
        assert_eq!(run("degrees 30 sin").display(), "0.5");
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(parse_tokens(&["1.2.3"]).is_err());
        assert!(parse_tokens(&["frobnicate"]).is_err());
    }

    #[test]
    fn test_negative_literal_is_rejected_with_hint() {
        let err = parse_tokens(&["-4"]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("0 - N"));

        // A lone minus is still the subtraction operator
        assert_eq!(run("0 - 4 =").display(), "-4");
    }
}
