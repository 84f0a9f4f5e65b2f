use crate::constants::validation::{INVALID_ANSWER, REQUIRED};
use regex::Regex;

/// Accepts or rejects a candidate text answer.
///
/// A rejection carries the reason shown to the user. An empty reason is
/// replaced by a generic message when the answer is checked.
///
/// Validators should be pure: a provider may run the same answer through
/// them more than once while re-asking.
pub trait Validator {
    fn validate(&self, input: &str) -> Result<(), String>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Result<(), String>,
{
    fn validate(&self, input: &str) -> Result<(), String> {
        self(input)
    }
}

/// Rejects the empty answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, input: &str) -> Result<(), String> {
        if input.is_empty() {
            Err(REQUIRED.to_string())
        } else {
            Ok(())
        }
    }
}

/// Rejects answers shorter than the given number of characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl Validator for MinLength {
    fn validate(&self, input: &str) -> Result<(), String> {
        if input.chars().count() < self.0 {
            Err(format!("Value is too short. Min length is {}", self.0))
        } else {
            Ok(())
        }
    }
}

/// Rejects answers longer than the given number of characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength(pub usize);

impl Validator for MaxLength {
    fn validate(&self, input: &str) -> Result<(), String> {
        if input.chars().count() > self.0 {
            Err(format!("Value is too long. Max length is {}", self.0))
        } else {
            Ok(())
        }
    }
}

/// Rejects answers the regular expression does not match.
#[derive(Debug, Clone)]
pub struct Pattern(pub Regex);

impl Validator for Pattern {
    fn validate(&self, input: &str) -> Result<(), String> {
        if self.0.is_match(input) {
            Ok(())
        } else {
            Err(format!("Value does not match '{}'", self.0.as_str()))
        }
    }
}

/// The validators applied to a text answer: [`Required`] first, then the
/// caller's validators in the order given.
pub struct ValidatorChain<'a> {
    validators: &'a [&'a dyn Validator],
}

impl<'a> ValidatorChain<'a> {
    pub fn new(validators: &'a [&'a dyn Validator]) -> Self {
        Self { validators }
    }

    /// Returns the reason of the first validator rejecting `input`.
    pub fn check(&self, input: &str) -> Result<(), String> {
        Required.validate(input)?;
        for validator in self.validators {
            validator.validate(input).map_err(|reason| {
                if reason.is_empty() {
                    INVALID_ANSWER.to_string()
                } else {
                    reason
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_digits(input: &str) -> Result<(), String> {
        if input.chars().any(|c| c.is_ascii_digit()) {
            Err("Digits are not allowed".to_string())
        } else {
            Ok(())
        }
    }

    #[test]
    fn empty_answer_is_always_rejected() {
        let chain = ValidatorChain::new(&[]);
        assert_eq!(chain.check(""), Err(REQUIRED.to_string()));
        assert_eq!(chain.check("x"), Ok(()));
    }

    #[test]
    fn custom_validator_rejects_digits() {
        let validators: [&dyn Validator; 1] = [&no_digits];
        let chain = ValidatorChain::new(&validators);
        assert_eq!(chain.check("a1"), Err("Digits are not allowed".to_string()));
        assert_eq!(chain.check("ab"), Ok(()));
    }

    #[test]
    fn first_rejection_wins() {
        let too_short = MinLength(3);
        let validators: [&dyn Validator; 2] = [&too_short, &no_digits];
        let chain = ValidatorChain::new(&validators);
        assert_eq!(
            chain.check("1"),
            Err("Value is too short. Min length is 3".to_string())
        );
        assert_eq!(chain.check("a12"), Err("Digits are not allowed".to_string()));
    }

    #[test]
    fn empty_reason_falls_back_to_generic_message() {
        let silent = |_: &str| -> Result<(), String> { Err(String::new()) };
        let validators: [&dyn Validator; 1] = [&silent];
        let chain = ValidatorChain::new(&validators);
        assert_eq!(chain.check("abc"), Err(INVALID_ANSWER.to_string()));
    }

    #[test]
    fn length_limits_count_characters() {
        assert!(MaxLength(2).validate("éé").is_ok());
        assert!(MaxLength(2).validate("ééé").is_err());
        assert!(MinLength(2).validate("é").is_err());
    }

    #[test]
    fn pattern_matches_whole_expression() {
        let pattern = Pattern(Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());
        assert!(pattern.validate("my_project").is_ok());
        assert_eq!(
            pattern.validate("My Project"),
            Err("Value does not match '^[a-z][a-z0-9_]*$'".to_string())
        );
    }
}
