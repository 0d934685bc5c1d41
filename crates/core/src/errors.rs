use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::DomainError;

    #[test]
    fn invariant_violation_renders_its_detail() {
        let error = DomainError::InvariantViolation("product identifier must not be blank".into());
        assert_eq!(
            error.to_string(),
            "domain invariant violation: product identifier must not be blank"
        );
    }
}
