use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No resolver registered for template token '${{{token}}}'")]
    UnresolvedToken { token: String },

    #[error("Unterminated token in template: {template}")]
    UnterminatedToken { template: String },

    #[error("Template expansion exceeded depth {limit} at token '${{{token}}}'")]
    TemplateTooDeep { token: String, limit: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_token_message_shows_placeholder() {
        let err = GenError::UnresolvedToken { token: "dragon_hoard".into() };
        assert_eq!(
            err.to_string(),
            "No resolver registered for template token '${dragon_hoard}'"
        );
    }
}
