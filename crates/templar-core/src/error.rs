use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplarError {
    #[error("Invalid channel: {0}")]
    InvalidChannel(String),

    #[error("Missing field `{field}` for template `{template}`")]
    MissingField { template: String, field: String },

    #[error("Unknown field `{field}` for template `{template}`")]
    UnknownField { template: String, field: String },

    #[error("No records to project")]
    EmptyInput,
}

impl TemplarError {
    pub(crate) fn missing_field(template: &str, field: &str) -> Self {
        TemplarError::MissingField {
            template: template.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn unknown_field(template: &str, field: &str) -> Self {
        TemplarError::UnknownField {
            template: template.to_string(),
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplarError>;
