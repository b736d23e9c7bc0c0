#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("invalid slot: {0}")]
    InvalidSlot(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

/// Flattens validation errors into `field path -> messages`, descending into
/// nested structs (`nutrients.fat`) and lists (`ingredients[0].name`).
pub fn field_messages(
    errors: &validator::ValidationErrors,
) -> std::collections::BTreeMap<String, Vec<String>> {
    let mut out = std::collections::BTreeMap::new();
    collect_messages(errors, "", &mut out);
    out
}

fn collect_messages(
    errors: &validator::ValidationErrors,
    prefix: &str,
    out: &mut std::collections::BTreeMap<String, Vec<String>>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(path).or_default();
                for error in list {
                    messages.push(
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string()),
                    );
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
