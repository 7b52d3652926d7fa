use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("access to field `{type_name}.{field}` was denied")]
    AccessDenied { type_name: String, field: String },
    #[error("no type named `{0}` is registered")]
    TypeNotFound(String),
    #[error("type `{type_name}` declares no field named `{field}`")]
    FieldNotFound { type_name: String, field: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn access_denied(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Error::AccessDenied {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn field_not_found(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Error::FieldNotFound {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}
