use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    #[error("no field named `{0}`")]
    UnknownField(String),
    #[error("value is not assignable to field `{field}`")]
    Incompatible { field: String },
}

pub type Result<T> = std::result::Result<T, ReflectError>;
