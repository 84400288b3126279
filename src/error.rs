/// Errors returned by the fallible addition entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("integer overflow adding {left} and {right}")]
    Overflow { left: i32, right: i32 },
    #[error("unknown overflow policy `{0}`")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
