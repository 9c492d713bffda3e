use thiserror::Error;

/// Errors raised by the validated numeric surface and the entity.
///
/// Empty-stomach `plop` is NOT an error; it returns `None`. Only input
/// validation raises.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric helper received a non-number operand, or a clamped
    /// variant received inverted bounds.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An `Area` handed to `find_food` lacked a required field.
    #[error("area is missing the `{0}` field")]
    MissingField(&'static str),
}

pub(crate) const NOT_A_NUMBER: &str = "arguments should be of type number";
pub(crate) const INVERTED_BOUNDS: &str = "min should be smaller than max";
