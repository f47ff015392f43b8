//! Value representation for runtime values

mod display;
mod impls;

use std::sync::Arc;

use serde::{ser, Deserialize, Serialize, Serializer};

/// Runtime value representation for the Lox evaluator.
///
/// A closed set of four kinds. Strings are `Arc`-wrapped so cloning a value
/// out of an AST literal never copies the text.
///
/// In JSON a value is the matching JSON scalar: `null`, a boolean, a number
/// or a string. JSON has no NaN or infinity, so serializing a non-finite
/// number is an error.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absence of a value
    Nil,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Double-precision number
    #[serde(serialize_with = "serialize_finite")]
    Number(f64),

    /// Immutable string
    String(Arc<String>),
}

/// Serialize a number, refusing NaN and the infinities.
///
/// serde_json would otherwise write them as `null`, which reads back as nil.
pub(crate) fn serialize_finite<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if n.is_finite() {
        serializer.serialize_f64(*n)
    } else {
        Err(ser::Error::custom(format!(
            "non-finite number {} has no JSON representation",
            n
        )))
    }
}
