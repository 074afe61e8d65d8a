//! Growth-stage lookup.
//!
//! Crops expose their maturity through an integer property (named `age` on
//! every native crop). Blocks added through the `crops` config may not have
//! one, so the lookup reports a [`GrowthFault`] instead of failing hard.

use thiserror::Error;

use crate::model::{BlockState, StateProperty};

/// Name of the growth-stage property on crop block states.
pub const AGE_PROPERTY: &str = "age";

/// Why a block state's growth stage could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrowthFault {
    /// The state has no property with the growth-stage name
    #[error("block state has no `{0}` property")]
    Missing(String),

    /// The property exists but enumerates no legal values
    #[error("`{0}` property has no legal values")]
    NoLegalValues(String),

    /// The property exists but is not integer-valued
    #[error("`{name}` property is {found}, not an integer property")]
    NotInteger { name: String, found: &'static str },
}

/// Resolved growth-stage property of a block state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthProperty {
    pub name: String,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl GrowthProperty {
    /// A crop is mature once it reaches the largest legal value.
    pub fn is_mature(&self) -> bool {
        self.value >= self.max
    }

    /// Returns `state` with this property set back to its minimum.
    pub fn reset(&self, state: &BlockState) -> BlockState {
        let mut reset = state.clone();
        reset.set_int(&self.name, self.min);
        reset
    }
}

/// Looks up the integer property called `name` on `state`.
pub fn lookup_growth_property(
    state: &BlockState,
    name: &str,
) -> Result<GrowthProperty, GrowthFault> {
    match state.property(name) {
        None => Err(GrowthFault::Missing(name.to_string())),
        Some(StateProperty::Int { values, value }) => {
            match (values.first(), values.last()) {
                (Some(&min), Some(&max)) => Ok(GrowthProperty {
                    name: name.to_string(),
                    value: *value,
                    min,
                    max,
                }),
                _ => Err(GrowthFault::NoLegalValues(name.to_string())),
            }
        }
        Some(other) => Err(GrowthFault::NotInteger {
            name: name.to_string(),
            found: other.kind(),
        }),
    }
}
