use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// the label produced for a triple of side lengths
///
/// The string form of each variant is exactly its name, e.g. `"NotATriangle"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
pub enum Classification {
    Right,
    Equilateral,
    Isoceles,
    Scalene,
    NotATriangle,
    InvalidInput,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// true for the four shapes, false for `NotATriangle` and `InvalidInput`
    pub fn is_triangle(self) -> bool {
        !matches!(self, Self::NotATriangle | Self::InvalidInput)
    }
}
