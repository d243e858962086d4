use std::fmt;

use crate::{
    side::{Bounds, InvalidSide, RawSide, Side},
    Classification,
};

/// three side lengths that passed validation and satisfy the strict triangle
/// inequality, stored in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    sides: [Side; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    A,
    B,
    C,
}

/// why a triple did not reach the shape gate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("side {position} is invalid: {reason}")]
    InvalidInput {
        position: Position,
        reason: InvalidSide,
    },
    #[error("sides {} violate the triangle inequality", display_sides(.sides))]
    NotATriangle { sides: [Side; 3] },
}

impl Triangle {
    pub fn try_new(
        a: impl Into<RawSide>,
        b: impl Into<RawSide>,
        c: impl Into<RawSide>,
    ) -> Result<Self, Rejection> {
        Self::try_new_with(Bounds::DEFAULT, a, b, c)
    }

    pub fn try_new_with(
        bounds: Bounds,
        a: impl Into<RawSide>,
        b: impl Into<RawSide>,
        c: impl Into<RawSide>,
    ) -> Result<Self, Rejection> {
        let validate = |raw: RawSide, position| {
            raw.validate(bounds)
                .map_err(|reason| Rejection::InvalidInput { position, reason })
        };
        let a = validate(a.into(), Position::A)?;
        let b = validate(b.into(), Position::B)?;
        let c = validate(c.into(), Position::C)?;
        Self::from_sides([a, b, c])
    }

    /// checks the triangle inequality on already validated sides
    pub fn from_sides(sides: [Side; 3]) -> Result<Self, Rejection> {
        let mut sorted = sides;
        sorted.sort_unstable();
        let [x, y, z] = sorted.map(|s| u64::from(s.get()));
        // sorted, so the other two inequalities hold trivially
        if x + y <= z {
            return Err(Rejection::NotATriangle { sides });
        }
        Ok(Self { sides: sorted })
    }

    pub fn sides(&self) -> [Side; 3] {
        self.sides
    }

    pub fn shape(&self) -> Classification {
        let [x, y, z] = self.sides.map(|s| u128::from(s.get()));
        match (x == y, y == z) {
            (true, true) => Classification::Equilateral,
            (true, false) | (false, true) => Classification::Isoceles,
            (false, false) if x * x + y * y == z * z => Classification::Right,
            (false, false) => Classification::Scalene,
        }
    }
}

impl From<&Rejection> for Classification {
    fn from(rejection: &Rejection) -> Self {
        match rejection {
            Rejection::InvalidInput { .. } => Classification::InvalidInput,
            Rejection::NotATriangle { .. } => Classification::NotATriangle,
        }
    }
}
impl From<Rejection> for Classification {
    fn from(rejection: Rejection) -> Self {
        Self::from(&rejection)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::A => "a",
            Position::B => "b",
            Position::C => "c",
        })
    }
}

fn display_sides(sides: &[Side; 3]) -> String {
    let [a, b, c] = sides;
    format!("{a}, {b}, {c}")
}

/// classify three side lengths of arbitrary type
///
/// Never fails: anything that is not an integer in `1..=200` yields
/// [`Classification::InvalidInput`].
pub fn classify(
    a: impl Into<RawSide>,
    b: impl Into<RawSide>,
    c: impl Into<RawSide>,
) -> Classification {
    classify_with(Bounds::DEFAULT, a, b, c)
}

pub fn classify_with(
    bounds: Bounds,
    a: impl Into<RawSide>,
    b: impl Into<RawSide>,
    c: impl Into<RawSide>,
) -> Classification {
    match Triangle::try_new_with(bounds, a, b, c) {
        Ok(t) => t.shape(),
        Err(rejection) => rejection.into(),
    }
}

/// classify sides that were validated before; skips the validity gate
pub fn classify_sides(sides: [Side; 3]) -> Classification {
    match Triangle::from_sides(sides) {
        Ok(t) => t.shape(),
        Err(rejection) => rejection.into(),
    }
}
