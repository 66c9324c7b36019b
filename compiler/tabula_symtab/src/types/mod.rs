//! Type descriptors for declared names.
//!
//! A descriptor is stored flat, as a base type plus the number of `ptr`
//! layers above it. `ptr ptr integer` is `{ Integer, 2 }`; its pointee is
//! `{ Integer, 1 }`. Chains of any length clone, compare and drop without
//! recursion.

use std::fmt;

/// Storage width of `integer`, in bytes.
pub const INTEGER_WIDTH: u32 = 4;
/// Storage width of `real`, in bytes.
pub const REAL_WIDTH: u32 = 8;
/// Storage width of any pointer, regardless of its pointee.
pub const POINTER_WIDTH: u32 = 4;

/// The non-pointer type at the bottom of a pointer chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseType {
    Integer,
    Real,
}

impl BaseType {
    pub fn width(self) -> u32 {
        match self {
            BaseType::Integer => INTEGER_WIDTH,
            BaseType::Real => REAL_WIDTH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseType::Integer => "integer",
            BaseType::Real => "real",
        }
    }
}

/// A declared type: `integer`, `real`, or a pointer to another type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeDesc {
    base: BaseType,
    pointer_depth: u32,
}

impl TypeDesc {
    pub const INTEGER: TypeDesc = TypeDesc::of(BaseType::Integer);
    pub const REAL: TypeDesc = TypeDesc::of(BaseType::Real);

    /// The base type itself, with no pointer layers.
    pub const fn of(base: BaseType) -> Self {
        TypeDesc {
            base,
            pointer_depth: 0,
        }
    }

    pub fn pointer_to(pointee: TypeDesc) -> Self {
        TypeDesc {
            base: pointee.base,
            pointer_depth: pointee.pointer_depth.saturating_add(1),
        }
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer_depth > 0
    }

    /// The type one `ptr` layer down, or `None` for a base type.
    pub fn pointee(&self) -> Option<TypeDesc> {
        self.pointer_depth.checked_sub(1).map(|pointer_depth| TypeDesc {
            base: self.base,
            pointer_depth,
        })
    }

    /// Bytes of storage a variable of this type occupies.
    pub fn width(&self) -> u32 {
        if self.is_pointer() {
            POINTER_WIDTH
        } else {
            self.base.width()
        }
    }

    /// Number of `ptr` layers above the base type.
    pub fn pointer_depth(&self) -> usize {
        self.pointer_depth as usize
    }

    pub fn base(&self) -> BaseType {
        self.base
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.pointer_depth {
            f.write_str("pointer(")?;
        }
        f.write_str(self.base.name())?;
        for _ in 0..self.pointer_depth {
            f.write_str(")")?;
        }
        Ok(())
    }
}
