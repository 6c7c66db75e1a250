//! Fixed-width integers.
//!
//! Decoded documents only ever produce 64-bit integers, but records built from
//! Rust types carry whatever width their fields were declared with. `Integer`
//! keeps that width so integer-keyed mappings can compare keys exactly.

use std::fmt;

/// Width and signedness of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntKind {
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64 | IntKind::Isize
        )
    }

    /// Rust spelling of the type, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::Isize => "isize",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::Usize => "usize",
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An integer that remembers its declared width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integer {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

impl Integer {
    pub fn kind(&self) -> IntKind {
        match self {
            Integer::I8(_) => IntKind::I8,
            Integer::I16(_) => IntKind::I16,
            Integer::I32(_) => IntKind::I32,
            Integer::I64(_) => IntKind::I64,
            Integer::Isize(_) => IntKind::Isize,
            Integer::U8(_) => IntKind::U8,
            Integer::U16(_) => IntKind::U16,
            Integer::U32(_) => IntKind::U32,
            Integer::U64(_) => IntKind::U64,
            Integer::Usize(_) => IntKind::Usize,
        }
    }

    /// Reads the value as an `i64`. Large unsigned values wrap.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Integer::I8(n) => n as i64,
            Integer::I16(n) => n as i64,
            Integer::I32(n) => n as i64,
            Integer::I64(n) => n,
            Integer::Isize(n) => n as i64,
            Integer::U8(n) => n as i64,
            Integer::U16(n) => n as i64,
            Integer::U32(n) => n as i64,
            Integer::U64(n) => n as i64,
            Integer::Usize(n) => n as i64,
        }
    }

    /// Reads the value as a `u64`. Negative values wrap.
    pub fn as_u64(&self) -> u64 {
        match *self {
            Integer::I8(n) => n as u64,
            Integer::I16(n) => n as u64,
            Integer::I32(n) => n as u64,
            Integer::I64(n) => n as u64,
            Integer::Isize(n) => n as u64,
            Integer::U8(n) => n as u64,
            Integer::U16(n) => n as u64,
            Integer::U32(n) => n as u64,
            Integer::U64(n) => n,
            Integer::Usize(n) => n as u64,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_u64() == 0
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind().is_signed() {
            write!(f, "{}", self.as_i64())
        } else {
            write!(f, "{}", self.as_u64())
        }
    }
}

macro_rules! integer_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Integer {
                fn from(n: $ty) -> Self {
                    Integer::$variant(n)
                }
            }
        )*
    };
}

integer_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}
