//! Path and segment types.

use std::fmt;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Field name or map key; parsed as a number when the container needs one
    Key(String),
    /// Signed index or integer map key
    Signed(i64),
    /// Unsigned index or integer map key
    Unsigned(u64),
    /// Every field, entry or element of the current value (`*`)
    Wildcard,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Signed(n) => write!(f, "{}", n),
            Segment::Unsigned(n) => write!(f, "{}", n),
            Segment::Wildcard => f.write_str("*"),
        }
    }
}

impl Segment {
    /// Describes the segment's type for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Segment::Key(_) => "string",
            Segment::Signed(_) => "signed integer",
            Segment::Unsigned(_) => "unsigned integer",
            Segment::Wildcard => "wildcard",
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

macro_rules! segment_from_int {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Segment {
                fn from(n: $ty) -> Self {
                    Segment::$variant(n as $wide)
                }
            }
        )*
    };
}

segment_from_int!(Signed as i64: i8, i16, i32, i64, isize);
segment_from_int!(Unsigned as u64: u8, u16, u32, u64, usize);

/// An ordered list of segments. The empty path selects the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl AsRef<[Segment]> for Path {
    fn as_ref(&self) -> &[Segment] {
        &self.segments
    }
}

/// Builds a [`Path`] from literals.
///
/// Strings become keys, integers become signed or unsigned indices according
/// to their type, and a bare `*` becomes [`Segment::Wildcard`].
///
/// ```
/// use quillpath::path;
/// use quillpath::path::ast::Segment;
///
/// let p = path!["array", *, "foo", 0u8];
/// assert_eq!(p.segments[1], Segment::Wildcard);
/// assert_eq!(p.segments[3], Segment::Unsigned(0));
/// ```
#[macro_export]
macro_rules! path {
    (@acc [$($out:expr),*]) => {
        $crate::path::ast::Path::new(vec![$($out),*])
    };
    (@acc [$($out:expr),*] * $(, $($rest:tt)*)?) => {
        $crate::path!(@acc [$($out,)* $crate::path::ast::Segment::Wildcard] $($($rest)*)?)
    };
    (@acc [$($out:expr),*] $seg:expr $(, $($rest:tt)*)?) => {
        $crate::path!(@acc [$($out,)* $crate::path::ast::Segment::from($seg)] $($($rest)*)?)
    };
    ($($rest:tt)*) => {
        $crate::path!(@acc [] $($rest)*)
    };
}
