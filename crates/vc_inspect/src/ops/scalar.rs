use core::fmt;

// -----------------------------------------------------------------------------
// Scalar

/// The literal content of a scalar value.
///
/// The width of an integer is carried by its [`Kind`](crate::info::Kind),
/// the literal itself is widened to 64 bits.
///
/// `f32` keeps its own variant so it is rendered with the shortest
/// representation of the 32-bit value (`0.02`, not `0.019999999552965164`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float32(f32),
    Float64(f64),
    Str(&'a str),
}

impl Scalar<'_> {
    /// Returns `true` if this scalar equals the literal spelled by `token`.
    ///
    /// The token is parsed according to the variant: `true`/`false` for
    /// booleans, base-10 for integers, decimal for floats, verbatim for
    /// strings. Returns `None` if the token does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_inspect::ops::Scalar;
    ///
    /// assert_eq!(Scalar::Int(-4).matches_token("-4"), Some(true));
    /// assert_eq!(Scalar::Uint(4).matches_token("5"), Some(false));
    /// assert_eq!(Scalar::Uint(4).matches_token("-5"), None);
    /// assert_eq!(Scalar::Str("a b").matches_token("a b"), Some(true));
    /// ```
    pub fn matches_token(&self, token: &str) -> Option<bool> {
        match *self {
            Self::Bool(value) => token.parse::<bool>().ok().map(|t| t == value),
            Self::Int(value) => token.parse::<i64>().ok().map(|t| t == value),
            Self::Uint(value) => token.parse::<u64>().ok().map(|t| t == value),
            Self::Float32(value) => token.parse::<f32>().ok().map(|t| t == value),
            Self::Float64(value) => token.parse::<f64>().ok().map(|t| t == value),
            Self::Str(value) => Some(token == value),
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => fmt::Display::fmt(value, f),
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::Uint(value) => fmt::Display::fmt(value, f),
            Self::Float32(value) => fmt::Display::fmt(value, f),
            Self::Float64(value) => fmt::Display::fmt(value, f),
            Self::Str(value) => f.write_str(value),
        }
    }
}
