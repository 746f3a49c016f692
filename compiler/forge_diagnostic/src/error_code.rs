use std::fmt;

/// Error codes for all synthesis diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: declaration validation errors
/// - E2xxx: naming errors
/// - E3xxx: synthesis warnings
/// - E9xxx: internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Validation Errors (E1xxx)
    /// Constructor arity differs from accessor count
    E1001,
    /// Canonical constructor is private
    E1002,
    /// Constructor parameter without a matching accessor
    E1003,
    /// Conflicting generation directives
    E1004,
    /// More than one post-build hook
    E1005,
    /// Post-build hook declared with parameters
    E1006,

    // Naming Errors (E2xxx)
    /// Resolved name conflicts with a reserved builder member
    E2001,

    // Synthesis Warnings (E3xxx)
    /// Collection accumulators unavailable for a degenerate collection
    E3001,
    /// Accumulators disabled by a naming collision
    E3002,
    /// Setters fell back to parameter identifiers
    E3003,

    // Internal Errors (E9xxx)
    /// Internal generation error
    E9001,
}

impl ErrorCode {
    /// All error code variants, kept in sync with `as_str()`.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description used as the default message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "constructor arity differs from accessor count",
            ErrorCode::E1002 => "canonical constructor is private",
            ErrorCode::E1003 => "constructor parameter has no matching accessor",
            ErrorCode::E1004 => "conflicting generation directives",
            ErrorCode::E1005 => "more than one post-build hook",
            ErrorCode::E1006 => "post-build hook must not take parameters",
            ErrorCode::E2001 => "name conflicts with a reserved builder member",
            ErrorCode::E3001 => "collection accumulators unavailable",
            ErrorCode::E3002 => "accumulators disabled by a naming collision",
            ErrorCode::E3003 => "setters fell back to parameter identifiers",
            ErrorCode::E9001 => "internal generation error",
        }
    }

    /// Check if this is a declaration validation error (E1xxx range).
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
        )
    }

    /// Check if this is a naming error (E2xxx range).
    pub fn is_naming_error(&self) -> bool {
        matches!(self, ErrorCode::E2001)
    }

    /// Check if this is a warning code (E3xxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
