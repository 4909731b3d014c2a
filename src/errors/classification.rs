use super::types::AuditError;

/// Exit code for argument errors, matching clap's own usage exit status.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for an input report that could not be read or parsed.
pub const EXIT_INPUT: i32 = 3;
/// Exit code for anything that went wrong after the input was loaded.
pub const EXIT_INTERNAL: i32 = 1;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl AuditError {
    /// Classify this error to determine its type and the process exit code it maps to.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            AuditError::Usage(_) => ErrorClassification {
                error_type: "UsageError",
                exit_code: EXIT_USAGE,
            },

            // Broken input, distinct from a gate that tripped on real issues
            AuditError::Read { .. } => ErrorClassification {
                error_type: "ReadError",
                exit_code: EXIT_INPUT,
            },
            AuditError::Parse { .. } => ErrorClassification {
                error_type: "ParseError",
                exit_code: EXIT_INPUT,
            },

            AuditError::Write { .. } => ErrorClassification {
                error_type: "WriteError",
                exit_code: EXIT_INTERNAL,
            },
            AuditError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: EXIT_INTERNAL,
            },
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.classify().exit_code
    }
}
