use std::error;
use std::fmt;

/// Operator-facing failure: a missing credential or a rejected API
/// request. The message carries whatever the upstream sent back.
#[derive(Debug, Clone)]
pub struct ExportError {
    message: String
}

impl ExportError {
    pub fn new(message: String) -> ExportError {
        ExportError { message }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl error::Error for ExportError {
    fn description(&self) -> &str {
        &self.message
    }

    fn cause(&self) -> Option<&dyn error::Error> {
        // Generic error, underlying cause isn't tracked.
        None
    }
}
