use std::fmt;

/// Placeholder rendered for any missing field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Displays the wrapped value, or [`NOT_AVAILABLE`] when absent.
pub struct OrNa<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrNa<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(NOT_AVAILABLE),
        }
    }
}
