use std::fmt;

/// One or more measurement-protocol rules were violated.
///
/// Holds every violated rule's reason, in rule-evaluation order. The list is
/// never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    reasons: Vec<String>,
}

impl ValidationError {
    /// Wrap a list of reasons. Returns `None` if `reasons` is empty.
    pub fn new(reasons: Vec<String>) -> Option<Self> {
        if reasons.is_empty() {
            None
        } else {
            Some(Self { reasons })
        }
    }

    /// The violated rules' reasons, in evaluation order.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Number of violated rules. Always at least one.
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Always `false`: an error holds at least one reason.
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.reasons.as_slice() {
            return f.write_str(only);
        }
        f.write_str("multiple errors:")?;
        for reason in &self.reasons {
            write!(f, "\n{reason}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
