use std::fmt;
use std::sync::Arc;

/// Shared secret that unlocks the order listing
#[derive(Clone)]
pub struct StaffKey(Arc<str>);

impl StaffKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    /// A missing key never matches, even when the configured key is empty.
    pub fn matches(&self, provided: Option<&str>) -> bool {
        match provided {
            Some(key) => !self.0.is_empty() && key == &*self.0,
            None => false,
        }
    }
}

// Never print the secret
impl fmt::Debug for StaffKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaffKey(***)")
    }
}
