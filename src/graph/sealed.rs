//! Write-once values

/// A value that is fixed when it is created
///
/// Later writes are accepted syntactically but discarded: [`Sealed::set`]
/// leaves the held value in place and reports `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed<T> {
    value: T,
}

impl<T> Sealed<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Discard a write. Always returns `false`; callers log the ignored
    /// write with their own entity id.
    pub fn set(&mut self, _value: T) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_original_value() {
        let mut title = Sealed::new("Original Title".to_string());
        assert!(!title.set("New Title".to_string()));
        assert_eq!(title.get(), "Original Title");
    }
}
