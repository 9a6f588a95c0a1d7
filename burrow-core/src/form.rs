/// Ordered multi-value map backing form serialization.
///
/// Any number of controls may share a name; every value is kept in document
/// order. Replaces the source convention of coercing the second occurrence
/// into a two-slot array and dropping the third.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// All values recorded under `name`, in order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// First value recorded under `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_name_yields_two_values() {
        let mut form = FormValues::new();
        form.append("param", "a");
        form.append("param", "b");
        assert_eq!(form.values("param"), vec!["a", "b"]);
    }

    #[test]
    fn test_third_occurrence_extends_instead_of_overwriting() {
        // Regression probe against the old 2-slot coercion, where the third
        // value replaced the array instead of extending it.
        let mut form = FormValues::new();
        form.append("param", "a");
        form.append("param", "b");
        form.append("param", "c");
        assert_eq!(form.values("param"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_document_order_across_names() {
        let mut form = FormValues::new();
        form.append("crop-size", "80");
        form.append("fps", "30");
        form.append("crop-size", "80");
        let pairs: Vec<_> = form.iter().collect();
        assert_eq!(
            pairs,
            vec![("crop-size", "80"), ("fps", "30"), ("crop-size", "80")]
        );
    }

    #[test]
    fn test_first_and_missing_names() {
        let mut form = FormValues::new();
        form.append("group", "saline");
        assert_eq!(form.first("group"), Some("saline"));
        assert_eq!(form.first("absent"), None);
        assert!(form.values("absent").is_empty());
    }
}
