//! Element path tracking.
//!
//! S3 reuses element names at different depths (`<ID>` under `<Owner>` and
//! under `<Grantee>`, `<Prefix>` at the top of a listing and inside
//! `<CommonPrefixes>`), so handlers decide what an element means by looking at
//! its ancestors rather than at its name alone.

/// The chain of open element names from the document root.
///
/// When a handler hook runs, the path holds the *ancestors* of the element
/// being started or ended, never the element itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementPath {
    names: Vec<String>,
}

impl ElementPath {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open elements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// Whether no element is open, i.e. the hook concerns the root element.
    #[must_use]
    pub fn at_top_level(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether the path is exactly `names`.
    #[must_use]
    pub fn is(&self, names: &[&str]) -> bool {
        self.names.len() == names.len() && self.starts_with(names)
    }

    /// Whether the path begins with `names`, i.e. the element is somewhere
    /// inside that nesting.
    #[must_use]
    pub fn within(&self, names: &[&str]) -> bool {
        self.names.len() >= names.len() && self.starts_with(names)
    }

    /// Name of the innermost open element.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    /// Iterate over the open element names, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub(crate) fn push(&mut self, name: &str) {
        self.names.push(name.to_owned());
    }

    pub(crate) fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    fn starts_with(&self, names: &[&str]) -> bool {
        self.names.iter().zip(names).all(|(open, want)| open == want)
    }
}

impl std::fmt::Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.names.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(names: &[&str]) -> ElementPath {
        let mut p = ElementPath::new();
        for name in names {
            p.push(name);
        }
        p
    }

    #[test]
    fn test_should_match_exact_path() {
        let p = path(&["ListBucketResult", "Contents"]);
        assert!(p.is(&["ListBucketResult", "Contents"]));
        assert!(!p.is(&["ListBucketResult"]));
        assert!(!p.is(&["ListBucketResult", "Contents", "Owner"]));
        assert!(!p.is(&["ListBucketResult", "CommonPrefixes"]));
    }

    #[test]
    fn test_should_match_path_prefix() {
        let p = path(&["AccessControlPolicy", "AccessControlList", "Grant"]);
        assert!(p.within(&["AccessControlPolicy"]));
        assert!(p.within(&["AccessControlPolicy", "AccessControlList"]));
        assert!(p.within(&[]));
        assert!(!p.within(&["AccessControlPolicy", "Owner"]));
        assert!(!p.within(&[
            "AccessControlPolicy",
            "AccessControlList",
            "Grant",
            "Grantee"
        ]));
    }

    #[test]
    fn test_should_return_to_top_level_after_balanced_pops() {
        let mut p = path(&["Tagging", "TagSet", "Tag"]);
        assert_eq!(p.current(), Some("Tag"));
        assert_eq!(p.to_string(), "Tagging/TagSet/Tag");
        p.pop();
        p.pop();
        p.pop();
        assert!(p.at_top_level());
        assert_eq!(p.depth(), 0);
        assert!(p.is(&[]));
    }
}
