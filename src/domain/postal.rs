use serde::{Deserialize, Serialize};

/// Inclusive range of five-digit postal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRange {
    pub start: u32,
    pub end: u32,
}

impl ZipRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, zip: u32) -> bool {
        (self.start..=self.end).contains(&zip)
    }
}

/// Postal code ranges whose customers count as local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalZipPolicy {
    ranges: Vec<ZipRange>,
}

impl LocalZipPolicy {
    pub fn new(ranges: Vec<ZipRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[ZipRange] {
        &self.ranges
    }

    /// Returns true when `code` is a five-digit postal code inside any range.
    ///
    /// Anything that is not exactly five ASCII digits after trimming
    /// (ZIP+4, letters, empty input) is never local.
    pub fn is_local_postal_code(&self, code: &str) -> bool {
        match parse_zip5(code) {
            Some(zip) => self.ranges.iter().any(|range| range.contains(zip)),
            None => false,
        }
    }
}

impl Default for LocalZipPolicy {
    fn default() -> Self {
        Self::new(vec![ZipRange::new(29900, 29999), ZipRange::new(32004, 34997)])
    }
}

fn parse_zip5(code: &str) -> Option<u32> {
    let code = code.trim();
    if code.len() != 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let policy = LocalZipPolicy::default();
        assert!(policy.is_local_postal_code("29950"));
        assert!(policy.is_local_postal_code("29900"));
        assert!(policy.is_local_postal_code("29999"));
        assert!(policy.is_local_postal_code("32004"));
        assert!(policy.is_local_postal_code("34997"));

        assert!(!policy.is_local_postal_code("29899"));
        assert!(!policy.is_local_postal_code("30000"));
        assert!(!policy.is_local_postal_code("32003"));
        assert!(!policy.is_local_postal_code("34998"));
    }

    #[test]
    fn test_malformed_codes_are_never_local() {
        let policy = LocalZipPolicy::default();
        assert!(!policy.is_local_postal_code("abcde"));
        assert!(!policy.is_local_postal_code(""));
        assert!(!policy.is_local_postal_code("2995"));
        assert!(!policy.is_local_postal_code("299500"));
        assert!(!policy.is_local_postal_code("29950-1234"));
        assert!(!policy.is_local_postal_code("+2995"));
        assert!(!policy.is_local_postal_code("02995"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let policy = LocalZipPolicy::default();
        assert!(policy.is_local_postal_code(" 33101 "));
    }

    #[test]
    fn test_custom_policy() {
        let policy = LocalZipPolicy::new(vec![ZipRange::new(10001, 10001)]);
        assert!(policy.is_local_postal_code("10001"));
        assert!(!policy.is_local_postal_code("29950"));
    }
}
