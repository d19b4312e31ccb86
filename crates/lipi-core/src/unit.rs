//! Longest-match-first lookup of multi-codepoint units.
//!
//! Entries are kept sorted by descending width, so a probe at any position
//! tries every 3-codepoint unit before any 2-codepoint unit, and those before
//! single codepoints. A shorter unit can therefore never split a longer one.

pub struct UnitTable<V> {
    entries: Vec<(Vec<char>, V)>,
}

impl<V: Copy> UnitTable<V> {
    pub fn new(pairs: &[(&str, V)]) -> Self {
        let mut entries: Vec<(Vec<char>, V)> = pairs
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.chars().collect(), *value))
            .collect();
        // Stable: equal-width entries keep their declaration order.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// Match the longest unit starting at `pos`. Returns the value and the
    /// unit width in codepoints.
    pub fn match_at(&self, chars: &[char], pos: usize) -> Option<(V, usize)> {
        let rest = chars.get(pos..)?;
        self.entries
            .iter()
            .find(|(key, _)| rest.starts_with(key))
            .map(|(key, value)| (*value, key.len()))
    }

    /// Match the longest unit ending exactly at `end` (exclusive).
    pub fn match_ending_at(&self, chars: &[char], end: usize) -> Option<(V, usize)> {
        let head = chars.get(..end)?;
        self.entries
            .iter()
            .find(|(key, _)| head.ends_with(key))
            .map(|(key, value)| (*value, key.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn longest_match_wins() {
        let table = UnitTable::new(&[("k", 1), ("kh", 2), ("kha", 3)]);
        assert_eq!(table.match_at(&chars("khan"), 0), Some((3, 3)));
        assert_eq!(table.match_at(&chars("khi"), 0), Some((2, 2)));
        assert_eq!(table.match_at(&chars("ki"), 0), Some((1, 1)));
    }

    #[test]
    fn no_match_and_out_of_range() {
        let table = UnitTable::new(&[("a", ())]);
        assert_eq!(table.match_at(&chars("b"), 0), None);
        assert_eq!(table.match_at(&chars("a"), 1), None);
        assert_eq!(table.match_at(&chars("a"), 5), None);
    }

    #[test]
    fn match_ending_at_prefers_longer() {
        let table = UnitTable::new(&[("a", 'a'), ("ai", 'A'), ("i", 'i')]);
        let text = chars("kai");
        assert_eq!(table.match_ending_at(&text, 3), Some(('A', 2)));
        assert_eq!(table.match_ending_at(&text, 2), Some(('a', 1)));
        assert_eq!(table.match_ending_at(&text, 1), None);
        assert_eq!(table.match_ending_at(&text, 9), None);
    }

    #[test]
    fn empty_keys_are_ignored() {
        let table = UnitTable::new(&[("", 0), ("x", 1)]);
        assert_eq!(table.match_at(&chars("y"), 0), None);
        assert_eq!(table.match_at(&chars("x"), 0), Some((1, 1)));
    }
}
