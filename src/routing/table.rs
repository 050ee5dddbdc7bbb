//! The topic-range table and identifier routing.

use crate::error::RoutingError;

/// Declared curriculum ranges. 99 is deliberately outside the table so that
/// an unregistered course number surfaces as a configuration gap.
const CURRICULUM: [(u8, u8, &str); 7] = [
    (1, 10, "general-chemistry"),
    (11, 19, "organic-chemistry"),
    (20, 29, "analytical-chemistry"),
    (30, 39, "physical-chemistry"),
    (40, 49, "biochemistry"),
    (50, 79, "applied-chemistry"),
    (80, 98, "special-topics"),
];

/// One inclusive numeric range mapped to a topic directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRange {
    /// First unit number in the range, inclusive.
    pub start: u8,
    /// Last unit number in the range, inclusive.
    pub end: u8,
    /// Topic directory name.
    pub directory: String,
}

impl TopicRange {
    /// Creates a new range row.
    pub fn new(start: u8, end: u8, directory: impl Into<String>) -> Self {
        Self {
            start,
            end,
            directory: directory.into(),
        }
    }
}

/// Fixed table of topic ranges.
///
/// The mapping is total over the declared numeric domain; identifiers
/// outside it are a [`RoutingError`], never silently defaulted. Disjointness
/// is asserted when the table is built, not per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTable {
    ranges: Vec<TopicRange>,
}

impl TopicTable {
    /// Builds a table, rejecting empty, inverted or overlapping ranges.
    pub fn new(ranges: Vec<TopicRange>) -> Result<Self, RoutingError> {
        if ranges.is_empty() {
            return Err(RoutingError::EmptyTable);
        }
        for range in &ranges {
            if range.start > range.end {
                return Err(RoutingError::InvertedRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }

        let mut ranges = ranges;
        ranges.sort_by_key(|r| r.start);
        for pair in ranges.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(RoutingError::OverlappingRanges {
                    first: pair[0].directory.clone(),
                    second: pair[1].directory.clone(),
                });
            }
        }

        Ok(Self { ranges })
    }

    /// The fixed curriculum table (declared domain 01-98).
    pub fn curriculum() -> Self {
        let ranges = CURRICULUM
            .iter()
            .map(|(start, end, directory)| TopicRange::new(*start, *end, *directory))
            .collect();
        // Literal rows, pairwise disjoint; `new` asserts the same for
        // caller-supplied tables.
        Self { ranges }
    }

    /// The declared ranges, sorted by start.
    pub fn ranges(&self) -> &[TopicRange] {
        &self.ranges
    }

    /// Resolves an identifier to its topic directory.
    ///
    /// The identifier's leading token must be a zero-padded two-digit
    /// number; a missing prefix or a number outside all declared ranges is a
    /// [`RoutingError`].
    pub fn route(&self, identifier: &str) -> Result<&str, RoutingError> {
        let number = unit_number(identifier)?;
        self.ranges
            .iter()
            .find(|range| range.start <= number && number <= range.end)
            .map(|range| range.directory.as_str())
            .ok_or_else(|| RoutingError::UnmappedIdentifier {
                id: identifier.to_string(),
                number,
            })
    }
}

/// Parses the zero-padded two-digit prefix of an identifier.
fn unit_number(identifier: &str) -> Result<u8, RoutingError> {
    let bytes = identifier.as_bytes();
    let has_prefix = bytes.len() >= 2
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes.get(2).map_or(true, |b| !b.is_ascii_digit());

    if !has_prefix {
        return Err(RoutingError::MissingNumericPrefix(identifier.to_string()));
    }
    Ok((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curriculum_table_passes_construction_validation() {
        let ranges = CURRICULUM
            .iter()
            .map(|(start, end, directory)| TopicRange::new(*start, *end, *directory))
            .collect();
        let validated = TopicTable::new(ranges).expect("curriculum ranges are disjoint");
        assert_eq!(validated, TopicTable::curriculum());
    }

    #[test]
    fn test_route_is_total_over_declared_domain() {
        let table = TopicTable::curriculum();
        for number in 1..=98u8 {
            let id = format!("{number:02}-course");
            let routed = table.route(&id);
            assert!(routed.is_ok(), "unit {number:02} should route");
        }
    }

    #[test]
    fn test_ranges_are_pairwise_disjoint() {
        let table = TopicTable::curriculum();
        for number in 1..=98u8 {
            let matching = table
                .ranges()
                .iter()
                .filter(|r| r.start <= number && number <= r.end)
                .count();
            assert_eq!(matching, 1, "unit {number:02} should route to exactly one directory");
        }
    }

    #[test]
    fn test_route_examples() {
        let table = TopicTable::curriculum();
        assert_eq!(table.route("03-chemical-bonding").unwrap(), "general-chemistry");
        assert_eq!(table.route("11-hydrocarbons").unwrap(), "organic-chemistry");
        assert_eq!(table.route("45-enzymes").unwrap(), "biochemistry");
        assert_eq!(table.route("80-green-chemistry").unwrap(), "special-topics");
    }

    #[test]
    fn test_unmapped_identifier_is_an_error() {
        let table = TopicTable::curriculum();
        let result = table.route("99-unmapped");
        assert!(matches!(
            result,
            Err(RoutingError::UnmappedIdentifier { number: 99, .. })
        ));
    }

    #[test]
    fn test_missing_prefix_is_an_error() {
        let table = TopicTable::curriculum();
        for id in ["chemistry-basics", "1-short", "123-too-long", ""] {
            assert!(
                matches!(table.route(id), Err(RoutingError::MissingNumericPrefix(_))),
                "identifier {id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_construction_rejects_overlap() {
        let result = TopicTable::new(vec![
            TopicRange::new(1, 10, "alpha"),
            TopicRange::new(10, 19, "beta"),
        ]);
        assert!(matches!(
            result,
            Err(RoutingError::OverlappingRanges { .. })
        ));
    }

    #[test]
    fn test_construction_rejects_inverted_range() {
        let result = TopicTable::new(vec![TopicRange::new(10, 1, "alpha")]);
        assert!(matches!(
            result,
            Err(RoutingError::InvertedRange { start: 10, end: 1 })
        ));
    }

    #[test]
    fn test_construction_rejects_empty_table() {
        assert!(matches!(
            TopicTable::new(vec![]),
            Err(RoutingError::EmptyTable)
        ));
    }
}
