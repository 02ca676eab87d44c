use std::collections::HashSet;

use crate::ucd::Error;

/// Inclusive range of Unicode code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePointRange {
    pub lo: u32,
    pub hi: u32,
}

impl CodePointRange {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    /// Parses a UCD range token: either `XXXX..YYYY` or a single point.
    pub fn parse(token: &str) -> Result<Self, Error> {
        Self::do_parse(token).ok_or_else(|| Error::Range(token.to_string()))
    }

    fn do_parse(token: &str) -> Option<Self> {
        match token.split_once("..") {
            Some((lo, hi)) => {
                let lo = u32::from_str_radix(lo, 16).ok()?;
                let hi = u32::from_str_radix(hi, 16).ok()?;
                Some(Self { lo, hi })
            }
            None => {
                let cp = u32::from_str_radix(token, 16).ok()?;
                Some(Self { lo: cp, hi: cp })
            }
        }
    }
}

/// Merges overlapping and adjacent ranges into the minimal sorted disjoint set.
pub fn merge_ranges(mut ranges: Vec<CodePointRange>) -> Vec<CodePointRange> {
    ranges.sort_unstable();
    let mut merged: Vec<CodePointRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.lo <= last.hi.saturating_add(1) => {
                last.hi = last.hi.max(range.hi);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Collapses a set of scalars into maximal runs of consecutive code points.
pub fn collapse_scalars(scalars: &HashSet<u32>) -> Vec<CodePointRange> {
    let mut scalars: Vec<u32> = scalars.iter().copied().collect();
    scalars.sort_unstable();
    let mut ranges = Vec::new();
    let mut iter = scalars.into_iter();
    let Some(first) = iter.next() else {
        return ranges;
    };
    let mut start = first;
    let mut prev = first;
    for value in iter {
        if value == prev + 1 {
            prev = value;
            continue;
        }
        ranges.push(CodePointRange::new(start, prev));
        start = value;
        prev = value;
    }
    ranges.push(CodePointRange::new(start, prev));
    ranges
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;
    use arbtest::arbtest;

    use super::*;

    #[test]
    fn range_tokens() {
        assert_eq!(
            CodePointRange::new(0x3000, 0x3000),
            CodePointRange::parse("3000").unwrap()
        );
        assert_eq!(
            CodePointRange::new(0xFF01, 0xFF60),
            CodePointRange::parse("FF01..FF60").unwrap()
        );
        assert_eq!(
            CodePointRange::new(0x20000, 0x2FFFD),
            CodePointRange::parse("20000..2FFFD").unwrap()
        );
        assert!(CodePointRange::parse("").is_err());
        assert!(CodePointRange::parse("..").is_err());
        assert!(CodePointRange::parse("3000..").is_err());
        assert!(CodePointRange::parse("..3000").is_err());
        assert!(CodePointRange::parse("GGGG").is_err());
    }

    #[test]
    fn merge_examples() {
        assert!(merge_ranges(Vec::new()).is_empty());
        let single = vec![CodePointRange::new(0x10, 0x20)];
        assert_eq!(single, merge_ranges(single.clone()));
        // Nested ranges collapse into the outer one.
        assert_eq!(
            vec![CodePointRange::new(0x10, 0x40)],
            merge_ranges(vec![
                CodePointRange::new(0x10, 0x40),
                CodePointRange::new(0x20, 0x30),
            ])
        );
        // Adjacent ranges merge, distant ones do not.
        assert_eq!(
            vec![
                CodePointRange::new(0x10, 0x30),
                CodePointRange::new(0x40, 0x41),
            ],
            merge_ranges(vec![
                CodePointRange::new(0x21, 0x30),
                CodePointRange::new(0x10, 0x20),
                CodePointRange::new(0x40, 0x41),
            ])
        );
        assert_eq!(
            vec![
                CodePointRange::new(0x3000, 0x3000),
                CodePointRange::new(0xFF01, 0xFF03),
            ],
            merge_ranges(vec![
                CodePointRange::new(0x3000, 0x3000),
                CodePointRange::new(0xFF01, 0xFF03),
            ])
        );
    }

    #[test]
    fn merge_output_is_sorted_disjoint_non_adjacent() {
        arbtest(|u| {
            let input = arbitrary_ranges(u)?;
            let merged = merge_ranges(input.clone());
            for pair in merged.windows(2) {
                assert!(pair[0].hi + 1 < pair[1].lo, "{:?}", merged);
            }
            assert_eq!(covered(&input), covered(&merged));
            Ok(())
        });
    }

    #[test]
    fn merge_is_idempotent() {
        arbtest(|u| {
            let merged = merge_ranges(arbitrary_ranges(u)?);
            assert_eq!(merged, merge_ranges(merged.clone()));
            Ok(())
        });
    }

    #[test]
    fn merge_is_order_invariant() {
        arbtest(|u| {
            let mut input = arbitrary_ranges(u)?;
            let merged = merge_ranges(input.clone());
            input.reverse();
            assert_eq!(merged, merge_ranges(input.clone()));
            if !input.is_empty() {
                for _ in 0..input.len() {
                    let i = u.choose_index(input.len())?;
                    let j = u.choose_index(input.len())?;
                    input.swap(i, j);
                }
                assert_eq!(merged, merge_ranges(input));
            }
            Ok(())
        });
    }

    #[test]
    fn collapse_examples() {
        assert!(collapse_scalars(&HashSet::new()).is_empty());
        let scalars: HashSet<u32> = [0x10, 0x11, 0x12, 0x20].into_iter().collect();
        assert_eq!(
            vec![
                CodePointRange::new(0x10, 0x12),
                CodePointRange::new(0x20, 0x20),
            ],
            collapse_scalars(&scalars)
        );
        let scalars: HashSet<u32> = [0x23, 0x25].into_iter().collect();
        assert_eq!(
            vec![
                CodePointRange::new(0x23, 0x23),
                CodePointRange::new(0x25, 0x25),
            ],
            collapse_scalars(&scalars)
        );
    }

    #[test]
    fn collapse_round_trip() {
        arbtest(|u| {
            let len = u.arbitrary_len::<u16>()?;
            let mut scalars: HashSet<u32> = HashSet::with_capacity(len);
            for _ in 0..len {
                scalars.insert(u.int_in_range(0..=0x3FF)?);
            }
            let ranges = collapse_scalars(&scalars);
            for pair in ranges.windows(2) {
                assert!(pair[0].hi + 1 < pair[1].lo, "{:?}", ranges);
            }
            assert_eq!(scalars, covered(&ranges));
            Ok(())
        });
    }

    fn arbitrary_ranges(u: &mut Unstructured) -> arbitrary::Result<Vec<CodePointRange>> {
        let len = u.arbitrary_len::<(u16, u16)>()?;
        let mut ranges = Vec::with_capacity(len);
        for _ in 0..len {
            let lo: u32 = u.int_in_range(0..=0x3FF)?;
            let hi: u32 = u.int_in_range(lo..=0x3FF)?;
            ranges.push(CodePointRange::new(lo, hi));
        }
        Ok(ranges)
    }

    fn covered(ranges: &[CodePointRange]) -> HashSet<u32> {
        let mut set = HashSet::new();
        for range in ranges {
            set.extend(range.lo..=range.hi);
        }
        set
    }
}
