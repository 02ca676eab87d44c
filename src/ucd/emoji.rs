use std::collections::HashSet;

use crate::ucd::parse_code_point;
use crate::ucd::records;
use crate::ucd::Error;

pub const VARIATION_SELECTOR_16: u32 = 0xFE0F;

/// Extracts base code points that take emoji-style presentation when
/// followed by U+FE0F, from `emoji-variation-sequences.txt`.
pub fn emoji_vs16_bases(text: &str) -> Result<HashSet<u32>, Error> {
    let mut bases = HashSet::new();
    for record in records(text) {
        if record.fields[0] != "emoji style" {
            continue;
        }
        // The file also documents single-token defaults; only two-token
        // sequences are variation sequences.
        let mut tokens = record.token.split_whitespace();
        let (Some(base), Some(selector), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            continue;
        };
        let base = parse_code_point(base)?;
        let selector = parse_code_point(selector)?;
        if selector != VARIATION_SELECTOR_16 {
            continue;
        }
        bases.insert(base);
    }
    Ok(bases)
}
