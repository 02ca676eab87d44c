use crate::ucd::records;
use crate::ucd::CodePointRange;
use crate::ucd::Error;

/// Extracts raw `Wide`/`Fullwidth` ranges from `EastAsianWidth.txt`.
///
/// The output may contain duplicates and overlaps; it is merged later.
pub fn east_asian_wide_ranges(text: &str) -> Result<Vec<CodePointRange>, Error> {
    let mut ranges = Vec::new();
    for record in records(text) {
        if !matches!(record.fields[0], "W" | "F") {
            continue;
        }
        ranges.push(CodePointRange::parse(record.token)?);
    }
    Ok(ranges)
}
