use std::fmt::Display;
use std::fmt::Formatter;

use crate::ucd::collapse_scalars;
use crate::ucd::east_asian_wide_ranges;
use crate::ucd::emoji_vs16_bases;
use crate::ucd::merge_ranges;
use crate::ucd::CodePointRange;
use crate::ucd::Error;

pub const GENERATED_FILE_MARKER: &str =
    "// This file is generated from Unicode data files. Do not edit by hand.";

/// The two generated range tables. `Display` renders the output artifact.
pub struct WidthTables {
    pub east_asian_wide: Vec<CodePointRange>,
    pub emoji_vs16_base: Vec<CodePointRange>,
}

impl WidthTables {
    pub fn new(east_asian_width: &str, emoji_variation_sequences: &str) -> Result<Self, Error> {
        Ok(Self {
            east_asian_wide: merge_ranges(east_asian_wide_ranges(east_asian_width)?),
            emoji_vs16_base: collapse_scalars(&emoji_vs16_bases(emoji_variation_sequences)?),
        })
    }
}

impl Display for WidthTables {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "{}", GENERATED_FILE_MARKER)?;
        writeln!(f)?;
        write_table(f, "EAST_ASIAN_WIDE", &self.east_asian_wide)?;
        writeln!(f)?;
        write_table(f, "EMOJI_VS16_BASE", &self.emoji_vs16_base)?;
        Ok(())
    }
}

fn write_table(f: &mut Formatter, name: &str, ranges: &[CodePointRange]) -> std::fmt::Result {
    writeln!(f, "pub const {}: &[(u32, u32)] = &[", name)?;
    for range in ranges {
        writeln!(f, "    (0x{:04X}, 0x{:04X}),", range.lo, range.hi)?;
    }
    writeln!(f, "];")?;
    Ok(())
}
