use crate::ucd::Error;

/// One semicolon-delimited data line of a UCD file, comments removed.
pub struct Record<'a> {
    pub token: &'a str,
    pub fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let mut parts = line.split(';').map(str::trim);
        let token = parts.next()?;
        let fields: Vec<&'a str> = parts.collect();
        if fields.is_empty() {
            return None;
        }
        Some(Self { token, fields })
    }
}

pub fn records(text: &str) -> impl Iterator<Item = Record<'_>> {
    text.lines().filter_map(Record::parse)
}

pub fn parse_code_point(token: &str) -> Result<u32, Error> {
    u32::from_str_radix(token, 16).map_err(|_| Error::CodePoint(token.to_string()))
}
