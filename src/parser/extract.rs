//! Name and parameter extraction from a definition line.

/// Name and raw parameter text pulled out of a single line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params: String,
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Extract the identifier before the first `(` and the text up to the next `)`.
///
/// Nothing is validated: `(*cb)(int)` yields an empty name and `*cb` as
/// params, nested parentheses truncate at the first `)`.
pub fn extract(line: &str) -> Signature {
    let Some(open) = line.find('(') else {
        return Signature::default();
    };

    let bytes = line.as_bytes();
    let start = bytes[..open]
        .iter()
        .rposition(|&b| !is_ident_byte(b))
        .map_or(0, |i| i + 1);
    let name = line[start..open].to_string();

    let params = line[open + 1..]
        .find(')')
        .map(|close| line[open + 1..open + 1 + close].trim().to_string())
        .unwrap_or_default();

    Signature { name, params }
}
