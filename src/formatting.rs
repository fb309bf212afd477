use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const HEX_CHUNK_LEN: usize = 60;

static LONG_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)0x[a-f0-9]{60,}").expect("hex pattern is valid"));

/// Breaks `0x`-prefixed hex runs of 60+ digits into newline separated
/// chunks of 60 characters so addresses and calldata don't overflow.
pub fn format_long_hex_strings(content: &str) -> String {
    LONG_HEX
        .replace_all(content, |caps: &Captures| chunk(&caps[0]))
        .into_owned()
}

// Hex runs are ASCII, so byte offsets are char boundaries.
fn chunk(run: &str) -> String {
    run.as_bytes()
        .chunks(HEX_CHUNK_LEN)
        .filter_map(|c| std::str::from_utf8(c).ok())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
