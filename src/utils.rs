pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shortens an address or hash for display, keeping both ends.
pub fn short_hex(value: &str) -> String {
    if value.len() <= 14 || !value.is_ascii() {
        return value.to_string();
    }
    format!("{}…{}", &value[..8], &value[value.len() - 6..])
}
