//! Registry of named colors, stored red-first.

/// Name → (r, g, b). Names are lowercase; lookups lowercase their input.
const PALETTE: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("red", [255, 0, 0]),
    ("green", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("navy", [0, 0, 128]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("teal", [0, 128, 128]),
    ("lime", [50, 205, 50]),
    ("gold", [255, 215, 0]),
    ("violet", [238, 130, 238]),
    ("indigo", [75, 0, 130]),
];

/// Looks up a named color, ignoring case and surrounding whitespace.
pub fn lookup(name: &str) -> Option<[u8; 3]> {
    let key = name.trim().to_ascii_lowercase();
    PALETTE
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, rgb)| *rgb)
}

/// All registered names, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("red"), Some([255, 0, 0]));
        assert_eq!(lookup(" Red "), Some([255, 0, 0]));
        assert_eq!(lookup("not_a_color"), None);
    }

    #[test]
    fn test_names_are_unique_and_lowercase() {
        let all: Vec<&str> = names().collect();
        let mut sorted = all.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), all.len());
        assert!(all.iter().all(|n| *n == n.to_ascii_lowercase()));
    }
}
