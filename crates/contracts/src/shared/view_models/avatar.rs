/// Avatar background colours.
pub const AVATAR_PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#17becf",
];

/// Up to two uppercase initials: first letters of the first and last word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Palette colour picked by the first character code of `name`.
pub fn avatar_color(name: &str) -> &'static str {
    let code = name.trim().chars().next().map(|c| c as usize).unwrap_or(0);
    AVATAR_PALETTE[code % AVATAR_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("jane van der doe"), "JD");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("   "), "");
        assert_eq!(initials("élise martin"), "ÉM");
    }

    #[test]
    fn test_avatar_color_is_stable() {
        assert_eq!(avatar_color("Jane Doe"), avatar_color("Jane Doe"));
        // 'J' = 74, 74 % 8 = 2
        assert_eq!(avatar_color("Jane Doe"), AVATAR_PALETTE[2]);
        assert_eq!(avatar_color(""), AVATAR_PALETTE[0]);
    }
}
