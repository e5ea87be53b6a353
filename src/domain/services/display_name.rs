//! Display formatting for gcsim keys

/// Turn a camel-case key into spaced words: `PrimordialJadeWingedSpear`
/// becomes `Primordial Jade Winged Spear`.
///
/// A space goes before every uppercase letter except the first character.
pub fn spaced_name(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 8);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced
}
