use crate::resolver;

/// Display ticker for a canonical ID: the known ticker, else the ID uppercased.
pub fn derive_symbol(id: &str) -> String {
    match resolver::ticker_for_id(id) {
        Some(ticker) => ticker.to_owned(),
        None => id.to_ascii_uppercase(),
    }
}

/// Display name for a canonical ID.
///
/// `-` and `_` become spaces and the first character of each word is
/// uppercased; the rest of the word keeps its case.
pub fn derive_name(id: &str) -> String {
    let mut name = String::with_capacity(id.len());
    let mut capitalize_next = true;

    for ch in id.chars() {
        if ch == '-' || ch == '_' {
            name.push(' ');
            capitalize_next = true;
        } else if capitalize_next {
            name.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            name.push(ch);
        }
    }

    name
}
