//! Text and dimension rules shared by the synthesizer and the CLI.

/// Longest prompt drawn on a design, in characters.
pub const MAX_PROMPT_CHARS: usize = 20;

/// Marker appended to prompts that were cut short.
pub const ELLIPSIS: &str = "...";

/// Largest accepted canvas edge, in pixels.
pub const MAX_DIMENSION: u32 = 4096;

/// Default canvas edge, in pixels.
pub const DEFAULT_DIMENSION: u32 = 400;

/// Shorten a prompt to [`MAX_PROMPT_CHARS`] characters, adding [`ELLIPSIS`]
/// when anything was removed.
#[must_use]
pub fn truncate_prompt(prompt: &str) -> String {
    match prompt.char_indices().nth(MAX_PROMPT_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &prompt[..cut]),
        None => prompt.to_string(),
    }
}

/// Title-case a string: the first letter of every run of letters is
/// upper-cased and the rest lower-cased.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(ch);
            in_word = false;
        }
    }
    result
}

/// Caption drawn in the corner of every design, e.g. `"Mock Tote Bag"`.
#[must_use]
pub fn caption_for(product_type: &str) -> String {
    format!("Mock {}", title_case(&product_type.replace('_', " ")))
}

/// Clamp a requested canvas edge into `1..=MAX_DIMENSION`.
#[must_use]
pub fn clamp_dimension(value: u32) -> u32 {
    value.clamp(1, MAX_DIMENSION)
}
