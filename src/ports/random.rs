//! Random source port used for style picks, delays and mock identifiers.

/// Supplies the random choices a mock response needs.
///
/// Production code uses an OS-seeded generator; tests substitute a scripted
/// source so renders and payloads can be pinned exactly.
pub trait RandomSource: Send {
    /// Pick an index uniformly from `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Draw a float uniformly from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw an integer uniformly from `[low, high]`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}

/// Choose one element of `items` uniformly, or `None` when it is empty.
pub fn choose<'a, T>(random: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random.pick_index(items.len()))
}
