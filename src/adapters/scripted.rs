//! Scripted random source that serves pre-recorded choices in order.

use std::collections::VecDeque;

use crate::ports::RandomSource;

/// Replays queued choices, one queue per kind of draw.
///
/// Running out of queued values panics, so tests notice when the code under
/// test draws more than expected.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    uniforms: VecDeque<f64>,
    ints: VecDeque<u32>,
}

impl ScriptedRandom {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an index for the next [`RandomSource::pick_index`] call.
    #[must_use]
    pub fn pick(mut self, index: usize) -> Self {
        self.picks.push_back(index);
        self
    }

    /// Queue a value for the next [`RandomSource::uniform`] call.
    #[must_use]
    pub fn uniform_value(mut self, value: f64) -> Self {
        self.uniforms.push_back(value);
        self
    }

    /// Queue a value for the next [`RandomSource::int_inclusive`] call.
    #[must_use]
    pub fn int(mut self, value: u32) -> Self {
        self.ints.push_back(value);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let index = self.picks.pop_front().expect("Random script exhausted: no pick queued");
        assert!(index < len, "Scripted pick {index} out of range for {len} items");
        index
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let value =
            self.uniforms.pop_front().expect("Random script exhausted: no uniform queued");
        assert!((low..=high).contains(&value), "Scripted uniform {value} outside [{low}, {high}]");
        value
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = self.ints.pop_front().expect("Random script exhausted: no int queued");
        assert!((low..=high).contains(&value), "Scripted int {value} outside [{low}, {high}]");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order() {
        let mut random = ScriptedRandom::new().pick(1).pick(0).uniform_value(0.75).int(42);
        assert_eq!(random.pick_index(3), 1);
        assert_eq!(random.pick_index(3), 0);
        assert!((random.uniform(0.5, 2.0) - 0.75).abs() < f64::EPSILON);
        assert_eq!(random.int_inclusive(0, 100), 42);
    }

    #[test]
    #[should_panic(expected = "Random script exhausted")]
    fn exhausted_script_panics() {
        let mut random = ScriptedRandom::new().pick(0);
        let _ = random.pick_index(2);
        let _ = random.pick_index(2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_pick_panics() {
        let mut random = ScriptedRandom::new().pick(5);
        let _ = random.pick_index(2);
    }
}
