/// Deterministic word picker (xorshift32).
#[derive(Clone, Debug)]
pub struct WordPicker {
    state: u32,
}

impl WordPicker {
    /// Zero is a fixed point of xorshift, so the low bit is always forced on.
    pub fn new(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish choice from `words`; `None` only when `words` is empty.
    pub fn pick<'a>(&mut self, words: &'a [String]) -> Option<&'a str> {
        if words.is_empty() {
            return None;
        }
        let i = self.next_u32() as usize % words.len();
        Some(words[i].as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/words.rs"]
mod tests;
