// src/generators/enhancer.rs
use crate::generators::random::RandomSource;

pub const SPECIAL_CHARS: &[u8] = b"!@#$%^&*";
pub const DIGIT_CHARS: &[u8] = b"0123456789";
const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Mutates a weak or moderate password into a longer, more varied one.
///
/// One pass inserts symbols and digits at random positions, forces a leading
/// uppercase letter and pads the result with base-36 characters. Characters
/// are only ever added or upper-cased, never removed.
#[derive(Debug, Clone)]
pub struct PasswordEnhancer {
    symbols_to_insert: usize,
    digits_to_insert: usize,
    min_length: usize,
}

impl Default for PasswordEnhancer {
    fn default() -> Self {
        Self {
            symbols_to_insert: 3,
            digits_to_insert: 3,
            min_length: 20,
        }
    }
}

impl PasswordEnhancer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The result always starts with an ASCII uppercase letter. A lowercase
    /// ASCII first character is upper-cased in place. Any other first
    /// character (digit, symbol, `é`, `ß`...) is kept and a random `A-Z`
    /// letter is prepended instead, so `éclair` becomes `Zéclair...` rather
    /// than `Éclair...`, which would not pass the `[A-Z]` uppercase rule.
    pub fn enhance(&self, password: &str, rng: &mut dyn RandomSource) -> String {
        let mut buffer: Vec<char> = password.chars().collect();

        insert_random(&mut buffer, SPECIAL_CHARS, self.symbols_to_insert, rng);
        insert_random(&mut buffer, DIGIT_CHARS, self.digits_to_insert, rng);

        // Leading uppercase letter
        if let Some(&first) = buffer.first() {
            if !first.is_ascii_uppercase() {
                let mut upper = first.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => buffer[0] = c,
                    _ => buffer.insert(0, rng.next_char(UPPERCASE_CHARS)),
                }
            }
        }

        while buffer.len() < self.min_length {
            buffer.push(rng.next_base36());
        }

        buffer.into_iter().collect()
    }
}

// Each insertion lands anywhere in the current buffer, including before earlier insertions.
fn insert_random(buffer: &mut Vec<char>, alphabet: &[u8], count: usize, rng: &mut dyn RandomSource) {
    for _ in 0..count {
        let c = rng.next_char(alphabet);
        let position = rng.next_index(buffer.len());
        buffer.insert(position, c);
    }
}
