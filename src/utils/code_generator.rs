//! Short code generation and validation utilities.
//!
//! Codes are drawn uniformly from a 62-symbol alphabet (`a-z`, `A-Z`, `0-9`).
//! The randomness only needs to be statistically uniform, not unpredictable,
//! so the thread-local generator from `rand` is used.

use rand::Rng;

/// Symbols a generated code is drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of symbols in a generated code.
pub const CODE_LENGTH: usize = 8;

/// Source of candidate short codes.
///
/// Implementations are pure generators and never touch storage; uniqueness is
/// enforced by the store, which rejects a candidate that is already taken.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces the next candidate code.
    fn generate(&self) -> String;

    /// Returns false if `code` can never have come from this generator.
    ///
    /// Lets lookups reject impossible codes without a store round trip. The
    /// default accepts everything and leaves the answer to the store.
    fn is_well_formed(&self, _code: &str) -> bool {
        true
    }
}

/// Uniform random generator over a fixed alphabet.
///
/// The default instance produces 8-symbol codes over [`ALPHABET`]. A smaller
/// alphabet or length shrinks the code space, which is useful for exercising
/// collision handling.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    alphabet: Vec<u8>,
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates the production generator (8 symbols, 62-symbol alphabet).
    pub fn new() -> Self {
        Self::with_alphabet(ALPHABET, CODE_LENGTH)
    }

    /// Creates a generator with a custom alphabet and code length.
    ///
    /// # Panics
    ///
    /// Panics if `alphabet` is empty or not ASCII.
    pub fn with_alphabet(alphabet: &[u8], length: usize) -> Self {
        assert!(!alphabet.is_empty(), "alphabet must not be empty");
        assert!(alphabet.is_ascii(), "alphabet must be ASCII");

        Self {
            alphabet: alphabet.to_vec(),
            length,
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())] as char)
            .collect()
    }

    /// Exactly `length` symbols, each from the alphabet. Case-sensitive.
    fn is_well_formed(&self, code: &str) -> bool {
        code.len() == self.length && code.bytes().all(|b| self.alphabet.contains(&b))
    }
}
