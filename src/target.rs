use crate::error::{WfResult, WordForgeError};
use std::fmt;

/// The only genes that may appear in a genome.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[inline]
pub fn random_gene(rng: &mut fastrand::Rng) -> u8 {
    ALPHABET[rng.usize(..ALPHABET.len())]
}

#[inline]
pub fn is_valid_gene(gene: u8) -> bool {
    gene.is_ascii_uppercase()
}

/// The hidden word the population evolves toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    word: Vec<u8>,
}

impl Target {
    /// Accepts uppercase ASCII letters only. The empty word is allowed and
    /// is solved by every organism.
    pub fn parse(word: &str) -> WfResult<Self> {
        if !word.bytes().all(is_valid_gene) {
            return Err(WordForgeError::InvalidWord(word.to_string()));
        }
        Ok(Self {
            word: word.as_bytes().to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.word
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.word))
    }
}
