use serde::{Deserialize, Serialize};

use crate::coin::PuzzleHash;
use crate::tree::{self, Tree};

/// Parameters fixing one colored-coin type. Every coin of the type shares
/// them; the inner puzzle hash is the only per-coin part of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcParams {
    pub mod_hash: [u8; 32],
    pub mod_hash_hash: [u8; 32],
    pub genesis_checker_hash: [u8; 32],
}

impl CcParams {
    // `mod_hash_hash` is derived here once and reused by every puzzle-hash
    // computation made with these params.
    pub fn new(mod_hash: [u8; 32], genesis_checker_hash: [u8; 32]) -> Self {
        Self {
            mod_hash,
            mod_hash_hash: tree::atom_hash(&mod_hash),
            genesis_checker_hash,
        }
    }

    // Puzzle hash of a colored coin wrapping `inner_puzzle_hash`: the
    // conservation logic curried with its own hash, the checker hash and the
    // inner puzzle hash. All four bound values are already hashes and are
    // escaped rather than rehashed.
    pub fn cc_puzzle_hash(&self, inner_puzzle_hash: PuzzleHash) -> PuzzleHash {
        let curried = tree::curry(
            Tree::atom(self.mod_hash),
            [
                Tree::atom(self.mod_hash_hash),
                Tree::atom(self.genesis_checker_hash),
                Tree::atom(inner_puzzle_hash.as_bytes()),
            ],
        );
        let literals = [
            self.mod_hash,
            self.mod_hash_hash,
            self.genesis_checker_hash,
            *inner_puzzle_hash.as_bytes(),
        ];

        PuzzleHash(curried.hash_with_escapes(&literals))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::{atom_hash, pair_hash};

    #[test]
    fn test_mod_hash_hash_derivation() {
        let params = CcParams::new([1u8; 32], [2u8; 32]);

        assert_eq!(params.mod_hash_hash, atom_hash(&[1u8; 32]));
    }

    #[test]
    fn test_cc_puzzle_hash_preimage() {
        let params = CcParams::new([1u8; 32], [2u8; 32]);
        let inner = PuzzleHash([3u8; 32]);

        // (a . (mod_hash . (mod_hash_hash genesis_checker_hash inner)))
        // with all four hash atoms escaped
        let expected = pair_hash(
            atom_hash(b"a"),
            pair_hash(
                params.mod_hash,
                pair_hash(
                    params.mod_hash_hash,
                    pair_hash(
                        params.genesis_checker_hash,
                        pair_hash(*inner.as_bytes(), atom_hash(b"")),
                    ),
                ),
            ),
        );

        assert_eq!(params.cc_puzzle_hash(inner), PuzzleHash(expected));
    }

    #[test]
    fn test_cc_puzzle_hash_permutations() {
        let mut rng = rand::thread_rng();

        let params = CcParams::new([1u8; 32], [2u8; 32]);
        let inner = PuzzleHash::random(&mut rng);
        let reference = params.cc_puzzle_hash(inner);

        // wrapping is never the identity
        assert_ne!(reference, inner);

        let mutation_tests = [
            CcParams::new([9u8; 32], [2u8; 32]),
            CcParams::new([1u8; 32], [9u8; 32]),
        ];
        for p in mutation_tests {
            assert_ne!(p.cc_puzzle_hash(inner), reference);
        }

        assert_ne!(params.cc_puzzle_hash(PuzzleHash::random(&mut rng)), reference);
    }
}
