use cc::{CcParams, Coin, CoinBundle, LineageProof};

use crate::error::Result;

/// Minting authorization for one colored-coin type. `Ok(true)` admits the
/// coin as a genesis coin, `Ok(false)` rejects it, `Err` means the checker
/// itself failed and is propagated unchanged.
pub trait GenesisChecker {
    fn check(&self, params: &CcParams, coin: &Coin, proof: &[u8]) -> Result<bool>;
}

impl<F> GenesisChecker for F
where
    F: Fn(&CcParams, &Coin, &[u8]) -> Result<bool>,
{
    fn check(&self, params: &CcParams, coin: &Coin, proof: &[u8]) -> Result<bool> {
        self(params, coin, proof)
    }
}

// A bundle is valid if the coin's parent is proven to have been a colored
// coin of this type, or if the genesis checker admits the coin. The parent
// case needs no history walk: recomputing the parent's id from the claimed
// fields and the wrapped puzzle hash pins the parent's puzzle, and the
// parent's own spend was held to the same rule.
pub fn is_bundle_valid(
    params: &CcParams,
    checker: &(impl GenesisChecker + ?Sized),
    bundle: &CoinBundle,
) -> Result<bool> {
    match &bundle.proof {
        LineageProof::Parent {
            parent_parent_id,
            parent_inner_puzzle_hash,
            parent_amount,
        } => {
            let parent = Coin::new(
                *parent_parent_id,
                params.cc_puzzle_hash(*parent_inner_puzzle_hash),
                *parent_amount,
            );
            Ok(bundle.coin.parent_id == parent.id())
        }
        LineageProof::Genesis { proof } => checker.check(params, &bundle.coin, proof),
    }
}

#[cfg(test)]
mod test {
    use cc::tree::atom_hash;
    use cc::{CoinId, PuzzleHash};

    use super::*;
    use crate::error::Error;

    fn test_params() -> CcParams {
        CcParams::new(atom_hash(b"conservation mod"), atom_hash(b"genesis checker"))
    }

    fn reject_all(_: &CcParams, _: &Coin, _: &[u8]) -> Result<bool> {
        Ok(false)
    }

    #[test]
    fn test_parent_proof_accepted() {
        let mut rng = rand::thread_rng();
        let params = test_params();

        let inner = PuzzleHash::random(&mut rng);
        let parent = Coin::new(CoinId::random(&mut rng), params.cc_puzzle_hash(inner), 400);
        let child = Coin::new(parent.id(), params.cc_puzzle_hash(inner), 400);

        let bundle = CoinBundle::new(
            child,
            LineageProof::Parent {
                parent_parent_id: parent.parent_id,
                parent_inner_puzzle_hash: inner,
                parent_amount: parent.amount,
            },
        );

        // the checker must not even be consulted
        assert!(is_bundle_valid(&params, &reject_all, &bundle).unwrap());
    }

    #[test]
    fn test_parent_proof_tampering_detected() {
        let mut rng = rand::thread_rng();
        let params = test_params();

        let inner = PuzzleHash::random(&mut rng);
        let parent = Coin::new(CoinId::random(&mut rng), params.cc_puzzle_hash(inner), 400);
        let child = Coin::new(parent.id(), params.cc_puzzle_hash(inner), 400);

        let reference_proof = LineageProof::Parent {
            parent_parent_id: parent.parent_id,
            parent_inner_puzzle_hash: inner,
            parent_amount: parent.amount,
        };

        let mutation_tests = [
            LineageProof::Parent {
                parent_parent_id: CoinId::random(&mut rng),
                parent_inner_puzzle_hash: inner,
                parent_amount: parent.amount,
            },
            LineageProof::Parent {
                parent_parent_id: parent.parent_id,
                parent_inner_puzzle_hash: PuzzleHash::random(&mut rng),
                parent_amount: parent.amount,
            },
            LineageProof::Parent {
                parent_parent_id: parent.parent_id,
                parent_inner_puzzle_hash: inner,
                parent_amount: parent.amount + 1,
            },
        ];

        assert!(
            is_bundle_valid(&params, &reject_all, &CoinBundle::new(child, reference_proof))
                .unwrap()
        );
        for proof in mutation_tests {
            let bundle = CoinBundle::new(child, proof);
            assert!(!is_bundle_valid(&params, &reject_all, &bundle).unwrap());
        }
    }

    #[test]
    fn test_parent_proof_is_type_specific() {
        let mut rng = rand::thread_rng();
        let params = test_params();
        let other_params = CcParams::new(atom_hash(b"other mod"), atom_hash(b"genesis checker"));

        let inner = PuzzleHash::random(&mut rng);
        let parent = Coin::new(CoinId::random(&mut rng), params.cc_puzzle_hash(inner), 400);
        let child = Coin::new(parent.id(), params.cc_puzzle_hash(inner), 400);

        let bundle = CoinBundle::new(
            child,
            LineageProof::Parent {
                parent_parent_id: parent.parent_id,
                parent_inner_puzzle_hash: inner,
                parent_amount: parent.amount,
            },
        );

        assert!(is_bundle_valid(&params, &reject_all, &bundle).unwrap());
        assert!(!is_bundle_valid(&other_params, &reject_all, &bundle).unwrap());
    }

    #[test]
    fn test_genesis_proof_delegates_to_checker() {
        let mut rng = rand::thread_rng();
        let params = test_params();

        let coin = Coin::new(CoinId::random(&mut rng), PuzzleHash::random(&mut rng), 1);
        let bundle = CoinBundle::new(
            coin,
            LineageProof::Genesis {
                proof: b"opaque".to_vec(),
            },
        );

        let accept = |_: &CcParams, _: &Coin, proof: &[u8]| -> Result<bool> {
            Ok(proof == b"opaque")
        };
        assert!(is_bundle_valid(&params, &accept, &bundle).unwrap());
        assert!(!is_bundle_valid(&params, &reject_all, &bundle).unwrap());

        let failing = |_: &CcParams, _: &Coin, _: &[u8]| -> Result<bool> {
            Err(Error::GenesisChecker("checker offline".into()))
        };
        assert_eq!(
            is_bundle_valid(&params, &failing, &bundle),
            Err(Error::GenesisChecker("checker offline".into()))
        );
    }
}
