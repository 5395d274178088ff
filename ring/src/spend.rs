use cc::{announce, CcParams, Condition, RingBundles, Tree};

use crate::error::{Error, Result, Role};
use crate::lineage::{is_bundle_valid, GenesisChecker};

// A ring spend proves value conservation without any coin seeing the whole
// ring. Coin k is spent together with its two neighbors' bundles and inherits
// a running subtotal S_k of the debts accumulated so far, a coin's debt being
// the value it creates minus the value it consumes. The spend recomputes
// S_{k+1} = S_k + debt_k, announces a commitment to (coin_{k-1}, S_{k-1}) and
// asserts the matching commitment to (coin_k, S_k) that only coin k+1 can
// announce. Around a full cycle the asserts force the subtotals to agree link
// by link, so the debts telescope to S_{n+1} = S_1: the ring's total debt is
// zero and created value equals consumed value. All of it rests on
// announcements being unforgeable, which is why inner puzzles are barred from
// creating any, and on every created coin being rewrapped so the next
// generation is held to the same rule.

/// Spending-authorization logic supplied by the coin owner. Runs under the
/// conservation wrapper; its conditions are morphed before they reach the
/// environment.
pub trait InnerPuzzle {
    fn run(&self, solution: &Tree) -> Result<Vec<Condition>>;
}

impl<F> InnerPuzzle for F
where
    F: Fn(&Tree) -> Result<Vec<Condition>>,
{
    fn run(&self, solution: &Tree) -> Result<Vec<Condition>> {
        self(solution)
    }
}

/// One coin's fully assembled ring spend: the condition list handed to the
/// environment and the subtotal the next coin's solution must inherit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingSpend {
    pub conditions: Vec<Condition>,
    pub subtotal: i128,
}

impl RingSpend {
    pub fn generate(
        params: &CcParams,
        checker: &(impl GenesisChecker + ?Sized),
        inner_puzzle: &(impl InnerPuzzle + ?Sized),
        solution: &Tree,
        bundles: &RingBundles,
        prev_subtotal: i128,
    ) -> Result<Self> {
        let inner_conditions = inner_puzzle.run(solution)?;
        Self::from_conditions(params, checker, inner_conditions, bundles, prev_subtotal)
    }

    pub fn from_conditions(
        params: &CcParams,
        checker: &(impl GenesisChecker + ?Sized),
        inner_conditions: Vec<Condition>,
        bundles: &RingBundles,
        prev_subtotal: i128,
    ) -> Result<Self> {
        for (role, bundle) in [
            (Role::Prev, &bundles.prev),
            (Role::This, &bundles.this),
            (Role::Next, &bundles.next),
        ] {
            if !is_bundle_valid(params, checker, bundle)? {
                return Err(Error::InvalidLineageProof(role));
            }
        }

        let subtotal = prev_subtotal + bundles.this.coin.amount as i128
            - output_total(&inner_conditions) as i128;

        let mut conditions = vec![
            Condition::AssertMyCoinId {
                id: bundles.this.coin.id(),
            },
            Condition::CreateAnnouncement {
                message: announce::subtotal_commitment(&bundles.prev.coin, prev_subtotal).to_vec(),
            },
            Condition::AssertAnnouncement {
                id: announce::next_announcement_id(&bundles.this.coin, subtotal, &bundles.next.coin),
            },
        ];
        for condition in inner_conditions {
            conditions.push(morph_condition(params, condition)?);
        }

        Ok(Self {
            conditions,
            subtotal,
        })
    }
}

// Total value the inner conditions order the environment to create.
pub fn output_total(conditions: &[Condition]) -> u128 {
    conditions.iter().map(|c| c.created_amount() as u128).sum()
}

// Created coins are rewrapped so they stay colored; announcements are
// reserved for the conservation logic itself.
fn morph_condition(params: &CcParams, condition: Condition) -> Result<Condition> {
    match condition {
        Condition::CreateCoin {
            puzzle_hash,
            amount,
        } => Ok(Condition::CreateCoin {
            puzzle_hash: params.cc_puzzle_hash(puzzle_hash),
            amount,
        }),
        Condition::CreateAnnouncement { .. } => Err(Error::ForbiddenAnnouncement),
        other => Ok(other),
    }
}
