//! Seeding through the public API. Every "differs" assertion here is
//! probabilistic: equal states are possible, just astronomically unlikely.
use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};

use seed_randomly::{
    seed_randomly, try_seed_randomly, EntropySeedSequence, SeedEngine, SeedSequence,
};

const MT32_STATE_WORDS: usize = 624;
const MT64_STATE_WORDS: usize = 312;

/// Stands in for a 32-bit Mersenne Twister: it pulls its whole state out of
/// the sequence in one `generate` call.
#[derive(Debug, Clone, PartialEq)]
struct Mt32State {
    words: Vec<u32>,
}

impl Default for Mt32State {
    fn default() -> Self {
        Self {
            words: vec![0; MT32_STATE_WORDS],
        }
    }
}

impl SeedEngine for Mt32State {
    fn seed_words(&self) -> usize {
        self.words.len()
    }

    fn seed<Q: SeedSequence>(&mut self, seq: &mut Q) {
        seq.generate(&mut self.words);
    }
}

/// Same thing with 64-bit state words.
#[derive(Debug, Clone, PartialEq)]
struct Mt64State {
    words: Vec<u64>,
}

impl Default for Mt64State {
    fn default() -> Self {
        Self {
            words: vec![0; MT64_STATE_WORDS],
        }
    }
}

impl SeedEngine for Mt64State {
    fn seed_words(&self) -> usize {
        self.words.len()
    }

    fn seed<Q: SeedSequence>(&mut self, seq: &mut Q) {
        seq.generate(&mut self.words);
    }
}

fn outputs<R: RngCore + Clone>(engine: &R) -> Vec<u64> {
    let mut probe = engine.clone();
    (0..8).map(|_| probe.next_u64()).collect()
}

#[test]
fn mt32_seeded_twice_gets_two_fresh_states() {
    let default = Mt32State::default();
    let mut engine = Mt32State::default();

    seed_randomly(&mut engine);
    let first = engine.clone();
    seed_randomly(&mut engine);
    let second = engine.clone();

    assert_eq!(first.words.len(), MT32_STATE_WORDS);
    assert_ne!(first, default);
    assert_ne!(second, default);
    assert_ne!(first, second);
}

#[test]
fn mt64_seeded_twice_gets_two_fresh_states() {
    let default = Mt64State::default();
    let mut engine = Mt64State::default();

    seed_randomly(&mut engine);
    let first = engine.clone();
    seed_randomly(&mut engine);
    let second = engine.clone();

    assert_ne!(first, default);
    assert_ne!(second, default);
    assert_ne!(first, second);
    // One 32-bit draw per word, whatever the word width.
    assert!(second.words.iter().all(|w| *w <= u64::from(u32::MAX)));
}

#[test]
fn std_rng_leaves_its_fixed_seed() {
    let default = StdRng::seed_from_u64(5489);
    let mut engine = StdRng::seed_from_u64(5489);

    seed_randomly(&mut engine);
    let first = outputs(&engine);
    seed_randomly(&mut engine);
    let second = outputs(&engine);

    assert_ne!(first, outputs(&default));
    assert_ne!(second, outputs(&default));
    assert_ne!(first, second);
}

#[test]
fn small_rng_leaves_its_fixed_seed() {
    let default = SmallRng::seed_from_u64(5489);
    let mut engine = SmallRng::seed_from_u64(5489);

    seed_randomly(&mut engine);
    let first = outputs(&engine);
    seed_randomly(&mut engine);
    let second = outputs(&engine);

    assert_ne!(first, outputs(&default));
    assert_ne!(first, second);
}

#[test]
fn try_seed_randomly_on_working_source() {
    let mut engine = Mt32State::default();
    try_seed_randomly(&mut engine).unwrap();
    assert_ne!(engine, Mt32State::default());
}

#[test]
fn one_sequence_can_seed_several_engines() {
    let mut seq = EntropySeedSequence::new();
    let mut a = Mt32State::default();
    let mut b = Mt32State::default();

    a.seed(&mut seq);
    b.seed(&mut seq);

    assert_ne!(a, b);
}

#[test]
fn size_is_one_for_every_constructor() {
    let primes = [2, 3, 5];
    assert_eq!(EntropySeedSequence::new().size(), 1);
    assert_eq!(EntropySeedSequence::from_range(primes.iter()).size(), 1);
    assert_eq!(EntropySeedSequence::from_list([2, 3, 5]).size(), 1);
}

#[test]
fn list_of_signed_literals_emits_one_zero() {
    let seq = EntropySeedSequence::from_list([-1, 0, 1]);
    assert_eq!(seq.size(), 1);

    let mut params = Vec::new();
    seq.param(&mut params);
    assert_eq!(params, vec![0]);
}

#[test]
fn range_constructor_discards_values() {
    let seq: EntropySeedSequence = (1u8..=200).collect();
    let mut params = Vec::new();
    seq.param(&mut params);
    assert_eq!(params, vec![0]);
}

#[test]
fn large_generates_do_not_repeat() {
    let mut seq = EntropySeedSequence::new();
    let mut first = vec![0u32; 4096];
    let mut second = vec![0u32; 4096];
    seq.generate(&mut first);
    seq.generate(&mut second);
    assert_ne!(first, second);

    let mut other = EntropySeedSequence::new();
    let mut third = vec![0u32; 4096];
    other.generate(&mut third);
    assert_ne!(first, third);
}
