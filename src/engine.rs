//! Engines that can be seeded from a [`SeedSequence`], and the helpers that
//! seed them from the operating system's entropy.
use crate::error::SeedError;
use crate::sequence::{EntropySeedSequence, SeedSequence, SeedWord};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};

const WORD_BYTES: usize = 4;

/// A pseudo-random engine exposing `seed(sequence)`.
pub trait SeedEngine {
    /// Number of 32-bit words a call to `seed` asks the sequence for.
    fn seed_words(&self) -> usize;

    /// Reinitialize the engine state from words pulled out of `seq`.
    fn seed<Q: SeedSequence>(&mut self, seq: &mut Q);
}

/// Every `rand` engine gets its seed bytes filled with little-endian words from
/// the sequence. The last word is truncated when the seed length is not a
/// multiple of four.
impl<R: SeedableRng> SeedEngine for R {
    fn seed_words(&self) -> usize {
        let mut seed = R::Seed::default();
        seed.as_mut().len().div_ceil(WORD_BYTES)
    }

    fn seed<Q: SeedSequence>(&mut self, seq: &mut Q) {
        let mut seed = R::Seed::default();
        let bytes = seed.as_mut();
        let mut words = vec![0u32; bytes.len().div_ceil(WORD_BYTES)];
        seq.generate(&mut words);

        for (chunk, word) in bytes.chunks_mut(WORD_BYTES).zip(&words) {
            let le = word.to_le_bytes();
            chunk.copy_from_slice(&le[..chunk.len()]);
        }

        *self = R::from_seed(seed);
    }
}

/// Seed `engine` with fresh words from the operating system's entropy source.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::{RngCore, SeedableRng};
/// use seed_randomly::seed_randomly;
///
/// let mut rng = StdRng::seed_from_u64(5489);
/// seed_randomly(&mut rng);
/// let _ = rng.next_u32();
/// ```
pub fn seed_randomly<E: SeedEngine>(engine: &mut E) {
    seed_randomly_with(engine, OsRng);
}

/// Same as [`seed_randomly`], drawing from `source` instead.
pub fn seed_randomly_with<E: SeedEngine, R: RngCore>(engine: &mut E, source: R) {
    debug!("Seeding engine with {} entropy words", engine.seed_words());
    let mut seq = EntropySeedSequence::with_source(source);
    engine.seed(&mut seq);
}

/// Same as [`seed_randomly`], but reports a failing entropy source. The engine
/// is only touched once all of its words have been drawn.
pub fn try_seed_randomly<E: SeedEngine>(engine: &mut E) -> Result<(), SeedError> {
    try_seed_randomly_with(engine, OsRng)
}

/// Same as [`try_seed_randomly`], drawing from `source` instead.
pub fn try_seed_randomly_with<E: SeedEngine, R: RngCore>(
    engine: &mut E,
    source: R,
) -> Result<(), SeedError> {
    let mut seq = EntropySeedSequence::with_source(source);
    let mut words = vec![0u32; engine.seed_words()];
    seq.try_generate(&mut words)?;

    debug!("Seeding engine with {} prefetched entropy words", words.len());
    engine.seed(&mut Prefetched {
        words: words.into_iter(),
        live: &mut seq,
    });
    Ok(())
}

/// Replays words drawn ahead of time. An engine asking for more than it
/// announced in `seed_words` gets the rest straight from the live sequence.
struct Prefetched<'a, R> {
    words: std::vec::IntoIter<u32>,
    live: &'a mut EntropySeedSequence<R>,
}

impl<'a, R: RngCore> SeedSequence for Prefetched<'a, R> {
    fn generate<W: SeedWord>(&mut self, dest: &mut [W]) {
        for word in dest.iter_mut() {
            match self.words.next() {
                Some(w) => *word = W::from_word(w),
                None => self.live.generate(std::slice::from_mut(word)),
            }
        }
    }

    fn size(&self) -> usize {
        self.live.size()
    }

    fn param<E: Extend<u32>>(&self, dest: &mut E) {
        self.live.param(dest)
    }
}
