use crate::error::SeedError;
use crate::sequence::{SeedParam, SeedSequence, SeedWord};
use rand::rngs::OsRng;
use rand::RngCore;
use std::iter::FromIterator;

/// Seed sequence that ignores how it was built and fills every request with
/// fresh words from an entropy source, the operating system's by default.
///
/// Two calls to `generate` never replay each other, even on the same instance.
/// Don't use it when a reproducible seed is needed.
///
/// The type is neither `Clone` nor `Copy`: a copy would suggest it reproduces
/// the output of the original, which it doesn't.
///
/// ```compile_fail
/// use seed_randomly::EntropySeedSequence;
///
/// let seq = EntropySeedSequence::new();
/// let _copy = seq.clone();
/// ```
#[derive(Debug)]
pub struct EntropySeedSequence<R = OsRng> {
    /// Always zero. Only there so that `size` and `param` have something to report.
    seeds: [u32; 1],
    source: R,
}

impl EntropySeedSequence {
    pub fn new() -> Self {
        Self::with_source(OsRng)
    }

    /// Build from a range of integers. The values are not kept.
    pub fn from_range<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: SeedParam,
    {
        drop(values);
        Self::new()
    }

    /// Build from a literal list of integers. The values are not kept.
    pub fn from_list<T: SeedParam, const N: usize>(values: [T; N]) -> Self {
        drop(values);
        Self::new()
    }
}

impl Default for EntropySeedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeedParam> FromIterator<T> for EntropySeedSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_range(iter)
    }
}

impl<R: RngCore> EntropySeedSequence<R> {
    /// Draw the seed words from `source` instead of the operating system.
    pub fn with_source(source: R) -> Self {
        Self {
            seeds: [0; 1],
            source,
        }
    }

    /// Same as `generate`, but a failing entropy source is reported instead of
    /// panicking. `dest` can be partially overwritten when this returns an error.
    pub fn try_generate<W: SeedWord>(&mut self, dest: &mut [W]) -> Result<(), SeedError> {
        trace!("Drawing {} seed words (fallible)", dest.len());
        for word in dest.iter_mut() {
            let mut bytes = [0u8; 4];
            self.source.try_fill_bytes(&mut bytes)?;
            *word = W::from_word(u32::from_le_bytes(bytes));
        }
        Ok(())
    }
}

impl<R: RngCore> SeedSequence for EntropySeedSequence<R> {
    /// One fresh draw per element, no buffering.
    fn generate<W: SeedWord>(&mut self, dest: &mut [W]) {
        trace!("Drawing {} seed words", dest.len());
        for word in dest.iter_mut() {
            *word = W::from_word(self.source.next_u32());
        }
    }

    fn size(&self) -> usize {
        self.seeds.len()
    }

    fn param<E: Extend<u32>>(&self, dest: &mut E) {
        dest.extend(self.seeds.iter().copied());
    }
}
