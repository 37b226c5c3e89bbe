//! The seed sequence contract.
//!
//! A seed sequence hands out words to an engine that wants to initialize its
//! state. Engines are generic over any [`SeedSequence`], they never see the
//! concrete type.
pub mod entropy;

pub use entropy::EntropySeedSequence;

mod sealed_word {
    pub trait Sealed {
        fn from_word(word: u32) -> Self;
    }
}

/// Destination word accepted by [`SeedSequence::generate`].
///
/// Only unsigned integers at least 32 bits wide qualify, `usize` included on
/// 32 and 64-bit targets. Anything else is a compile error:
///
/// ```compile_fail
/// use seed_randomly::{EntropySeedSequence, SeedSequence};
///
/// let mut words = [0i32; 4];
/// EntropySeedSequence::new().generate(&mut words);
/// ```
///
/// ```compile_fail
/// use seed_randomly::{EntropySeedSequence, SeedSequence};
///
/// let mut words = [0u16; 4];
/// EntropySeedSequence::new().generate(&mut words);
/// ```
pub trait SeedWord: sealed_word::Sealed + Copy {}

macro_rules! seed_words {
    ($($t:ty),*) => {
        $(
            impl sealed_word::Sealed for $t {
                fn from_word(word: u32) -> Self {
                    <$t>::from(word)
                }
            }
            impl SeedWord for $t {}
        )*
    };
}

seed_words!(u32, u64, u128);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl sealed_word::Sealed for usize {
    fn from_word(word: u32) -> Self {
        word as usize
    }
}

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl SeedWord for usize {}

/// Element type a seed sequence can be built from. Every primitive integer,
/// signed or not, and references to them.
///
/// ```compile_fail
/// use seed_randomly::EntropySeedSequence;
///
/// let _ = EntropySeedSequence::from_list([0.5, 1.5]);
/// ```
///
/// ```compile_fail
/// use seed_randomly::EntropySeedSequence;
///
/// let _ = EntropySeedSequence::from_range(vec![0.5f64].iter());
/// ```
///
/// ```compile_fail
/// use seed_randomly::EntropySeedSequence;
///
/// let _: EntropySeedSequence = vec![0.5f64].into_iter().collect();
/// ```
pub trait SeedParam: sealed_param::Sealed {}

mod sealed_param {
    pub trait Sealed {}
}

macro_rules! seed_params {
    ($($t:ty),*) => {
        $(
            impl sealed_param::Sealed for $t {}
            impl SeedParam for $t {}
        )*
    };
}

seed_params!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<'a, T: SeedParam> sealed_param::Sealed for &'a T {}
impl<'a, T: SeedParam> SeedParam for &'a T {}

/// A source of seed words for a pseudo-random engine.
pub trait SeedSequence {
    /// Overwrite every element of `dest` with a seed word.
    fn generate<W: SeedWord>(&mut self, dest: &mut [W]);

    /// Number of stored parameters.
    fn size(&self) -> usize;

    /// Emit the stored parameters into `dest`, exactly `size()` of them.
    fn param<E: Extend<u32>>(&self, dest: &mut E);
}
