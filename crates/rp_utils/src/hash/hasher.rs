use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// The seed every [`FixedHashState`] starts from.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x2D35_8DCC_AA6C_78A5);

/// A hasher whose results only depend on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a fixed seed, so maps behave the same across runs.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use rp_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("songs");
/// let b = FixedHashState.hash_one("songs");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}
