//! Provide a fixed-seed hasher and the hash map built on it.
//!
//! Based on *foldhash* and *hashbrown*. Hash results only depend on the
//! input, so containers built here behave the same from run to run.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

pub use foldhash;
pub use hashbrown;

// -----------------------------------------------------------------------------
// FixedHasher

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x3C6E_F372_FE94_F82B);

/// A fixed hasher provided hash results that only related on the input.
///
/// Which can be created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Fixed Hash State based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use vc_inspect::hash::FixedHashState;
///
/// let hash = |value: u32| {
///     let mut hasher = FixedHashState.build_hasher();
///     value.hash(&mut hasher);
///     hasher.finish()
/// };
///
/// assert_eq!(hash(3), hash(3));
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

// -----------------------------------------------------------------------------
// HashMap

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
///
/// # Examples
///
/// ```
/// use vc_inspect::hash::HashMap;
///
/// let mut map = HashMap::default();
/// map.insert("a", 1);
/// assert_eq!(map.get(&"a"), Some(&1));
/// ```
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;
