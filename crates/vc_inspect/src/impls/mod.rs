//! [`TypePath`] and [`Inspect`] for standard types, plus the utilities used
//! to implement them.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//!
//! ## Implemented Menu
//!
//! - primitives:
//!     - `bool`, `char`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//!     - `()`, `(P0,)`, `(P0, P1, ...)`. the num of P <= 6
//!     - `[T; N]`, `[T]`, `str`
//!     - `fn(P0, ...) -> R`. the num of P <= 4
//!     - `*const T`, `*mut T`
//! - core:
//!     - `Option<T>`, `OnceCell<T>`, `NonNull<T>`
//! - alloc:
//!     - `String`, `Cow<'static, str>`
//!     - `Vec<T>`, `VecDeque<T>`, `BTreeMap<K, V>`
//!     - `&'static T`, `Box<T>`, `Box<dyn Inspect>`, `Rc<T>`, `Arc<T>`
//! - std:
//!     - `HashMap<K, V, S>`, `OnceLock<T>`
//! - hashbrown:
//!     - `hashbrown::HashMap<K, V, S>`
//! - async-channel: ("channel" feature)
//!     - `Sender<T>`, `Receiver<T>`
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Inspect`]: crate::Inspect

use alloc::string::String;

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod func;
mod list;
mod map;
mod option;
mod pointer;
mod primitive;
mod raw_ptr;
mod string;
mod tuple;

#[cfg(feature = "channel")]
mod channel;

// -----------------------------------------------------------------------------
// Exports

pub use cell::GenericTypePathCell;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_inspect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
///
/// Inline is prohibited here to reduce compilation time.
#[inline(never)]
pub fn concat(arr: &[&str]) -> String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
