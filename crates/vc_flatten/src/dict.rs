//! The dictionary of a document and its breadth-first construction.
//!
//! Every value reached during a serialization gets an [`Entry`] with a
//! dense id. Entries are drained in FIFO order; draining a composite value
//! allocates one entry per child and enqueues it. The document therefore
//! lists its entries in id order.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use vc_inspect::hash::HashMap;
use vc_inspect::hash::hashbrown::hash_map::Entry as MapEntry;
use vc_inspect::info::Kind;
use vc_inspect::ops::Scalar;
use vc_inspect::{Identity, Structure, TypeName, ValueRef};

use crate::error::SerializeError;
use crate::options::{CyclePolicy, SerializeOptions};

/// Pending entries past which an unbounded duplicating traversal is
/// reported as a probable cycle.
const QUEUE_WARN_THRESHOLD: usize = 1 << 20;

// -----------------------------------------------------------------------------
// Entry

/// A value waiting in the dictionary queue.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub id: u64,
    pub depth: usize,
    pub value: ValueRef<'a>,
}

// -----------------------------------------------------------------------------
// Content

/// The ids of the children of a composite entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children<'a> {
    /// Slice and array elements.
    Elements(Vec<u64>),
    /// Map entries, as `(key id, value id)`.
    Entries(Vec<(u64, u64)>),
    /// Struct fields, as `(field name, value id)`.
    Fields(Vec<(&'a str, u64)>),
}

/// What an entry of the document contains.
///
/// Produced by [`Session::expand`], consumed by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<'a> {
    /// A nil indirection, or no value at all.
    Zero,
    /// A scalar within the depth bound.
    Scalar {
        kind: Kind,
        type_name: TypeName,
        scalar: Scalar<'a>,
    },
    /// A composite within the depth bound.
    Composite {
        kind: Kind,
        type_name: TypeName,
        len: Option<usize>,
        children: Children<'a>,
    },
    /// A channel, which is never decomposed.
    Channel { type_name: TypeName, len: usize },
    /// Any value beyond the depth bound.
    Truncated {
        kind: Kind,
        type_name: TypeName,
        len: Option<usize>,
    },
}

// -----------------------------------------------------------------------------
// Session

/// The state of one serialization.
///
/// A session borrows the value graph for its whole lifetime and owns
/// nothing from it. It is created when a serialization begins and dropped
/// when it returns, so ids are never shared between documents.
pub struct Session<'a> {
    options: SerializeOptions,
    queue: VecDeque<Entry<'a>>,
    next_id: u64,
    visited: Option<HashMap<Identity, u64>>,
    warned: bool,
}

impl<'a> Session<'a> {
    pub fn new(options: SerializeOptions) -> Self {
        let visited = match options.cycle_policy {
            CyclePolicy::Duplicate => None,
            CyclePolicy::Reuse => Some(HashMap::default()),
        };

        Self {
            options,
            queue: VecDeque::new(),
            next_id: 0,
            visited,
            warned: false,
        }
    }

    #[inline]
    pub const fn options(&self) -> &SerializeOptions {
        &self.options
    }

    /// Number of ids allocated so far.
    #[inline]
    pub const fn allocated(&self) -> u64 {
        self.next_id
    }

    /// Number of entries waiting to be drained.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Allocates an entry for `value` at `depth` and returns its id.
    ///
    /// Under [`CyclePolicy::Reuse`], a value whose target already has an
    /// entry returns the existing id and enqueues nothing. Values borrowed
    /// directly, such as the root, are identified by their own address, so
    /// a pointer reached later resolves to their entry.
    pub fn add_to_dict(&mut self, value: ValueRef<'a>, depth: usize) -> u64 {
        let id = self.next_id;

        if let Some(visited) = &mut self.visited
            && let Some(identity) = value
                .identity()
                .or_else(|| value.get().and_then(Identity::of))
        {
            match visited.entry(identity) {
                MapEntry::Occupied(entry) => return *entry.get(),
                MapEntry::Vacant(entry) => {
                    entry.insert(id);
                }
            }
        }

        self.next_id += 1;
        self.queue.push_back(Entry { id, depth, value });

        if !self.warned
            && self.visited.is_none()
            && self.options.max_depth.is_unlimited()
            && self.queue.len() > QUEUE_WARN_THRESHOLD
        {
            self.warned = true;
            log::warn!(
                "{} entries pending with an unlimited depth and duplicated references, \
                 the value graph is probably cyclic",
                self.queue.len(),
            );
        }

        id
    }

    /// Takes the oldest pending entry.
    #[inline]
    pub fn pop(&mut self) -> Option<Entry<'a>> {
        self.queue.pop_front()
    }

    /// Computes the content of `entry`, enqueueing its children if it is a
    /// composite within the depth bound.
    pub fn expand(&mut self, entry: &Entry<'a>) -> Result<Content<'a>, SerializeError> {
        let value = entry.value;
        let Some(type_name) = value.type_name() else {
            return Ok(Content::Zero);
        };
        let kind = value.kind();

        let unsupported = || SerializeError::UnsupportedKind {
            kind,
            type_path: type_name.path(),
        };

        match kind {
            Kind::Chan => {
                let len = value.len().ok_or_else(unsupported)?;
                return Ok(Content::Channel { type_name, len });
            }
            Kind::Bool
            | Kind::Int
            | Kind::Int8
            | Kind::Int16
            | Kind::Int32
            | Kind::Int64
            | Kind::Uint
            | Kind::Uint8
            | Kind::Uint16
            | Kind::Uint32
            | Kind::Uint64
            | Kind::Float32
            | Kind::Float64
            | Kind::String
            | Kind::Array
            | Kind::Map
            | Kind::Slice
            | Kind::Struct => {}
            _ => return Err(unsupported()),
        }

        let len = value.len();

        if !self.options.max_depth.allows_content(entry.depth) {
            return Ok(Content::Truncated {
                kind,
                type_name,
                len,
            });
        }

        if kind.is_scalar() {
            let scalar = value.scalar().ok_or_else(unsupported)?;
            return Ok(Content::Scalar {
                kind,
                type_name,
                scalar,
            });
        }

        let depth = entry.depth + 1;
        let children = match value.structure() {
            Structure::Elements(elements) => Children::Elements(
                elements
                    .into_iter()
                    .map(|element| self.add_to_dict(element, depth))
                    .collect(),
            ),
            Structure::Entries(entries) => Children::Entries(
                entries
                    .into_iter()
                    .map(|(key, value)| {
                        let key = self.add_to_dict(key, depth);
                        (key, self.add_to_dict(value, depth))
                    })
                    .collect(),
            ),
            Structure::Fields(fields) => Children::Fields(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, self.add_to_dict(value, depth)))
                    .collect(),
            ),
            Structure::None => return Err(unsupported()),
        };

        Ok(Content::Composite {
            kind,
            type_name,
            len,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use vc_inspect::derive::Inspect;
    use vc_inspect::info::Kind;
    use vc_inspect::ValueRef;

    use super::{Children, Content, Session};
    use crate::SerializeError;
    use crate::options::{CyclePolicy, Depth, SerializeOptions};

    #[derive(Inspect)]
    struct Pair {
        left: Rc<u32>,
        right: Rc<u32>,
    }

    fn drain<'a>(session: &mut Session<'a>) -> Vec<(u64, usize, Content<'a>)> {
        let mut out = Vec::new();
        while let Some(entry) = session.pop() {
            let content = session.expand(&entry).unwrap();
            out.push((entry.id, entry.depth, content));
        }
        out
    }

    #[test]
    fn ids_follow_bfs_order() {
        let value = vec![vec![1_u8], vec![2, 3]];
        let mut session = Session::new(SerializeOptions::default());
        assert_eq!(session.add_to_dict(ValueRef::new(&value), 0), 0);

        let entries = drain(&mut session);
        let ids: Vec<u64> = entries.iter().map(|(id, _, _)| *id).collect();
        let depths: Vec<usize> = entries.iter().map(|(_, depth, _)| *depth).collect();

        assert_eq!(ids, [0, 1, 2, 3, 4, 5]);
        assert_eq!(depths, [0, 1, 1, 2, 2, 2]);
        assert!(matches!(
            &entries[0].2,
            Content::Composite { children: Children::Elements(ids), len: Some(2), .. } if ids == &[1, 2]
        ));
        assert!(matches!(
            &entries[2].2,
            Content::Composite { children: Children::Elements(ids), .. } if ids == &[4, 5]
        ));
    }

    #[test]
    fn depth_bound_truncates() {
        let value = vec![1_i32, 2];
        let options = SerializeOptions::new(Depth::Bounded(0), CyclePolicy::Duplicate);
        let mut session = Session::new(options);
        session.add_to_dict(ValueRef::new(&value), 0);

        let entries = drain(&mut session);
        assert_eq!(entries.len(), 1);
        assert!(matches!(
            entries[0].2,
            Content::Truncated { kind: Kind::Slice, len: Some(2), .. }
        ));
    }

    #[test]
    fn duplicate_policy_repeats_shared_targets() {
        let shared = Rc::new(5_u32);
        let pair = Pair {
            left: shared.clone(),
            right: shared,
        };

        let mut session = Session::new(SerializeOptions::default());
        session.add_to_dict(ValueRef::new(&pair), 0);
        assert_eq!(drain(&mut session).len(), 3);
    }

    #[test]
    fn reuse_policy_shares_ids() {
        let shared = Rc::new(5_u32);
        let pair = Pair {
            left: shared.clone(),
            right: shared,
        };

        let options = SerializeOptions::new(Depth::Unlimited, CyclePolicy::Reuse);
        let mut session = Session::new(options);
        session.add_to_dict(ValueRef::new(&pair), 0);

        let entries = drain(&mut session);
        assert_eq!(entries.len(), 2);
        assert!(matches!(
            &entries[0].2,
            Content::Composite { children: Children::Fields(fields), .. }
                if fields == &[("left", 1), ("right", 1)]
        ));
    }

    #[test]
    fn zero_values() {
        let value: Option<Box<u8>> = None;
        let mut session = Session::new(SerializeOptions::default());
        session.add_to_dict(ValueRef::new(&value), 0);
        assert_eq!(drain(&mut session)[0].2, Content::Zero);
    }

    #[test]
    fn unsupported_kinds() {
        fn answer() -> i32 {
            42
        }
        let value: fn() -> i32 = answer;

        let mut session = Session::new(SerializeOptions::default());
        session.add_to_dict(ValueRef::new(&value), 0);
        let entry = session.pop().unwrap();
        assert!(matches!(
            session.expand(&entry),
            Err(SerializeError::UnsupportedKind { kind: Kind::Func, .. })
        ));
    }
}
