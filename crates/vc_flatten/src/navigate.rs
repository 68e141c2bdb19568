//! Resolution of an entry point inside a value graph.

use vc_inspect::ValueRef;
use vc_inspect::info::Kind;
use vc_inspect::ops::{InspectRef, Map};

use crate::error::NavigationError;

/// Follows `entry_point` from `root`, one token per step.
///
/// - structs: the token is a field name;
/// - maps: the token is parsed as the key kind, which must be a bool, an
///   integer, a float or a string;
/// - slices and arrays: the token is a base-10 index.
///
/// Every step strips the indirection of the reached value. An empty entry
/// point returns `root` unchanged.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_flatten::navigate::resolve;
/// use vc_inspect::ValueRef;
///
/// let mut scores = BTreeMap::new();
/// scores.insert(7_u32, vec![1_i64, 2, 3]);
///
/// let value = resolve(ValueRef::new(&scores), &["7", "1"]).unwrap();
/// assert_eq!(value.scalar().map(|s| s.to_string()), Some(String::from("2")));
///
/// assert!(resolve(ValueRef::new(&scores), &["8"]).is_err());
/// ```
pub fn resolve<'a, S: AsRef<str>>(
    root: ValueRef<'a>,
    entry_point: &[S],
) -> Result<ValueRef<'a>, NavigationError> {
    let mut current = root;

    for (depth, token) in entry_point.iter().enumerate() {
        let token = token.as_ref();
        current = step(current, token, depth)?;
        log::trace!("entry point token {depth} ({token:?}) reached a {}", current.kind());
    }

    Ok(current)
}

fn step<'a>(
    value: ValueRef<'a>,
    token: &str,
    depth: usize,
) -> Result<ValueRef<'a>, NavigationError> {
    match value.inspect_ref() {
        Some(InspectRef::Struct(s)) => s.field(token).map(ValueRef::new).ok_or_else(|| {
            NavigationError::FieldNotFound {
                token: token.to_owned(),
                depth,
            }
        }),
        Some(InspectRef::List(list)) => {
            let len = list.len();
            token
                .parse::<usize>()
                .ok()
                .and_then(|index| list.get(index))
                .map(ValueRef::new)
                .ok_or_else(|| NavigationError::InvalidIndex {
                    token: token.to_owned(),
                    depth,
                    len,
                })
        }
        Some(InspectRef::Map(map)) => find_entry(map, token, depth),
        _ => Err(NavigationError::UnsupportedNavigation {
            token: token.to_owned(),
            depth,
            kind: value.kind(),
        }),
    }
}

/// Kinds a token can be converted to.
fn is_key_kind(kind: Kind) -> bool {
    kind.is_scalar() && kind != Kind::Uintptr
}

fn find_entry<'a>(
    map: &'a dyn Map,
    token: &str,
    depth: usize,
) -> Result<ValueRef<'a>, NavigationError> {
    if let Some(key_kind) = map.key_kind()
        && !is_key_kind(key_kind)
    {
        return Err(NavigationError::UnsupportedKeyType {
            token: token.to_owned(),
            depth,
            key_kind,
        });
    }

    for (key, value) in map.iter_entries() {
        let key = ValueRef::new(key);
        let key_kind = key.kind();

        let Some(scalar) = key.scalar().filter(|_| is_key_kind(key_kind)) else {
            return Err(NavigationError::UnsupportedKeyType {
                token: token.to_owned(),
                depth,
                key_kind,
            });
        };

        match scalar.matches_token(token) {
            Some(true) => return Ok(ValueRef::new(value)),
            Some(false) => {}
            None => {
                return Err(NavigationError::InvalidKey {
                    token: token.to_owned(),
                    depth,
                    key_kind,
                });
            }
        }
    }

    Err(NavigationError::KeyNotFound {
        token: token.to_owned(),
        depth,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use vc_inspect::ValueRef;
    use vc_inspect::derive::Inspect;
    use vc_inspect::info::Kind;

    use super::resolve;
    use crate::error::NavigationError;

    #[derive(Inspect)]
    struct Foo {
        a: Vec<isize>,
        b: String,
        tags: BTreeMap<String, bool>,
        next: Option<Box<Foo>>,
    }

    fn foo() -> Foo {
        Foo {
            a: vec![1, 2, 3],
            b: "b".into(),
            tags: BTreeMap::from([("x y".to_owned(), true)]),
            next: Some(Box::new(Foo {
                a: vec![],
                b: "inner".into(),
                tags: BTreeMap::new(),
                next: None,
            })),
        }
    }

    fn scalar_string(value: ValueRef) -> Option<String> {
        value.scalar().map(|s| s.to_string())
    }

    #[test]
    fn empty_entry_point_keeps_root() {
        let foo = foo();
        let value = resolve::<&str>(ValueRef::new(&foo), &[]).unwrap();
        assert_eq!(value.kind(), Kind::Struct);
    }

    #[test]
    fn fields_and_indices() {
        let foo = foo();
        let value = resolve(ValueRef::new(&foo), &["a", "2"]).unwrap();
        assert_eq!(value.kind(), Kind::Int);
        assert_eq!(scalar_string(value).as_deref(), Some("3"));

        let value = resolve(ValueRef::new(&foo), &["next", "b"]).unwrap();
        assert_eq!(scalar_string(value).as_deref(), Some("inner"));
    }

    #[test]
    fn map_keys() {
        let foo = foo();
        let value = resolve(ValueRef::new(&foo), &["tags", "x y"]).unwrap();
        assert_eq!(scalar_string(value).as_deref(), Some("true"));

        let map = HashMap::from([(-3_i8, 'a'), (4, 'b')]);
        let value = resolve(ValueRef::new(&map), &["-3"]).unwrap();
        assert_eq!(value.kind(), Kind::Int32);

        let map = BTreeMap::from([(false, 0_u8), (true, 1_u8)]);
        let value = resolve(ValueRef::new(&map), &["true"]).unwrap();
        assert_eq!(scalar_string(value).as_deref(), Some("1"));
    }

    #[test]
    fn field_not_found() {
        let foo = foo();
        let err = resolve(ValueRef::new(&foo), &["missing"]).unwrap_err();
        assert!(matches!(err, NavigationError::FieldNotFound { depth: 0, .. }));
    }

    #[test]
    fn invalid_index() {
        let foo = foo();
        for token in ["3", "-1", "x"] {
            let err = resolve(ValueRef::new(&foo), &["a", token]).unwrap_err();
            assert!(matches!(
                err,
                NavigationError::InvalidIndex { depth: 1, len: 3, .. }
            ));
            assert_eq!(err.token(), token);
        }
    }

    #[test]
    fn map_key_errors() {
        let map = BTreeMap::from([(1_u32, "one")]);
        let err = resolve(ValueRef::new(&map), &["-1"]).unwrap_err();
        assert!(matches!(err, NavigationError::InvalidKey { key_kind: Kind::Uint32, .. }));

        let err = resolve(ValueRef::new(&map), &["2"]).unwrap_err();
        assert!(matches!(err, NavigationError::KeyNotFound { .. }));

        let map = BTreeMap::from([((1_u8, 2_u8), "pair")]);
        let err = resolve(ValueRef::new(&map), &["1"]).unwrap_err();
        assert!(matches!(
            err,
            NavigationError::UnsupportedKeyType { key_kind: Kind::Struct, .. }
        ));

        let empty: BTreeMap<(u8, u8), &str> = BTreeMap::new();
        let err = resolve(ValueRef::new(&empty), &["1"]).unwrap_err();
        assert!(matches!(
            err,
            NavigationError::UnsupportedKeyType { key_kind: Kind::Struct, depth: 0, .. }
        ));

        let empty: BTreeMap<Box<u16>, &str> = BTreeMap::new();
        let err = resolve(ValueRef::new(&empty), &["1"]).unwrap_err();
        assert!(matches!(err, NavigationError::KeyNotFound { .. }));
    }

    #[test]
    fn unsupported_navigation() {
        let foo = foo();
        let err = resolve(ValueRef::new(&foo), &["b", "0"]).unwrap_err();
        assert!(matches!(
            err,
            NavigationError::UnsupportedNavigation { kind: Kind::String, depth: 1, .. }
        ));

        let err = resolve(ValueRef::new(&foo), &["next", "next", "a"]).unwrap_err();
        assert!(matches!(
            err,
            NavigationError::UnsupportedNavigation { kind: Kind::Invalid, depth: 2, .. }
        ));
    }
}
