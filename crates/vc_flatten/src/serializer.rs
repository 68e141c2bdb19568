use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, BufWriter, Write};

use vc_inspect::{Inspect, ValueRef};

use crate::dict::Session;
use crate::encode;
use crate::error::SerializeError;
use crate::navigate;
use crate::options::{CyclePolicy, Depth, SerializeOptions};

// -----------------------------------------------------------------------------
// Serializer

/// Flattens a value graph into a JSON dictionary of entries.
///
/// The serializer is configured once, then every call to
/// [`serialize`](Self::serialize) writes an independent document. A call
/// borrows the graph immutably and never modifies the configuration.
///
/// # Examples
///
/// ```
/// use vc_flatten::Serializer;
///
/// let values = vec![1_isize, 2, 3];
///
/// let mut serializer = Serializer::new();
/// serializer.set_root(&values).set_max_depth(1);
///
/// assert_eq!(
///     serializer.to_string().unwrap(),
///     concat!(
///         r#"{"r":"0","dict":{"#,
///         r#""0":{"k":23,"t":"alloc::vec::Vec<isize>","v":["1","2","3"],"l":3},"#,
///         r#""1":{"k":2,"t":"isize"},"#,
///         r#""2":{"k":2,"t":"isize"},"#,
///         r#""3":{"k":2,"t":"isize"}"#,
///         r#"}}"#,
///     ),
/// );
/// ```
#[derive(Default)]
pub struct Serializer<'a> {
    root: Option<&'a dyn Inspect>,
    entry_point: Vec<String>,
    options: SerializeOptions,
}

impl<'a> Serializer<'a> {
    /// Creates a serializer without root, which serializes the zero value.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a serializer for `root` with default options.
    #[inline]
    pub fn with_root(root: &'a dyn Inspect) -> Self {
        Self {
            root: Some(root),
            ..Self::default()
        }
    }

    #[inline]
    pub fn root(&self) -> Option<&'a dyn Inspect> {
        self.root
    }

    #[inline]
    pub fn entry_point(&self) -> &[String] {
        &self.entry_point
    }

    #[inline]
    pub fn options(&self) -> &SerializeOptions {
        &self.options
    }

    pub fn set_root(&mut self, root: &'a dyn Inspect) -> &mut Self {
        self.root = Some(root);
        self
    }

    /// Sets the depth bound. Negative values mean no limit, which is the
    /// default.
    pub fn set_max_depth(&mut self, max_depth: i64) -> &mut Self {
        self.options.max_depth = Depth::from(max_depth);
        self
    }

    /// Sets the path from the root to the value actually serialized.
    ///
    /// See [`navigate::resolve`] for the meaning of the tokens. An empty
    /// entry point serializes the root itself.
    pub fn set_entry_point<I, S>(&mut self, entry_point: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry_point = entry_point.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_cycle_policy(&mut self, cycle_policy: CyclePolicy) -> &mut Self {
        self.options.cycle_policy = cycle_policy;
        self
    }

    pub fn set_options(&mut self, options: SerializeOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Restores the default options and clears the entry point. The root is
    /// kept.
    pub fn reset(&mut self) -> &mut Self {
        self.entry_point.clear();
        self.options = SerializeOptions::default();
        self
    }

    /// Writes the document of the current root to `sink`.
    ///
    /// The entry point is resolved before anything is written. Any later
    /// failure aborts the call, and `sink` may then hold a truncated
    /// document; see [`to_vec`](Self::to_vec) for an atomic alternative.
    pub fn serialize<W: Write>(&self, sink: W) -> Result<(), SerializeError> {
        let root = match self.root {
            Some(root) => ValueRef::new(root),
            None => ValueRef::invalid(),
        };
        let root = navigate::resolve(root, &self.entry_point)?;

        let mut writer = BufWriter::new(sink);
        write_document(root, self.options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Serializes into a buffer, which is only returned on success.
    pub fn to_vec(&self) -> Result<Vec<u8>, SerializeError> {
        let mut buffer = Vec::new();
        self.serialize(&mut buffer)?;
        Ok(buffer)
    }

    /// Serializes into a string, which is only returned on success.
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let buffer = self.to_vec()?;
        String::from_utf8(buffer)
            .map_err(|err| SerializeError::Sink(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}

/// Streams the document of an already resolved root.
fn write_document<W: Write>(
    root: ValueRef<'_>,
    options: SerializeOptions,
    writer: &mut W,
) -> Result<(), SerializeError> {
    log::debug!(
        "serializing a {} root, max depth {:?}, cycle policy {:?}",
        root.kind(),
        options.max_depth,
        options.cycle_policy,
    );

    let mut session = Session::new(options);
    let root_id = session.add_to_dict(root, 0);

    encode::write_header(writer, root_id)?;

    let mut first = true;
    while let Some(entry) = session.pop() {
        let content = session.expand(&entry)?;
        log::trace!("entry {} at depth {}: {}", entry.id, entry.depth, entry.value.kind());
        encode::write_entry(writer, first, entry.id, &content)?;
        first = false;
    }

    encode::write_footer(writer)?;

    log::debug!("serialized {} entries", session.allocated());
    Ok(())
}

// -----------------------------------------------------------------------------
// One-shot helpers

/// Writes the document of `value` to `sink` with default options.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// vc_flatten::to_writer(&true, &mut out).unwrap();
///
/// assert_eq!(out, br#"{"r":"0","dict":{"0":{"k":1,"t":"bool","v":true}}}"#);
/// ```
pub fn to_writer<W: Write>(value: &dyn Inspect, sink: W) -> Result<(), SerializeError> {
    Serializer::with_root(value).serialize(sink)
}

/// Returns the document of `value` with default options.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     vc_flatten::to_string(&1_isize).unwrap(),
///     r#"{"r":"0","dict":{"0":{"k":2,"t":"isize","v":1}}}"#,
/// );
/// ```
pub fn to_string(value: &dyn Inspect) -> Result<String, SerializeError> {
    Serializer::with_root(value).to_string()
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::rc::Rc;
    use core::cell::OnceCell;
    use std::io;

    use vc_inspect::ValueRef;
    use vc_inspect::derive::Inspect;

    use super::{Serializer, to_string};
    use crate::navigate::resolve;
    use crate::{CyclePolicy, Depth, NavigationError, SerializeError, SerializeOptions};

    #[derive(Inspect)]
    struct Foo {
        a: isize,
        nest: Option<Box<Foo>>,
    }

    #[derive(Inspect)]
    struct Bar {
        a: Vec<isize>,
        b: String,
    }

    fn parse(document: &str) -> serde_json::Value {
        serde_json::from_str(document).unwrap()
    }

    #[test]
    fn scalar_roots() {
        assert_eq!(
            to_string(&true).unwrap(),
            r#"{"r":"0","dict":{"0":{"k":1,"t":"bool","v":true}}}"#
        );
        assert_eq!(
            to_string(&1_isize).unwrap(),
            r#"{"r":"0","dict":{"0":{"k":2,"t":"isize","v":1}}}"#
        );
    }

    #[test]
    fn missing_root_is_zero() {
        assert_eq!(
            Serializer::new().to_string().unwrap(),
            r#"{"r":"0","dict":{"0":{"k":0,"t":"0","v":null}}}"#
        );
    }

    #[test]
    fn vec_of_isize() {
        let document = parse(&to_string(&vec![1_isize, 2, 3]).unwrap());
        let dict = &document["dict"];

        assert_eq!(document["r"], "0");
        assert_eq!(dict["0"]["k"], 23);
        assert_eq!(dict["0"]["t"], "alloc::vec::Vec<isize>");
        assert_eq!(dict["0"]["v"], serde_json::json!(["1", "2", "3"]));
        assert_eq!(dict["0"]["l"], 3);
        for (id, value) in [("1", 1), ("2", 2), ("3", 3)] {
            assert_eq!(dict[id], serde_json::json!({"k": 2, "t": "isize", "v": value}));
        }
    }

    #[test]
    fn zero_depth_hides_content() {
        let foo = Foo { a: 1, nest: None };
        let mut serializer = Serializer::with_root(&foo);
        serializer.set_max_depth(0);

        let document = parse(&serializer.to_string().unwrap());
        let dict = document["dict"].as_object().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict["0"]["k"], 25);
        assert_eq!(dict["0"]["t"], "vc_flatten::serializer::tests::Foo");
        assert!(dict["0"].get("v").is_none());
    }

    #[test]
    fn depth_bound_on_nested_composites() {
        let value = vec![vec![vec![1_u8]]];
        for max_depth in 0..4_usize {
            let mut serializer = Serializer::with_root(&value);
            serializer.set_max_depth(max_depth as i64);

            let document = parse(&serializer.to_string().unwrap());
            for (id, entry) in document["dict"].as_object().unwrap() {
                let depth: usize = id.parse().unwrap();
                assert_eq!(entry.get("v").is_some(), depth < max_depth, "entry {id}");
                if depth < 3 {
                    assert_eq!(entry["l"], 1);
                }
            }
        }
    }

    #[test]
    fn nil_indirections_are_zero_entries() {
        let foo = Foo {
            a: 1,
            nest: Some(Box::new(Foo { a: 2, nest: None })),
        };
        let document = parse(&to_string(&foo).unwrap());
        let zero = serde_json::json!({"k": 0, "t": "0", "v": null});

        let zeros = document["dict"]
            .as_object()
            .unwrap()
            .values()
            .filter(|entry| **entry == zero)
            .count();
        assert_eq!(zeros, 1);

        let empty: OnceCell<u8> = OnceCell::new();
        assert_eq!(
            to_string(&empty).unwrap(),
            r#"{"r":"0","dict":{"0":{"k":0,"t":"0","v":null}}}"#
        );
    }

    #[test]
    fn entry_point() {
        let bar = Bar {
            a: vec![1, 2, 3],
            b: "b".into(),
        };
        let mut serializer = Serializer::with_root(&bar);
        serializer.set_entry_point(["a", "2"]);

        assert_eq!(
            serializer.to_string().unwrap(),
            r#"{"r":"0","dict":{"0":{"k":2,"t":"isize","v":3}}}"#
        );
    }

    #[test]
    fn entry_point_matches_resolved_root() {
        let foo = Foo {
            a: 1,
            nest: Some(Box::new(Foo { a: 2, nest: None })),
        };
        let mut serializer = Serializer::with_root(&foo);
        serializer.set_entry_point(["nest"]);

        let resolved = resolve(ValueRef::new(&foo), &["nest"]).unwrap();
        let direct = Serializer::with_root(resolved.get().unwrap());

        assert_eq!(serializer.to_vec().unwrap(), direct.to_vec().unwrap());
    }

    #[test]
    fn entry_point_errors_write_nothing() {
        let bar = Bar {
            a: vec![],
            b: String::new(),
        };
        let mut serializer = Serializer::with_root(&bar);
        serializer.set_entry_point(["c"]);

        let mut out = Vec::new();
        let err = serializer.serialize(&mut out).unwrap_err();
        assert!(matches!(
            err,
            SerializeError::Navigation(NavigationError::FieldNotFound { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn deterministic_output() {
        let bar = Bar {
            a: vec![4, 5],
            b: "x".into(),
        };
        let serializer = Serializer::with_root(&bar);
        assert_eq!(serializer.to_vec().unwrap(), serializer.to_vec().unwrap());
    }

    #[test]
    fn reset_keeps_root() {
        let bar = Bar {
            a: vec![4, 5],
            b: "x".into(),
        };
        let mut serializer = Serializer::with_root(&bar);
        serializer
            .set_entry_point(["a"])
            .set_max_depth(0)
            .set_cycle_policy(CyclePolicy::Reuse);
        serializer.reset();

        assert!(serializer.root().is_some());
        assert!(serializer.entry_point().is_empty());
        assert_eq!(serializer.options(), &SerializeOptions::default());
        assert_eq!(serializer.to_vec().unwrap(), to_string(&bar).unwrap().into_bytes());
    }

    #[test]
    fn unsupported_kind_aborts() {
        fn answer() -> u8 {
            42
        }
        let value: (u8, fn() -> u8) = (1, answer);

        let err = to_string(&value).unwrap_err();
        assert!(matches!(err, SerializeError::UnsupportedKind { .. }));
    }

    #[test]
    fn sink_errors() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("broken"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = Serializer::with_root(&true).serialize(Broken).unwrap_err();
        assert!(matches!(err, SerializeError::Sink(_)));
    }

    #[test]
    fn rc_cycle_with_reuse() {
        #[derive(Inspect)]
        struct Node {
            name: String,
            next: OnceCell<Rc<Node>>,
        }

        let first = Rc::new(Node {
            name: "first".into(),
            next: OnceCell::new(),
        });
        let second = Rc::new(Node {
            name: "second".into(),
            next: OnceCell::new(),
        });
        let _ = first.next.set(second.clone());
        let _ = second.next.set(first.clone());

        let holder = Some(first.clone());
        let mut serializer = Serializer::with_root(&holder);
        serializer.set_options(SerializeOptions::new(Depth::Unlimited, CyclePolicy::Reuse));

        let document = parse(&serializer.to_string().unwrap());
        let dict = &document["dict"];

        // 0: first, 1: "first", 2: second, 3: "second"
        assert_eq!(dict.as_object().unwrap().len(), 4);
        assert_eq!(dict["0"]["v"]["next"], "2");
        assert_eq!(dict["2"]["v"]["next"], "0");

        let borrowed = Serializer::with_root(&*first)
            .set_cycle_policy(CyclePolicy::Reuse)
            .to_string()
            .unwrap();
        assert_eq!(parse(&borrowed), document);
    }

    #[test]
    fn map_entries_pair_key_and_value_ids() {
        let map = BTreeMap::from([("a".to_owned(), vec![1_u8]), ("b".to_owned(), vec![])]);

        assert_eq!(
            to_string(&map).unwrap(),
            concat!(
                r#"{"r":"0","dict":{"#,
                r#""0":{"k":21,"t":"alloc::collections::BTreeMap<alloc::string::String, alloc::vec::Vec<u8>>","v":{"1":"2","3":"4"},"l":2},"#,
                r#""1":{"k":24,"t":"alloc::string::String","v":"a"},"#,
                r#""2":{"k":23,"t":"alloc::vec::Vec<u8>","v":["5"],"l":1},"#,
                r#""3":{"k":24,"t":"alloc::string::String","v":"b"},"#,
                r#""4":{"k":23,"t":"alloc::vec::Vec<u8>","v":[],"l":0},"#,
                r#""5":{"k":8,"t":"u8","v":1}"#,
                r#"}}"#,
            )
        );
    }

    #[test]
    fn enum_variants() {
        #[derive(Inspect)]
        #[inspect(type_path = "shapes::Shape")]
        enum Shape {
            Circle { radius: f32 },
            Segment(u8, #[inspect(skip)] u8, u8),
            Empty,
        }

        let shapes = [
            Shape::Circle { radius: 0.5 },
            Shape::Segment(1, 2, 3),
            Shape::Empty,
        ];
        let document = parse(&to_string(&shapes).unwrap());
        let dict = &document["dict"];

        assert_eq!(dict["0"]["k"], 17);
        assert_eq!(dict["0"]["t"], "[shapes::Shape; 3]");
        assert_eq!(dict["1"]["t"], "shapes::Shape::Circle");
        assert_eq!(dict["1"]["v"], serde_json::json!({"radius": "4"}));
        assert_eq!(dict["2"]["v"], serde_json::json!({"0": "5", "2": "6"}));
        assert_eq!(dict["3"], serde_json::json!({"k": 25, "t": "shapes::Shape::Empty", "v": {}}));
        assert_eq!(dict["4"]["v"], 0.5);
        assert_eq!(dict["6"]["v"], 3);
    }

    #[test]
    fn channels_only_report_their_length() {
        let (sender, receiver) = async_channel::unbounded::<u8>();
        sender.try_send(1).unwrap();
        sender.try_send(2).unwrap();

        let document = parse(&to_string(&(sender, receiver)).unwrap());
        assert_eq!(
            document["dict"]["1"],
            serde_json::json!({"k": 18, "t": "async_channel::Sender<u8>", "l": 2})
        );
        assert_eq!(document["dict"]["2"]["t"], "async_channel::Receiver<u8>");
    }
}
