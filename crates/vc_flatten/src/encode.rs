//! JSON encoding of the document.
//!
//! The document is streamed: the envelope is opened before the first entry
//! is known, and every entry is written as soon as it is drained.
//!
//! ```text
//! {"r":"<root id>","dict":{"<id>":<entry>,...}}
//! ```
//!
//! An entry lists its members in the order `k`, `t`, `v`, `l`.

use std::io::Write;

use vc_inspect::TypeName;
use vc_inspect::info::Kind;
use vc_inspect::ops::Scalar;

use crate::dict::{Children, Content};
use crate::error::SerializeError;

/// The entry of every zero value.
pub const ZERO_ENTRY: &str = r#"{"k":0,"t":"0","v":null}"#;

/// Writes `{"r":"<root>","dict":{`.
pub fn write_header<W: Write>(writer: &mut W, root: u64) -> Result<(), SerializeError> {
    write!(writer, r#"{{"r":"{root}","dict":{{"#)?;
    Ok(())
}

/// Writes `}}`.
pub fn write_footer<W: Write>(writer: &mut W) -> Result<(), SerializeError> {
    writer.write_all(b"}}")?;
    Ok(())
}

/// Writes `"<id>":<entry>`, preceded by a comma unless it is the first
/// entry of the dictionary.
pub fn write_entry<W: Write>(
    writer: &mut W,
    first: bool,
    id: u64,
    content: &Content<'_>,
) -> Result<(), SerializeError> {
    if !first {
        writer.write_all(b",")?;
    }
    write!(writer, r#""{id}":"#)?;

    match content {
        Content::Zero => writer.write_all(ZERO_ENTRY.as_bytes())?,
        Content::Scalar {
            kind,
            type_name,
            scalar,
        } => {
            write_kind_and_type(writer, *kind, type_name)?;
            writer.write_all(br#","v":"#)?;
            write_scalar(writer, scalar)?;
            writer.write_all(b"}")?;
        }
        Content::Composite {
            kind,
            type_name,
            len,
            children,
        } => {
            write_kind_and_type(writer, *kind, type_name)?;
            writer.write_all(br#","v":"#)?;
            write_children(writer, children)?;
            write_len(writer, *len)?;
            writer.write_all(b"}")?;
        }
        Content::Channel { type_name, len } => {
            write_kind_and_type(writer, Kind::Chan, type_name)?;
            write_len(writer, Some(*len))?;
            writer.write_all(b"}")?;
        }
        Content::Truncated {
            kind,
            type_name,
            len,
        } => {
            write_kind_and_type(writer, *kind, type_name)?;
            write_len(writer, *len)?;
            writer.write_all(b"}")?;
        }
    }

    Ok(())
}

/// Writes `{"k":<code>,"t":"<type>"`, leaving the object open.
fn write_kind_and_type<W: Write>(
    writer: &mut W,
    kind: Kind,
    type_name: &TypeName,
) -> Result<(), SerializeError> {
    write!(writer, r#"{{"k":{},"t":"#, kind.code())?;
    serde_json::to_writer(&mut *writer, &type_name.to_string())?;
    Ok(())
}

fn write_len<W: Write>(writer: &mut W, len: Option<usize>) -> Result<(), SerializeError> {
    if let Some(len) = len {
        write!(writer, r#","l":{len}"#)?;
    }
    Ok(())
}

/// Non-finite floats have no JSON literal and become `null`.
fn write_scalar<W: Write>(writer: &mut W, scalar: &Scalar<'_>) -> Result<(), SerializeError> {
    match *scalar {
        Scalar::Bool(value) => serde_json::to_writer(writer, &value)?,
        Scalar::Int(value) => serde_json::to_writer(writer, &value)?,
        Scalar::Uint(value) => serde_json::to_writer(writer, &value)?,
        Scalar::Float32(value) => serde_json::to_writer(writer, &value)?,
        Scalar::Float64(value) => serde_json::to_writer(writer, &value)?,
        Scalar::Str(value) => serde_json::to_writer(writer, value)?,
    }
    Ok(())
}

fn write_children<W: Write>(
    writer: &mut W,
    children: &Children<'_>,
) -> Result<(), SerializeError> {
    match children {
        Children::Elements(ids) => {
            writer.write_all(b"[")?;
            for (index, id) in ids.iter().enumerate() {
                if index > 0 {
                    writer.write_all(b",")?;
                }
                write!(writer, r#""{id}""#)?;
            }
            writer.write_all(b"]")?;
        }
        Children::Entries(pairs) => {
            writer.write_all(b"{")?;
            for (index, (key, value)) in pairs.iter().enumerate() {
                if index > 0 {
                    writer.write_all(b",")?;
                }
                write!(writer, r#""{key}":"{value}""#)?;
            }
            writer.write_all(b"}")?;
        }
        Children::Fields(fields) => {
            writer.write_all(b"{")?;
            for (index, (name, id)) in fields.iter().enumerate() {
                if index > 0 {
                    writer.write_all(b",")?;
                }
                serde_json::to_writer(&mut *writer, name)?;
                write!(writer, r#":"{id}""#)?;
            }
            writer.write_all(b"}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use vc_inspect::{Inspect, ValueRef};

    use super::*;

    fn encode(id: u64, content: &Content<'_>) -> String {
        let mut out = Vec::new();
        write_entry(&mut out, true, id, content).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn type_name_of(value: &dyn Inspect) -> TypeName {
        ValueRef::new(value).type_name().unwrap()
    }

    #[test]
    fn zero_entry() {
        assert_eq!(encode(3, &Content::Zero), r#""3":{"k":0,"t":"0","v":null}"#);
    }

    #[test]
    fn scalars() {
        let content = Content::Scalar {
            kind: Kind::Bool,
            type_name: type_name_of(&true),
            scalar: Scalar::Bool(true),
        };
        assert_eq!(encode(0, &content), r#""0":{"k":1,"t":"bool","v":true}"#);

        let content = Content::Scalar {
            kind: Kind::Float32,
            type_name: type_name_of(&0.02_f32),
            scalar: Scalar::Float32(0.02),
        };
        assert_eq!(encode(0, &content), r#""0":{"k":13,"t":"f32","v":0.02}"#);

        let content = Content::Scalar {
            kind: Kind::Float64,
            type_name: type_name_of(&f64::NAN),
            scalar: Scalar::Float64(f64::NAN),
        };
        assert_eq!(encode(0, &content), r#""0":{"k":14,"t":"f64","v":null}"#);

        let content = Content::Scalar {
            kind: Kind::String,
            type_name: type_name_of(&String::new()),
            scalar: Scalar::Str("say \"hi\"\n"),
        };
        assert_eq!(
            encode(0, &content),
            r#""0":{"k":24,"t":"alloc::string::String","v":"say \"hi\"\n"}"#
        );
    }

    #[test]
    fn composites() {
        let content = Content::Composite {
            kind: Kind::Slice,
            type_name: type_name_of(&Vec::<isize>::new()),
            len: Some(2),
            children: Children::Elements(vec![1, 2]),
        };
        assert_eq!(
            encode(0, &content),
            r#""0":{"k":23,"t":"alloc::vec::Vec<isize>","v":["1","2"],"l":2}"#
        );

        let content = Content::Composite {
            kind: Kind::Struct,
            type_name: type_name_of(&(1_u8,)),
            len: None,
            children: Children::Fields(vec![("0", 1)]),
        };
        assert_eq!(encode(0, &content), r#""0":{"k":25,"t":"(u8,)","v":{"0":"1"}}"#);

        let content = Content::Composite {
            kind: Kind::Map,
            type_name: type_name_of(&std::collections::BTreeMap::<u8, u8>::new()),
            len: Some(1),
            children: Children::Entries(vec![(1, 2)]),
        };
        assert_eq!(
            encode(0, &content),
            r#""0":{"k":21,"t":"alloc::collections::BTreeMap<u8, u8>","v":{"1":"2"},"l":1}"#
        );
    }

    #[test]
    fn truncated_and_channel() {
        let content = Content::Truncated {
            kind: Kind::Slice,
            type_name: type_name_of(&Vec::<isize>::new()),
            len: Some(4),
        };
        assert_eq!(
            encode(0, &content),
            r#""0":{"k":23,"t":"alloc::vec::Vec<isize>","l":4}"#
        );

        let content = Content::Truncated {
            kind: Kind::Int,
            type_name: type_name_of(&1_isize),
            len: None,
        };
        assert_eq!(encode(0, &content), r#""0":{"k":2,"t":"isize"}"#);

        let content = Content::Channel {
            type_name: type_name_of(&1_isize),
            len: 0,
        };
        assert_eq!(encode(0, &content), r#""0":{"k":18,"t":"isize","l":0}"#);
    }

    #[test]
    fn envelope() {
        let mut out = Vec::new();
        write_header(&mut out, 0).unwrap();
        write_entry(&mut out, true, 0, &Content::Zero).unwrap();
        write_entry(&mut out, false, 1, &Content::Zero).unwrap();
        write_footer(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"r":"0","dict":{"0":{"k":0,"t":"0","v":null},"1":{"k":0,"t":"0","v":null}}}"#
        );
    }
}
