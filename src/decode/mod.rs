use std::fmt;

use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use smol_str::SmolStr;

use crate::arena::{Arena, Member, Node, NodeId};
use crate::{DuplicateKeys, ParseOptions, Result};

/// Parse complete JSON text into a fresh arena, returning the root handle.
///
/// Lexing is delegated to `serde_json`; nodes are built straight into the
/// arena without an intermediate value tree. On failure the partially built
/// arena is dropped, so callers never observe a truncated tree.
///
/// There is no nesting limit: anything the serializer can write parses back.
/// `serde_stacker` moves the recursion onto heap-allocated stack segments
/// once the current one runs low.
pub(crate) fn from_slice(input: &[u8], options: &ParseOptions) -> Result<(Arena, NodeId)> {
    let mut arena = Arena::with_capacity(input.len() / 8);
    let mut deserializer = serde_json::Deserializer::from_slice(input);
    deserializer.disable_recursion_limit();
    let root = NodeSeed::new(&mut arena, options)
        .deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok((arena, root))
}

pub(crate) fn from_json_value(value: &serde_json::Value) -> Result<(Arena, NodeId)> {
    let mut arena = Arena::new();
    let root = NodeSeed::new(&mut arena, &ParseOptions::default())
        .deserialize(serde_stacker::Deserializer::new(value))?;
    Ok((arena, root))
}

/// Non-negative integers take the narrowest of Int32, UInt32, Int64, UInt64.
pub(crate) fn narrow_u64(value: u64) -> Node {
    if let Ok(v) = i32::try_from(value) {
        Node::Int32(v)
    } else if let Ok(v) = u32::try_from(value) {
        Node::UInt32(v)
    } else if let Ok(v) = i64::try_from(value) {
        Node::Int64(v)
    } else {
        Node::UInt64(value)
    }
}

pub(crate) fn narrow_i64(value: i64) -> Node {
    if let Ok(v) = u64::try_from(value) {
        return narrow_u64(v);
    }
    match i32::try_from(value) {
        Ok(v) => Node::Int32(v),
        Err(_) => Node::Int64(value),
    }
}

struct NodeSeed<'a> {
    arena: &'a mut Arena,
    duplicate_keys: DuplicateKeys,
}

impl<'a> NodeSeed<'a> {
    fn new(arena: &'a mut Arena, options: &ParseOptions) -> Self {
        Self {
            arena,
            duplicate_keys: options.duplicate_keys,
        }
    }

    fn child(&mut self) -> NodeSeed<'_> {
        NodeSeed {
            arena: &mut *self.arena,
            duplicate_keys: self.duplicate_keys,
        }
    }
}

impl<'de> DeserializeSeed<'de> for NodeSeed<'_> {
    type Value = NodeId;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<NodeId, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for NodeSeed<'_> {
    type Value = NodeId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(Node::Null))
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(Node::Null))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(Node::Bool(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(narrow_i64(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(narrow_u64(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(Node::Double(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(Node::from(value)))
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<NodeId, E> {
        Ok(self.arena.alloc(Node::String(value)))
    }

    fn visit_seq<A>(mut self, mut seq: A) -> std::result::Result<NodeId, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(self.child())? {
            items.push(item);
        }
        Ok(self.arena.alloc(Node::Array(items)))
    }

    fn visit_map<A>(mut self, mut map: A) -> std::result::Result<NodeId, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members: Vec<Member> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            let existing = members.iter().position(|member| member.key == key);
            match (existing, self.duplicate_keys) {
                (Some(_), DuplicateKeys::KeepFirst) => {
                    map.next_value::<IgnoredAny>()?;
                }
                (Some(pos), DuplicateKeys::KeepLast) => {
                    members[pos].value = map.next_value_seed(self.child())?;
                }
                (None, _) => {
                    let value = map.next_value_seed(self.child())?;
                    members.push(Member {
                        key: SmolStr::from(key),
                        value,
                    });
                }
            }
        }
        Ok(self.arena.alloc(Node::Object(members)))
    }
}
