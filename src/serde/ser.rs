use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::arena::{Node, Ref};
use crate::{Document, View};

impl Serialize for Ref<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.node() {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(v) => serializer.serialize_bool(*v),
            Node::Int32(v) => serializer.serialize_i32(*v),
            Node::UInt32(v) => serializer.serialize_u32(*v),
            Node::Int64(v) => serializer.serialize_i64(*v),
            Node::UInt64(v) => serializer.serialize_u64(*v),
            Node::Double(v) => serializer.serialize_f64(*v),
            Node::String(v) => serializer.serialize_str(v),
            Node::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in self.elements() {
                    seq.serialize_element(&item)?;
                }
                seq.end()
            }
            Node::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, child) in self.members() {
                    map.serialize_entry(key, &child)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for View<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.as_ref(), serializer)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.as_ref(), serializer)
    }
}
