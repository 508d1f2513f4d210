use crate::types::Field;
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Reads a YAML node as written, guided by the shape of its resolved `Value`.
///
/// Sequences and mappings are walked in document order; every scalar is
/// taken through `deserialize_str`, which yields the scalar text untouched
/// (`1.10`, `0x1F`, `True`, `~`). The shape must come from the same document.
pub struct RawSeed<'a>(pub &'a Value);

impl<'de> DeserializeSeed<'de> for RawSeed<'_> {
    type Value = Field;

    fn deserialize<D>(self, deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.0 {
            Value::Sequence(items) => deserializer.deserialize_seq(SeqVisitor(items)),
            Value::Mapping(map) => deserializer.deserialize_map(MapVisitor(map)),
            Value::Tagged(tagged) => RawSeed(&tagged.value).deserialize(deserializer),
            _ => deserializer.deserialize_str(TextVisitor).map(Field::Text),
        }
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }
}

struct SeqVisitor<'a>(&'a [Value]);

impl<'de> Visitor<'de> for SeqVisitor<'_> {
    type Value = Field;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} items", self.0.len())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Field, A::Error> {
        let shapes = self.0;
        let mut items = Vec::with_capacity(shapes.len());
        for shape in shapes {
            match seq.next_element_seed(RawSeed(shape))? {
                Some(item) => items.push(item),
                None => return Err(de::Error::invalid_length(items.len(), &self)),
            }
        }
        Ok(Field::List(items))
    }
}

struct MapVisitor<'a>(&'a Mapping);

impl<'de> Visitor<'de> for MapVisitor<'_> {
    type Value = Field;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a mapping of {} entries", self.0.len())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Field, A::Error> {
        let shapes = self.0;
        let mut fields = BTreeMap::new();
        for (key_shape, value_shape) in shapes {
            let key = match map.next_key_seed(RawSeed(key_shape))? {
                Some(Field::Text(key)) => key,
                Some(_) => return Err(de::Error::custom("mapping keys must be scalars")),
                None => return Err(de::Error::invalid_length(fields.len(), &self)),
            };
            let value = map.next_value_seed(RawSeed(value_shape))?;
            fields.insert(key, value);
        }
        Ok(Field::Map(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(yaml: &str) -> Field {
        let shape: Value = serde_yaml::from_str(yaml).unwrap();
        RawSeed(&shape)
            .deserialize(serde_yaml::Deserializer::from_str(yaml))
            .unwrap()
    }

    #[test]
    fn scalars_keep_source_text() {
        let field = raw("a: 1.10\nb: 0x1F\nc: True\nd: ~\ne:\n3: y\n");
        let Field::Map(map) = field else {
            panic!("expected a mapping");
        };
        assert_eq!(map["a"], Field::from("1.10"));
        assert_eq!(map["b"], Field::from("0x1F"));
        assert_eq!(map["c"], Field::from("True"));
        assert_eq!(map["d"], Field::from("~"));
        assert_eq!(map["e"], Field::from(""));
        assert_eq!(map["3"], Field::from("y"));
    }

    #[test]
    fn nested_structure_is_kept() {
        let field = raw("done:\n  - 007\n  - {pr: 1.0, ok: yes}\n");
        let expected = Field::Map(BTreeMap::from([(
            "done".to_string(),
            Field::List(vec![
                Field::from("007"),
                Field::Map(BTreeMap::from([
                    ("pr".to_string(), Field::from("1.0")),
                    ("ok".to_string(), Field::from("yes")),
                ])),
            ]),
        )]));
        assert_eq!(field, expected);
    }

    #[test]
    fn top_level_scalar_is_text() {
        assert_eq!(raw("0o17\n"), Field::from("0o17"));
    }
}
