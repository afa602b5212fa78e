use std::{collections::HashMap, fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

use crate::domain::errors::{GenerateError, GenerateResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    pub name: String,
    pub field_index: usize,
}

/// Destination columns in output order, each bound to the CSV field it reads.
///
/// The mapping arrives as JSON object text such as `{"id":0,"name":1}`.
/// Key order is significant and kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMapping {
    columns: Vec<MappedColumn>,
}

impl OrderMapping {
    pub fn new<I, S>(entries: I) -> GenerateResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut columns: Vec<MappedColumn> = Vec::new();
        let mut owner_by_index: HashMap<usize, usize> = HashMap::new();

        for (name, raw_index) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(GenerateError::BlankColumnName);
            }
            if columns.iter().any(|column| column.name == name) {
                return Err(GenerateError::DuplicateColumn(name));
            }
            let field_index =
                usize::try_from(raw_index).map_err(|_| GenerateError::NegativeFieldIndex {
                    column: name.clone(),
                    index: raw_index,
                })?;
            if let Some(&position) = owner_by_index.get(&field_index) {
                return Err(GenerateError::DuplicateFieldIndex {
                    index: field_index,
                    first: columns[position].name.clone(),
                    second: name,
                });
            }

            owner_by_index.insert(field_index, columns.len());
            columns.push(MappedColumn { name, field_index });
        }

        if columns.is_empty() {
            return Err(GenerateError::EmptyOrderMapping);
        }
        Ok(Self { columns })
    }

    pub fn parse(raw_mapping: &str) -> GenerateResult<Self> {
        let RawEntries(entries) = serde_json::from_str::<RawEntries>(raw_mapping)
            .map_err(|error| GenerateError::InvalidOrderMapping(error.to_string()))?;
        Self::new(entries)
    }

    pub fn columns(&self) -> &[MappedColumn] {
        &self.columns
    }

    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for OrderMapping {
    type Err = GenerateError;

    fn from_str(value: &str) -> GenerateResult<Self> {
        Self::parse(value)
    }
}

// Read straight off the map visitor: key order and repeated keys both survive.
struct RawEntries(Vec<(String, i64)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawEntriesVisitor)
    }
}

struct RawEntriesVisitor;

impl<'de> Visitor<'de> for RawEntriesVisitor {
    type Value = RawEntries;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping column names to integer field indices")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, index)) = access.next_entry::<String, i64>()? {
            entries.push((name, index));
        }
        Ok(RawEntries(entries))
    }
}
