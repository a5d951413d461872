//! Normalization of decoded ABR payloads
//!
//! Converts the loosely-typed, capitalised JSON returned by the ABR service into
//! [`BusinessRecord`] and [`NameSearchResult`] values. One function per response
//! shape; each checks the `Message` field first and fails fast if the service
//! reported a logical error.
//!
//! Absent fields and `null` become zero values. A field present with the wrong
//! JSON type is [`ResponseError::Malformed`], never silently defaulted.

use serde_json::{Map, Value};

use crate::error::ResponseError;
use crate::models::{Address, BusinessRecord, Entity, EntityType, NameSearchResult};

const ROOT: &str = "$";

/// Normalize an ABN or ACN details payload
pub fn normalize_entity(raw: &Value) -> Result<BusinessRecord, ResponseError> {
    let fields = Fields::root(raw)?;
    fields.check_message()?;

    Ok(BusinessRecord {
        abn: fields.string("Abn")?,
        status: fields.string("AbnStatus")?,
        status_effective_from: fields.string("AbnStatusEffectiveFrom")?,
        acn: fields.string("Acn")?,
        address: Address {
            date: fields.string("AddressDate")?,
            postcode: fields.string("AddressPostcode")?,
            state: fields.string("AddressState")?,
        },
        business_names: fields.string_list("BusinessName")?,
        entity: Entity {
            name: fields.string("EntityName")?,
            entity_type: EntityType {
                code: fields.string("EntityTypeCode")?,
                name: fields.string("EntityTypeName")?,
            },
        },
        gst: fields.string("Gst")?,
    })
}

/// Normalize a matching-names payload
pub fn normalize_name_search(raw: &Value) -> Result<Vec<NameSearchResult>, ResponseError> {
    let fields = Fields::root(raw)?;
    fields.check_message()?;

    let rows = match fields.get("Names") {
        None => return Ok(Vec::new()),
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(ResponseError::malformed("Names", "an array")),
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let path = format!("Names[{i}]");
            let row = Fields::nested(row, path)?;
            Ok(NameSearchResult {
                abn: row.string("Abn")?,
                status: row.string("AbnStatus")?,
                is_current: row.bool("IsCurrent")?,
                name: row.string("Name")?,
                name_type: row.string("NameType")?,
                postcode: row.string("Postcode")?,
                score: row.number("Score")?,
                state: row.string("State")?,
            })
        })
        .collect()
}

/// Typed, path-aware access to one JSON object
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: Option<String>,
}

impl<'a> Fields<'a> {
    fn root(value: &'a Value) -> Result<Self, ResponseError> {
        match value {
            Value::Object(map) => Ok(Self { map, path: None }),
            _ => Err(ResponseError::malformed(ROOT, "an object")),
        }
    }

    fn nested(value: &'a Value, path: String) -> Result<Self, ResponseError> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                path: Some(path),
            }),
            _ => Err(ResponseError::malformed(path, "an object")),
        }
    }

    fn field_name(&self, key: &str) -> String {
        match &self.path {
            Some(path) => format!("{path}.{key}"),
            None => key.to_string(),
        }
    }

    /// Present, non-null value for `key`
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// A non-empty `Message` is the registry reporting failure inside a success body
    fn check_message(&self) -> Result<(), ResponseError> {
        let message = self.string("Message")?;
        if message.is_empty() {
            Ok(())
        } else {
            Err(ResponseError::Upstream(message))
        }
    }

    fn string(&self, key: &str) -> Result<String, ResponseError> {
        match self.get(key) {
            None => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ResponseError::malformed(self.field_name(key), "a string")),
        }
    }

    fn bool(&self, key: &str) -> Result<bool, ResponseError> {
        match self.get(key) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(ResponseError::malformed(self.field_name(key), "a boolean")),
        }
    }

    fn number(&self, key: &str) -> Result<f64, ResponseError> {
        match self.get(key) {
            None => Ok(0.0),
            // serde_json rejects NaN/Infinity on decode; checked again for hand-built values
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|f| f.is_finite())
                .ok_or_else(|| ResponseError::malformed(self.field_name(key), "a finite number")),
            Some(_) => Err(ResponseError::malformed(self.field_name(key), "a number")),
        }
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>, ResponseError> {
        let items = match self.get(key) {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ResponseError::malformed(self.field_name(key), "an array")),
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ResponseError::malformed(
                    format!("{}[{i}]", self.field_name(key)),
                    "a string",
                )),
            })
            .collect()
    }
}
