//! Host globals document.
//!
//! The host keeps its stamina table inside a larger JSON document. This
//! loader keeps the whole document untouched and exposes only the stamina
//! object, so a pass rewrites the adjusted leaves and nothing else.

use std::path::Path;

use serde_json::{Map, Number, Value};
use stamina_core::{FieldValue, StaminaParameters, StaminaTable, TableError, ValueKind};

use crate::loaders::{LoadResult, read_file, read_file_async, write_file};

/// JSON pointer of the stamina table inside the host globals.
pub const STAMINA_POINTER: &str = "/config/Stamina";

/// Largest integer a JSON float can carry without losing precision.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parsed host globals document.
#[derive(Clone, Debug)]
pub struct GlobalsDocument {
    root: Value,
    pointer: String,
}

impl GlobalsDocument {
    pub fn from_value(root: Value) -> Self {
        Self {
            root,
            pointer: STAMINA_POINTER.to_owned(),
        }
    }

    /// Locate the stamina table at a different JSON pointer.
    #[must_use]
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = pointer.into();
        self
    }

    /// Load globals from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid globals {}: {}", path.display(), e))
    }

    /// Async variant of [`GlobalsDocument::load`].
    pub async fn load_async(path: &Path) -> LoadResult<Self> {
        let content = read_file_async(path).await?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid globals {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Self> {
        let root: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse globals JSON: {}", e))?;
        Ok(Self::from_value(root))
    }

    /// Write the document back as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> LoadResult<()> {
        write_file(path, &self.to_json_string()?)
    }

    pub fn to_json_string(&self) -> LoadResult<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| anyhow::anyhow!("Failed to serialize globals JSON: {}", e))
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// The stamina object, read-only.
    pub fn stamina(&self) -> LoadResult<&Map<String, Value>> {
        self.root
            .pointer(&self.pointer)
            .and_then(Value::as_object)
            .ok_or_else(|| anyhow::anyhow!("No stamina table at '{}'", self.pointer))
    }

    /// Mutable view of the stamina object for one adjustment pass.
    pub fn stamina_mut(&mut self) -> LoadResult<JsonStaminaTable<'_>> {
        let object = self
            .root
            .pointer_mut(&self.pointer)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| anyhow::anyhow!("No stamina table at '{}'", self.pointer))?;
        Ok(JsonStaminaTable { object })
    }

    /// Typed copy of the stamina table.
    pub fn parameters(&self) -> LoadResult<StaminaParameters> {
        let object = self.stamina()?.clone();
        serde_json::from_value(Value::Object(object))
            .map_err(|e| anyhow::anyhow!("Malformed stamina table: {}", e))
    }
}

/// [`StaminaTable`] over the stamina object of a JSON document.
///
/// Nested fields are addressed with dotted names (`WalkConsumption.x`).
/// Integral results are written back as JSON integers.
#[derive(Debug)]
pub struct JsonStaminaTable<'a> {
    object: &'a mut Map<String, Value>,
}

impl<'a> JsonStaminaTable<'a> {
    pub fn new(object: &'a mut Map<String, Value>) -> Self {
        Self { object }
    }
}

fn lookup<'v>(object: &'v Map<String, Value>, field: &str) -> Option<&'v Value> {
    let mut parts = field.split('.');
    let mut value = object.get(parts.next()?)?;
    for part in parts {
        value = value.get(part)?;
    }
    Some(value)
}

/// Reads `field` from a stamina object without borrowing it mutably.
pub fn read_field(object: &Map<String, Value>, field: &str) -> Option<FieldValue> {
    match lookup(object, field)? {
        Value::Number(number) => number.as_f64().map(FieldValue::Float),
        Value::Bool(flag) => Some(FieldValue::Flag(*flag)),
        _ => None,
    }
}

fn lookup_mut<'v>(object: &'v mut Map<String, Value>, field: &str) -> Option<&'v mut Value> {
    let mut parts = field.split('.');
    let mut value = object.get_mut(parts.next()?)?;
    for part in parts {
        value = value.get_mut(part)?;
    }
    Some(value)
}

fn number_value(field: &str, value: f64) -> Result<Value, TableError> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Ok(Value::from(value as i64));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| TableError::UnrepresentableValue {
            field: field.to_owned(),
            value,
        })
}

impl StaminaTable for JsonStaminaTable<'_> {
    fn read(&self, field: &str) -> Option<FieldValue> {
        read_field(self.object, field)
    }

    fn write(&mut self, field: &str, value: FieldValue) -> Result<(), TableError> {
        let slot = lookup_mut(self.object, field)
            .ok_or_else(|| TableError::UnknownField(field.to_owned()))?;
        let expected = match slot {
            Value::Number(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Flag,
            _ => return Err(TableError::UnknownField(field.to_owned())),
        };

        match value {
            FieldValue::Float(v) if expected == ValueKind::Float => {
                *slot = number_value(field, v)?;
            }
            FieldValue::Flag(b) if expected == ValueKind::Flag => {
                *slot = Value::Bool(b);
            }
            _ => {
                return Err(TableError::KindMismatch {
                    field: field.to_owned(),
                    expected,
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn globals() -> GlobalsDocument {
        GlobalsDocument::from_value(json!({
            "config": {
                "Stamina": {
                    "Capacity": 110,
                    "SprintDrainRate": 4.5,
                    "WalkConsumption": { "x": -0.35, "y": 0.15 },
                    "StaminaExhaustionCausesJiggle": true,
                    "Comment": "untouched"
                },
                "Health": { "Falling": { "DamagePerMeter": 11 } }
            }
        }))
    }

    #[test]
    fn reads_scalars_vectors_and_flags() {
        let mut doc = globals();
        let table = doc.stamina_mut().unwrap();
        assert_eq!(table.read("Capacity"), Some(FieldValue::Float(110.0)));
        assert_eq!(table.read("WalkConsumption.x"), Some(FieldValue::Float(-0.35)));
        assert_eq!(
            table.read("StaminaExhaustionCausesJiggle"),
            Some(FieldValue::Flag(true))
        );
        assert_eq!(table.read("JumpConsumption"), None);
        assert_eq!(table.read("Comment"), None);
    }

    #[test]
    fn snapshot_reads_through_shared_document() {
        let doc = globals();
        let stamina = doc.stamina().unwrap();
        let file = crate::ConfigFile::snapshot(
            |field| read_field(stamina, field),
            &stamina_core::StaminaSchema::stamina(),
            stamina_core::AdjustmentMethod::Fixed,
            0.0,
        );

        assert_eq!(
            file.fields.get("Capacity"),
            Some(&crate::FixedEntry::Number(110.0))
        );
        assert!(!file.fields.contains_key("JumpConsumption"));
        assert!(!file.fields.contains_key("Comment"));
        assert_eq!(doc.root(), globals().root());
    }

    #[test]
    fn writes_in_place_without_touching_other_keys() {
        let mut doc = globals();
        {
            let mut table = doc.stamina_mut().unwrap();
            table.write("Capacity", FieldValue::Float(500.0)).unwrap();
            table.write("WalkConsumption.y", FieldValue::Float(0.0)).unwrap();
            table.write("SprintDrainRate", FieldValue::Float(2.25)).unwrap();
        }

        let stamina = &doc.root()["config"]["Stamina"];
        assert_eq!(stamina["Capacity"], json!(500));
        assert_eq!(stamina["WalkConsumption"], json!({ "x": -0.35, "y": 0 }));
        assert_eq!(stamina["SprintDrainRate"], json!(2.25));
        assert_eq!(stamina["Comment"], json!("untouched"));
        assert_eq!(
            doc.root()["config"]["Health"]["Falling"]["DamagePerMeter"],
            json!(11)
        );
    }

    #[test]
    fn never_creates_fields() {
        let mut doc = globals();
        let mut table = doc.stamina_mut().unwrap();
        assert_eq!(
            table.write("JumpConsumption", FieldValue::Float(1.0)),
            Err(TableError::UnknownField("JumpConsumption".into()))
        );
        assert_eq!(
            table.write("WalkConsumption.z", FieldValue::Float(1.0)),
            Err(TableError::UnknownField("WalkConsumption.z".into()))
        );
        assert!(lookup(table.object, "JumpConsumption").is_none());
    }

    #[test]
    fn rejects_kind_mismatch_and_nan() {
        let mut doc = globals();
        let mut table = doc.stamina_mut().unwrap();
        assert_eq!(
            table.write("Capacity", FieldValue::Flag(false)),
            Err(TableError::KindMismatch {
                field: "Capacity".into(),
                expected: ValueKind::Float,
                found: ValueKind::Flag,
            })
        );
        assert!(matches!(
            table.write("SprintDrainRate", FieldValue::Float(f64::NAN)),
            Err(TableError::UnrepresentableValue { .. })
        ));
        assert_eq!(table.read("SprintDrainRate"), Some(FieldValue::Float(4.5)));
    }

    #[test]
    fn missing_stamina_object_is_an_error() {
        let mut doc = GlobalsDocument::from_value(json!({ "config": {} }));
        assert!(doc.stamina_mut().is_err());

        let mut moved = globals().with_pointer("/config/Health");
        assert!(moved.stamina_mut().is_ok());
    }

    #[tokio::test]
    async fn file_round_trip_preserves_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("globals.json");
        globals().save(&path).unwrap();

        let mut doc = GlobalsDocument::load_async(&path).await.unwrap();
        doc.stamina_mut()
            .unwrap()
            .write("StaminaExhaustionCausesJiggle", FieldValue::Flag(false))
            .unwrap();
        doc.save(&path).unwrap();

        let reloaded = GlobalsDocument::load(&path).unwrap();
        let params = reloaded.parameters().unwrap();
        assert_eq!(params.capacity, 110.0);
        assert!(!params.stamina_exhaustion_causes_jiggle);
        assert_eq!(params.walk_consumption.x, -0.35);
    }
}
