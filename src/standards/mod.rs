//! Attribute-namespacing layer for device inventory.
//!
//! One generic [`ResourceEntity`] interprets declarative
//! [`schema::ResourceSchema`] descriptions: logical fields map onto
//! string-keyed attribute dictionaries whose keys are built from a namespace
//! or family/shell-type prefix plus a fixed suffix, the shape the
//! orchestration API consumes.

pub mod families;
pub mod profile;
pub mod schema;
pub mod validators;

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::error::StandardsError;
use schema::{AttrLevel, AttributeDef, ResourceSchema};
use validators::truncate_attr;

/// Ordered attribute dictionary. Position is fixed by the first insertion,
/// the value by the last write, so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn insert(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.0 == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|e| e.0 != key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.0 == key).map(|e| e.1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.0.as_str(), e.1.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A device-inventory entity: one resource kind instantiated under a shell.
///
/// Attribute reads and writes go through the schema so every storage key is
/// built the same way; writes clamp values via
/// [`validators::truncate_attr`].
#[derive(Debug, Clone)]
pub struct ResourceEntity {
    schema: &'static ResourceSchema,
    name: String,
    unique_identifier: String,
    shell_name: String,
    shell_type: Option<String>,
    namespace: String,
    attributes: AttributeMap,
    children: Vec<(String, ResourceEntity)>,
}

impl ResourceEntity {
    /// Construct with the schema's default shell type (its first available
    /// one, when the schema constrains shell types at all).
    pub fn new(
        schema: &'static ResourceSchema,
        shell_name: &str,
        name: &str,
        unique_id: &str,
    ) -> Result<Self, StandardsError> {
        Self::with_shell_type(schema, shell_name, name, unique_id, None)
    }

    /// Construct with an explicit shell type. The type must be one the
    /// schema allows.
    pub fn with_shell_type(
        schema: &'static ResourceSchema,
        shell_name: &str,
        name: &str,
        unique_id: &str,
        shell_type: Option<&str>,
    ) -> Result<Self, StandardsError> {
        if shell_name.is_empty() {
            return Err(StandardsError::FirstGenShell);
        }
        let shell_type = match shell_type {
            Some(given) => {
                if !schema.available_shell_types.is_empty()
                    && !schema.available_shell_types.contains(&given)
                {
                    return Err(StandardsError::UnavailableShellType {
                        given: given.to_string(),
                        available: schema.available_shell_types.join(", "),
                    });
                }
                Some(given.to_string())
            }
            None => schema.available_shell_types.first().map(|s| s.to_string()),
        };
        let namespace = format!("{}.{}.", shell_name, schema.resource_model.replace(' ', ""));
        Ok(Self {
            schema,
            name: truncate_attr(name).to_string(),
            unique_identifier: truncate_attr(unique_id).to_string(),
            shell_name: shell_name.to_string(),
            shell_type,
            namespace,
            attributes: AttributeMap::default(),
            children: Vec::new(),
        })
    }

    pub fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unique_identifier(&self) -> &str {
        &self.unique_identifier
    }

    pub fn shell_type(&self) -> Option<&str> {
        self.shell_type.as_deref()
    }

    /// Full model name as the orchestration API spells it.
    pub fn model_name(&self) -> String {
        format!(
            "{}.{}",
            self.shell_name,
            self.schema.resource_model.replace(' ', "")
        )
    }

    fn prefix(&self, level: AttrLevel) -> String {
        match level {
            AttrLevel::Namespace => self.namespace.clone(),
            AttrLevel::FamilyType => {
                format!("{}.", self.schema.family_type.unwrap_or_default())
            }
            AttrLevel::ShellType => {
                format!("{}.", self.shell_type.as_deref().unwrap_or_default())
            }
        }
    }

    /// The storage key a definition resolves to on this entity.
    pub fn attribute_key(&self, def: &AttributeDef) -> String {
        format!("{}{}", self.prefix(def.level), def.suffix)
    }

    fn lookup(&self, field: &str) -> Result<&'static AttributeDef, StandardsError> {
        self.schema
            .attribute(field)
            .ok_or_else(|| StandardsError::UnknownAttribute {
                field: field.to_string(),
                model: self.schema.resource_model.to_string(),
            })
    }

    /// Set a logical field. `None` falls back to the schema default; with no
    /// default the entry is removed. Values are clamped to the maximum
    /// attribute length.
    pub fn set_attribute(
        &mut self,
        field: &str,
        value: Option<&str>,
    ) -> Result<(), StandardsError> {
        let def = self.lookup(field)?;
        let key = self.attribute_key(def);
        match value.or(def.default) {
            Some(v) => self.attributes.insert(key, truncate_attr(v).to_string()),
            None => self.attributes.remove(&key),
        }
        Ok(())
    }

    /// Read a logical field, falling back to the schema default.
    pub fn get_attribute(&self, field: &str) -> Result<Option<&str>, StandardsError> {
        let def = self.lookup(field)?;
        let key = self.attribute_key(def);
        Ok(self.attributes.get(&key).or(def.default))
    }

    /// The raw attribute dictionary as consumed by the orchestration API.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Attach a child at a relative slot id, e.g. chassis `"1"`, port `"0-1"`.
    pub fn add_sub_resource(&mut self, relative_id: &str, child: ResourceEntity) {
        self.children.push((relative_id.to_string(), child));
    }

    pub fn children(&self) -> &[(String, ResourceEntity)] {
        &self.children
    }

    /// Children whose schema uses the given relative-path template, in
    /// insertion order.
    pub fn children_by_template(&self, template: &str) -> Vec<&ResourceEntity> {
        self.children
            .iter()
            .filter(|(_, child)| child.schema.relative_path_template == template)
            .map(|(_, child)| child)
            .collect()
    }

    /// Relative address of a child slot: template plus relative id.
    fn child_address(relative_id: &str, child: &ResourceEntity) -> String {
        format!("{}{}", child.schema.relative_path_template, relative_id)
    }
}

struct ChildrenMap<'a>(&'a [(String, ResourceEntity)]);

impl Serialize for ChildrenMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (relative_id, child) in self.0 {
            map.serialize_entry(&ResourceEntity::child_address(relative_id, child), child)?;
        }
        map.end()
    }
}

impl Serialize for ResourceEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResourceEntity", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("model", &self.model_name())?;
        state.serialize_field("unique_identifier", &self.unique_identifier)?;
        state.serialize_field("relative_path_template", self.schema.relative_path_template)?;
        state.serialize_field("attributes", &self.attributes)?;
        state.serialize_field("children", &ChildrenMap(&self.children))?;
        state.end()
    }
}
