//! Declarative resource-schema descriptions.
//!
//! Instead of a type per device-resource kind, each kind is one
//! [`ResourceSchema`] value: a list of attribute definitions interpreted by
//! the generic [`crate::standards::ResourceEntity`]. Family modules under
//! [`crate::standards::families`] declare the schemas and register them.

use std::collections::HashMap;

/// Which prefix an attribute's storage key is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrLevel {
    /// `{shell_name}.{resource_model}.`, the per-resource namespace.
    Namespace,
    /// `{family_type}.`, shared across every shell of the family.
    FamilyType,
    /// `{shell_type}.`, the shell type chosen at construction.
    ShellType,
}

/// One logical field of a resource schema.
#[derive(Debug, Clone, Copy)]
pub struct AttributeDef {
    /// Logical field name used by calling code, e.g. `"mac_address"`.
    pub field: &'static str,
    /// Storage-key suffix: the attribute name the orchestration API knows,
    /// e.g. `"MAC Address"`.
    pub suffix: &'static str,
    pub level: AttrLevel,
    pub default: Option<&'static str>,
}

impl AttributeDef {
    pub const fn namespace(field: &'static str, suffix: &'static str) -> Self {
        Self {
            field,
            suffix,
            level: AttrLevel::Namespace,
            default: None,
        }
    }

    pub const fn family_type(field: &'static str, suffix: &'static str) -> Self {
        Self {
            field,
            suffix,
            level: AttrLevel::FamilyType,
            default: None,
        }
    }

    pub const fn shell_type(field: &'static str, suffix: &'static str) -> Self {
        Self {
            field,
            suffix,
            level: AttrLevel::ShellType,
            default: None,
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// A device-resource kind: identity, inventory-tree position, and the
/// attributes it carries.
#[derive(Debug)]
pub struct ResourceSchema {
    /// Registry name, e.g. `"Networking/GenericPort"`.
    pub name: &'static str,
    /// Resource-model name as the orchestration API spells it; spaces are
    /// stripped when the namespace key prefix is built.
    pub resource_model: &'static str,
    /// Position template in the inventory tree: `""` root, `"CH"` chassis,
    /// `"M"` module, `"SM"` sub-module, `"P"` port, `"PP"` power port,
    /// `"PC"` port channel.
    pub relative_path_template: &'static str,
    /// Family type used for [`AttrLevel::FamilyType`] keys.
    pub family_type: Option<&'static str>,
    /// Shell types an entity of this kind may be constructed with; empty
    /// means unconstrained. The first entry is the default.
    pub available_shell_types: &'static [&'static str],
    pub attributes: &'static [AttributeDef],
}

impl ResourceSchema {
    pub fn attribute(&self, field: &str) -> Option<&'static AttributeDef> {
        self.attributes.iter().find(|def| def.field == field)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.attributes.iter().map(|def| def.field).collect()
    }
}

/// Name-indexed store of every known resource schema.
pub struct SchemaRegistry {
    schemas: Vec<&'static ResourceSchema>,
    index: HashMap<&'static str, usize>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            schemas: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build the default registry with every built-in device family.
    pub fn default_registry() -> Self {
        let mut registry = Self::new();
        super::families::networking::register_all(&mut registry);
        super::families::firewall::register_all(&mut registry);
        super::families::sdn::register_all(&mut registry);
        super::families::traffic::register_all(&mut registry);
        registry
    }

    pub fn register(&mut self, schema: &'static ResourceSchema) {
        let idx = self.schemas.len();
        self.schemas.push(schema);
        self.index.insert(schema.name, idx);
    }

    pub fn schemas(&self) -> &[&'static ResourceSchema] {
        &self.schemas
    }

    pub fn get(&self, name: &str) -> Option<&'static ResourceSchema> {
        self.index.get(name).map(|&idx| self.schemas[idx])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.schemas.iter().map(|s| s.name).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
