//! Firewall inventory schemas. Chassis, module, and port kinds are shared
//! with the networking family; only the root resource differs.

use crate::standards::schema::{AttributeDef, ResourceSchema, SchemaRegistry};

pub static GENERIC_RESOURCE: ResourceSchema = ResourceSchema {
    name: "Firewall/GenericResource",
    resource_model: "Generic Resource",
    relative_path_template: "",
    family_type: Some("CS_Firewall"),
    available_shell_types: &["CS_Firewall"],
    attributes: &[
        AttributeDef::shell_type("contact_name", "Contact Name"),
        AttributeDef::shell_type("location", "Location"),
        AttributeDef::shell_type("model", "Model"),
        AttributeDef::family_type("model_name", "Model Name"),
        AttributeDef::shell_type("os_version", "OS Version"),
        AttributeDef::shell_type("system_name", "System Name"),
        AttributeDef::shell_type("vendor", "Vendor"),
    ],
};

pub fn register_all(registry: &mut SchemaRegistry) {
    registry.register(&GENERIC_RESOURCE);
}
