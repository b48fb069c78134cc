//! Virtual traffic-generator inventory schemas.

use crate::standards::schema::{AttributeDef, ResourceSchema, SchemaRegistry};

pub static VIRTUAL_CHASSIS: ResourceSchema = ResourceSchema {
    name: "Traffic/VirtualChassis",
    resource_model: "VirtualTrafficGeneratorChassis",
    relative_path_template: "CH",
    family_type: Some("CS_VirtualTrafficGeneratorChassis"),
    available_shell_types: &[
        "CS_VirtualTrafficGeneratorChassis",
        "CS_VirtualTrafficGeneratorPort",
    ],
    attributes: &[],
};

pub static VIRTUAL_MODULE: ResourceSchema = ResourceSchema {
    name: "Traffic/VirtualModule",
    resource_model: "Virtual Traffic Generator Module",
    relative_path_template: "M",
    family_type: Some("CS_VirtualTrafficGeneratorModule"),
    available_shell_types: &[],
    attributes: &[AttributeDef::namespace("device_model", "Model")],
};

pub static VIRTUAL_PORT: ResourceSchema = ResourceSchema {
    name: "Traffic/VirtualPort",
    resource_model: "VirtualTrafficGeneratorPort",
    relative_path_template: "P",
    family_type: Some("CS_VirtualTrafficGeneratorPort"),
    available_shell_types: &[
        "CS_VirtualTrafficGeneratorChassis",
        "CS_VirtualTrafficGeneratorPort",
    ],
    attributes: &[
        AttributeDef::family_type("logical_name", "Logical Name"),
        AttributeDef::family_type("mac_address", "MAC Address"),
        AttributeDef::family_type("requested_vnic_name", "Requested vNIC Name"),
    ],
};

pub fn register_all(registry: &mut SchemaRegistry) {
    registry.register(&VIRTUAL_CHASSIS);
    registry.register(&VIRTUAL_MODULE);
    registry.register(&VIRTUAL_PORT);
}
