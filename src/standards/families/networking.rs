//! Switch/router/wireless-controller inventory schemas.

use crate::standards::schema::{AttributeDef, ResourceSchema, SchemaRegistry};

pub static GENERIC_RESOURCE: ResourceSchema = ResourceSchema {
    name: "Networking/GenericResource",
    resource_model: "Generic Resource",
    relative_path_template: "",
    family_type: Some("CS_Switch"),
    available_shell_types: &["CS_Switch", "CS_Router", "CS_WirelessController"],
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

pub static GENERIC_CHASSIS: ResourceSchema = ResourceSchema {
    name: "Networking/GenericChassis",
    resource_model: "Generic Chassis",
    relative_path_template: "CH",
    family_type: None,
    available_shell_types: &[],
    attributes: &[
        AttributeDef::namespace("model", "Model"),
        AttributeDef::namespace("serial_number", "Serial Number"),
    ],
};

pub static GENERIC_MODULE: ResourceSchema = ResourceSchema {
    name: "Networking/GenericModule",
    resource_model: "Generic Module",
    relative_path_template: "M",
    family_type: None,
    available_shell_types: &[],
    attributes: &[
        AttributeDef::namespace("model", "Model"),
        AttributeDef::namespace("serial_number", "Serial Number"),
        AttributeDef::namespace("version", "Version"),
    ],
};

pub static GENERIC_SUB_MODULE: ResourceSchema = ResourceSchema {
    name: "Networking/GenericSubModule",
    resource_model: "Generic Sub Module",
    relative_path_template: "SM",
    family_type: None,
    available_shell_types: &[],
    attributes: &[
        AttributeDef::namespace("model", "Model"),
        AttributeDef::namespace("serial_number", "Serial Number"),
        AttributeDef::namespace("version", "Version"),
    ],
};

pub static GENERIC_PORT: ResourceSchema = ResourceSchema {
    name: "Networking/GenericPort",
    resource_model: "Generic Port",
    relative_path_template: "P",
    family_type: None,
    available_shell_types: &[],
    attributes: &[
        AttributeDef::namespace("adjacent", "Adjacent"),
        AttributeDef::namespace("auto_negotiation", "Auto Negotiation"),
        AttributeDef::namespace("bandwidth", "Bandwidth").with_default("0"),
        AttributeDef::namespace("duplex", "Duplex").with_default("Half"),
        AttributeDef::namespace("ipv4_address", "IPv4 Address"),
        AttributeDef::namespace("ipv6_address", "IPv6 Address"),
        AttributeDef::namespace("l2_protocol_type", "L2 Protocol Type"),
        AttributeDef::namespace("mac_address", "MAC Address"),
        AttributeDef::namespace("mtu", "MTU").with_default("0"),
        AttributeDef::namespace("port_description", "Port Description"),
    ],
};

pub static GENERIC_POWER_PORT: ResourceSchema = ResourceSchema {
    name: "Networking/GenericPowerPort",
    resource_model: "Generic Power Port",
    relative_path_template: "PP",
    family_type: None,
    available_shell_types: &[],
    attributes: &[
        AttributeDef::namespace("model", "Model"),
        AttributeDef::namespace("port_description", "Port Description"),
        AttributeDef::namespace("serial_number", "Serial Number"),
        AttributeDef::namespace("version", "Version"),
    ],
};

pub static GENERIC_PORT_CHANNEL: ResourceSchema = ResourceSchema {
    name: "Networking/GenericPortChannel",
    resource_model: "Generic Port Channel",
    relative_path_template: "PC",
    family_type: None,
    available_shell_types: &[],
    attributes: &[
        AttributeDef::namespace("associated_ports", "Associated Ports"),
        AttributeDef::namespace("ipv4_address", "IPv4 Address"),
        AttributeDef::namespace("ipv6_address", "IPv6 Address"),
        AttributeDef::namespace("port_description", "Port Description"),
    ],
};

pub fn register_all(registry: &mut SchemaRegistry) {
    registry.register(&GENERIC_RESOURCE);
    registry.register(&GENERIC_CHASSIS);
    registry.register(&GENERIC_MODULE);
    registry.register(&GENERIC_SUB_MODULE);
    registry.register(&GENERIC_PORT);
    registry.register(&GENERIC_POWER_PORT);
    registry.register(&GENERIC_PORT_CHANNEL);
}
