//! SDN controller schema. Controllers are flat resources; trunk-port
//! attributes hold `address::port` pair lists parsed by
//! [`crate::standards::profile::parse_port_pairs`].

use crate::standards::schema::{AttributeDef, ResourceSchema, SchemaRegistry};

pub static CONTROLLER: ResourceSchema = ResourceSchema {
    name: "Sdn/Controller",
    resource_model: "SDN Controller",
    relative_path_template: "",
    family_type: None,
    available_shell_types: &["CS_SDNController"],
    attributes: &[
        AttributeDef::shell_type("user", "User"),
        AttributeDef::shell_type("password", "Password"),
        AttributeDef::shell_type("port", "Controller TCP Port"),
        AttributeDef::shell_type("scheme", "Scheme"),
        AttributeDef::shell_type("add_trunk_ports", "Enable Full Trunk Ports"),
        AttributeDef::shell_type("remove_trunk_ports", "Disable Full Trunk Ports"),
    ],
};

pub fn register_all(registry: &mut SchemaRegistry) {
    registry.register(&CONTROLLER);
}
