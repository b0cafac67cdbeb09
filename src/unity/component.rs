// src/unity/component.rs
use clap::ValueEnum;
use std::fmt;

/// Component categories exposed by the Unity REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ComponentType {
    Battery,
    Dae,
    Disk,
    Dpe,
    #[value(name = "ethernetport")]
    EthernetPort,
    Fan,
    #[value(name = "fcport")]
    FcPort,
    #[value(name = "iomodule")]
    IoModule,
    Lcc,
    #[value(name = "memorymodule")]
    MemoryModule,
    #[value(name = "powersupply")]
    PowerSupply,
    #[value(name = "sasport")]
    SasPort,
    Ssc,
    Ssd,
    #[value(name = "storageprocessor")]
    StorageProcessor,
    System,
    #[value(name = "uncommittedport")]
    UncommittedPort,
}

impl ComponentType {
    pub const ALL: [ComponentType; 17] = [
        ComponentType::Battery,
        ComponentType::Dae,
        ComponentType::Disk,
        ComponentType::Dpe,
        ComponentType::EthernetPort,
        ComponentType::Fan,
        ComponentType::FcPort,
        ComponentType::IoModule,
        ComponentType::Lcc,
        ComponentType::MemoryModule,
        ComponentType::PowerSupply,
        ComponentType::SasPort,
        ComponentType::Ssc,
        ComponentType::Ssd,
        ComponentType::StorageProcessor,
        ComponentType::System,
        ComponentType::UncommittedPort,
    ];

    /// Resource type name as used in `/api/types/<name>/instances`.
    pub const fn resource_type(self) -> &'static str {
        match self {
            ComponentType::Battery => "battery",
            ComponentType::Dae => "dae",
            ComponentType::Disk => "disk",
            ComponentType::Dpe => "dpe",
            ComponentType::EthernetPort => "ethernetPort",
            ComponentType::Fan => "fan",
            ComponentType::FcPort => "fcPort",
            ComponentType::IoModule => "ioModule",
            ComponentType::Lcc => "lcc",
            ComponentType::MemoryModule => "memoryModule",
            ComponentType::PowerSupply => "powerSupply",
            ComponentType::SasPort => "sasPort",
            ComponentType::Ssc => "ssc",
            ComponentType::Ssd => "ssd",
            ComponentType::StorageProcessor => "storageProcessor",
            ComponentType::System => "system",
            ComponentType::UncommittedPort => "uncommittedPort",
        }
    }

    /// Only the system health endpoint is fetched with retries.
    pub fn is_retried(self) -> bool {
        self == ComponentType::System
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_names_are_lowercase_resource_types() {
        for component in ComponentType::ALL {
            let value = component.to_possible_value().unwrap();
            assert_eq!(value.get_name(), component.resource_type().to_lowercase());
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        let parsed = ComponentType::from_str("fcPort", true).unwrap();
        assert_eq!(parsed, ComponentType::FcPort);
        assert_eq!(parsed.resource_type(), "fcPort");
    }

    #[test]
    fn test_only_system_is_retried() {
        let retried: Vec<_> = ComponentType::ALL
            .into_iter()
            .filter(|c| c.is_retried())
            .collect();
        assert_eq!(retried, vec![ComponentType::System]);
    }
}
