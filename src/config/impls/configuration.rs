use std::fs::File;
use std::io::{Read, Write};
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::edge_node_config::EdgeNodeConfig;
use crate::config::structs::health_check_config::HealthCheckConfig;
use crate::config::structs::region_config::RegionConfig;
use crate::config::structs::routing_config::RoutingConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            cache: CacheConfig::default(),
            routing: RoutingConfig {
                latency_weight: 0.7,
                load_weight: 0.3,
                default_region: String::from("eu-central"),
            },
            health: HealthCheckConfig::default(),
            regions: vec![
                RegionConfig {
                    id: String::from("eu-central"),
                    name: String::from("Istanbul"),
                    country: String::from("TR"),
                    latitude: 41.0,
                    longitude: 29.0,
                    cache_capacity: 10000,
                    edge_nodes: vec![
                        EdgeNodeConfig {
                            id: String::from("eu-central-1"),
                            hostname: String::from("127.0.0.1:7201"),
                            capacity: 5000,
                        },
                        EdgeNodeConfig {
                            id: String::from("eu-central-2"),
                            hostname: String::from("127.0.0.1:7202"),
                            capacity: 5000,
                        },
                    ],
                },
                RegionConfig {
                    id: String::from("eu-west"),
                    name: String::from("London"),
                    country: String::from("GB"),
                    latitude: 51.5,
                    longitude: -0.1,
                    cache_capacity: 10000,
                    edge_nodes: vec![
                        EdgeNodeConfig {
                            id: String::from("eu-west-1"),
                            hostname: String::from("127.0.0.1:7301"),
                            capacity: 5000,
                        },
                        EdgeNodeConfig {
                            id: String::from("eu-west-2"),
                            hostname: String::from("127.0.0.1:7302"),
                            capacity: 5000,
                        },
                    ],
                },
            ],
        }
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let mut data = String::new();
        match File::open(path) {
            Ok(mut file) => {
                if let Err(error) = file.read_to_string(&mut data) {
                    return Err(ConfigurationError::IOError(error));
                }
            }
            Err(error) => {
                return Err(ConfigurationError::IOError(error));
            }
        }
        match toml::from_str(&data) {
            Ok(config) => Ok(config),
            Err(error) => Err(ConfigurationError::ParseError(error)),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                if let Err(error) = file.write_all(data.as_bytes()) {
                    return Err(ConfigurationError::IOError(error));
                }
                Ok(())
            }
            Err(error) => Err(ConfigurationError::IOError(error)),
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config;
        match Configuration::load_file(path) {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(_) => {
                        return Err(CustomError::new("could not serialize default configuration"));
                    }
                };
                let save_file = Configuration::save_file(path, config_toml);
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config);
        Ok(config)
    }

    pub fn validate(config: &Configuration) {
        if config.regions.is_empty() {
            panic!("[VALIDATE] At least one region must be configured");
        }
        if !(config.routing.latency_weight.is_finite() && config.routing.latency_weight >= 0.0) {
            panic!("[VALIDATE] routing.latency_weight must be a non-negative number");
        }
        if !(config.routing.load_weight.is_finite() && config.routing.load_weight >= 0.0) {
            panic!("[VALIDATE] routing.load_weight must be a non-negative number");
        }
        if config.routing.latency_weight + config.routing.load_weight == 0.0 {
            panic!("[VALIDATE] routing weights must not both be zero");
        }
        if config.health.check_interval == 0 {
            panic!("[VALIDATE] health.check_interval must be at least 1 second");
        }
        if config.health.failure_threshold == 0 {
            panic!("[VALIDATE] health.failure_threshold must be at least 1");
        }
        let mut seen_nodes: Vec<&str> = Vec::new();
        for region in &config.regions {
            if region.id.is_empty() {
                panic!("[VALIDATE] Region id must not be empty");
            }
            if !(-90.0..=90.0).contains(&region.latitude) || !(-180.0..=180.0).contains(&region.longitude) {
                panic!("[VALIDATE] Region '{}' has an out-of-range centroid", region.id);
            }
            if region.edge_nodes.is_empty() {
                panic!("[VALIDATE] Region '{}' has no edge nodes", region.id);
            }
            for node in &region.edge_nodes {
                if node.id.is_empty() || node.hostname.is_empty() {
                    panic!("[VALIDATE] Region '{}' contains a node with empty id or hostname", region.id);
                }
                if node.capacity == 0 {
                    panic!("[VALIDATE] Node '{}' must have a non-zero capacity", node.id);
                }
                if seen_nodes.contains(&node.id.as_str()) {
                    panic!("[VALIDATE] Duplicate node id '{}'", node.id);
                }
                seen_nodes.push(node.id.as_str());
            }
        }
    }
}
