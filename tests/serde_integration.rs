//! Serialization of domain records and server configuration

#![cfg(feature = "serde")]

use std::time::Duration;

use strainer::catalog::{sample_products, Product};
use strainer::computer::ComputerBuilder;
use strainer::error::{ConfigError, OptionError};
use strainer::server::{Server, ServerConfig};

#[test]
fn test_products_serialize() {
    let products = sample_products();
    let json = serde_json::to_string(&products).unwrap();
    let back: Vec<Product> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, products);
}

#[test]
fn test_computer_fields() {
    let pc = ComputerBuilder::new()
        .cpu("AMD EPYC")
        .ram(256)
        .storage(10_000)
        .os("Ubuntu Server")
        .build()
        .unwrap();
    let value = serde_json::to_value(&pc).unwrap();
    assert_eq!(value["cpu"], "AMD EPYC");
    assert_eq!(value["gpu"], serde_json::Value::Null);
}

#[test]
fn test_server_from_partial_config() {
    let config: ServerConfig =
        serde_json::from_str(r#"{ "host": "0.0.0.0", "port": 9000 }"#).unwrap();
    let server = Server::from_config(config).unwrap();
    assert_eq!(server.host(), "0.0.0.0");
    assert_eq!(server.port(), 9000);
    assert_eq!(server.timeout(), Duration::from_secs(30));
    assert_eq!(server.max_connections(), 100);
}

#[test]
fn test_server_from_invalid_config() {
    let config: ServerConfig = serde_json::from_str(r#"{ "max_connections": 0 }"#).unwrap();
    assert_eq!(
        Server::from_config(config).unwrap_err(),
        ConfigError::Invalid(OptionError::TooFewConnections(0))
    );
}
