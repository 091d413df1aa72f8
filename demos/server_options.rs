//! Server Options Example
//!
//! Configures servers through functional options and presets. Startup is
//! reported through `tracing`, so a subscriber is installed first.
//!
//! Run with: cargo run --example server_options

use std::time::Duration;

use strainer::server::*;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Server Options Example ===\n");

    let configs: Vec<(&str, Vec<ServerOption>)> = vec![
        ("Defaults", vec![]),
        (
            "Custom",
            vec![
                with_host("api.example.com"),
                with_port(443),
                with_tls("/path/to/cert.pem", "/path/to/key.pem"),
                with_max_connections(500),
                with_timeout(Duration::from_secs(45)),
                with_middleware(["cors", "auth", "ratelimit"]),
            ],
        ),
        ("Production", vec![production(), with_port(443)]),
        ("Development", vec![development()]),
    ];

    for (label, options) in configs {
        match Server::new(options) {
            Ok(server) => {
                println!("{}: {}", label, server);
                server.start();
                println!();
            }
            Err(e) => println!("{}: {}\n", label, e),
        }
    }

    println!("--- Invalid Options ---\n");

    let invalid: Vec<(&str, Vec<ServerOption>)> = vec![
        ("port 99999", vec![with_port(99999)]),
        ("empty host", vec![with_host("")]),
        ("zero connections", vec![with_max_connections(0)]),
        ("TLS without files", vec![with_tls("", "")]),
    ];

    for (label, options) in invalid {
        if let Err(e) = Server::new(options) {
            println!("{}: {}", label, e);
        }
    }
}
