//! Computer Builder Example
//!
//! Assembles machines step by step and shows how validation failures are
//! reported.
//!
//! Run with: cargo run --example computer_builder

use strainer::computer::{ComputerBuilder, MAX_RAM_GB};

fn main() {
    println!("=== Computer Builder Example ===\n");

    let gaming = ComputerBuilder::new()
        .cpu("Intel Core i9")
        .ram(32)
        .storage(1000)
        .gpu("NVIDIA RTX 4090")
        .os("Windows 11");

    let office = ComputerBuilder::new()
        .cpu("Intel Core i5")
        .ram(16)
        .storage(512)
        .os("Windows 11");

    let server = ComputerBuilder::new()
        .cpu("AMD EPYC")
        .ram(256)
        .storage(10_000)
        .os("Ubuntu Server");

    for (label, builder) in [("Gaming", gaming), ("Office", office), ("Server", server)] {
        match builder.build() {
            Ok(pc) => println!("{} PC:\n{}\n", label, pc),
            Err(e) => println!("{} PC failed: {}\n", label, e),
        }
    }

    println!("--- Invalid Configurations ---\n");

    let invalid = [
        ("no RAM", ComputerBuilder::new().cpu("Intel Core i5").storage(256).os("Linux")),
        (
            "too much RAM",
            ComputerBuilder::new()
                .cpu("Intel Core i5")
                .ram(MAX_RAM_GB * 2)
                .storage(256)
                .os("Linux"),
        ),
        ("no OS", ComputerBuilder::new().cpu("Intel Core i5").ram(8).storage(256)),
    ];

    for (label, builder) in invalid {
        if let Err(e) = builder.build() {
            println!("{}: {}", label, e);
        }
    }
}
