// Pattern 1: Bridge - Abstraction/Implementation Split
// Run with: cargo run --bin p1_bridge

use patterns_catalog::bridge::{Circle, RasterRenderer, VectorRenderer};

fn main() {
    println!("Pattern 1: Bridge");
    println!("=================\n");

    println!("=== Same Abstraction, Two Implementations ===");
    let circle = Circle::new(5.0, Box::new(VectorRenderer));
    println!("{}", circle.draw());
    let circle = Circle::new(5.0, Box::new(RasterRenderer));
    println!("{}", circle.draw());
    println!();

    println!("=== Extending the Abstraction Only ===");
    let mut circle = Circle::new(2.0, Box::new(VectorRenderer));
    circle.resize(3.0);
    println!("{}", circle.draw());
}
