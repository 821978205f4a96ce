// Pattern 2: Memento - State History with Opaque Snapshots
// Run with: cargo run --bin p2_memento
// Set RUST_LOG=debug to see the history's own records.

use std::cell::RefCell;

use patterns_catalog::memento::{History, StateHolder, StateValue};

fn main() {
    env_logger::init();

    println!("Pattern 2: Memento");
    println!("==================\n");

    let holder = RefCell::new(StateHolder::new(StateValue::Text(
        "initial draft".to_string(),
    )));
    let mut history = History::new(&holder);

    println!("=== Capturing States ===");
    println!("state: {}", holder.borrow().state());
    history.backup();
    holder.borrow_mut().mutate();
    println!("state: {}", holder.borrow().state());
    history.backup();
    holder.borrow_mut().mutate();
    println!("state: {}", holder.borrow().state());
    println!();

    println!("=== Snapshots on Record ===");
    for label in history.labels() {
        println!("  {}", label);
    }
    println!();

    println!("=== Rolling Back ===");
    while history
        .undo()
        .expect("holder and snapshots share one state kind")
    {
        println!("state: {}", holder.borrow().state());
    }
    println!("history is empty, a further undo changes nothing");
}
