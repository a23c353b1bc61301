//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow loaded from
//! configuration, with handlers attached in code.
//!
//! Key concepts:
//! - Blueprint shape declared as JSON
//! - Handlers perform side effects (audit logging)
//! - Business rules checked by the caller before moving
//! - Terminal state detected with has_next()
//!
//! Run with: cargo run --example document_workflow

use fsm_blueprint::{Blueprint, Machine};
use std::error::Error;
use std::sync::{Arc, Mutex};

const WORKFLOW: &str = r#"{
    "start": "Draft",
    "transitions": [
        { "from": "Draft", "to": "Review" },
        { "from": "Review", "to": "Draft" },
        { "from": "Review", "to": "Approved" },
        { "from": "Approved", "to": "Published" }
    ]
}"#;

// Document entity
struct Document {
    id: u64,
    word_count: usize,
}

type AuditLog = Arc<Mutex<Vec<String>>>;

fn audit(log: &AuditLog, doc_id: u64) -> impl Fn(&mut Machine<String>) {
    let log = Arc::clone(log);
    move |machine| {
        let entry = format!("document {doc_id} entered {}", machine.current_state());
        println!("  [Audit] {entry}");
        log.lock().unwrap().push(entry);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Document Approval Workflow ===\n");

    let doc = Document {
        id: 123,
        word_count: 250,
    };
    let log = AuditLog::default();

    let mut blueprint: Blueprint<String> = Blueprint::from_json(WORKFLOW)?;
    for (from, to) in [
        ("Draft", "Review"),
        ("Review", "Approved"),
        ("Approved", "Published"),
    ] {
        blueprint.on(&from.to_string(), &to.to_string(), audit(&log, doc.id))?;
    }
    println!("Transitions: {}\n", blueprint.describe());

    let mut machine = blueprint.machine()?;
    println!("Processing document {} ({} words)", doc.id, doc.word_count);

    if doc.word_count >= 100 {
        machine.goto("Review".to_string())?;
    }
    if doc.word_count <= 5000 {
        machine.goto("Approved".to_string())?;
    }

    if let Err(err) = machine.goto("Draft".to_string()) {
        println!("  cannot reopen: {err}");
    }

    machine.goto("Published".to_string())?;
    println!(
        "\nFinal state: {} (terminal: {})",
        machine.current_state(),
        !machine.has_next()
    );
    println!("Audit entries: {}", log.lock().unwrap().len());

    println!("\n=== Example Complete ===");
    Ok(())
}
