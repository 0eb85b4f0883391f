//! Report output - plaintext and JSON.

use serde_json::json;

use crate::builder::AnalysisResult;

/// Prints the summary and rename instructions in plain text.
pub fn print_plain(result: &AnalysisResult) {
    println!("{}", result.summary());

    if result.has_unused() {
        println!();
        println!("rename commands:");
        for command in result.commands() {
            println!("{}", command);
        }
    }
}

/// Prints the analysis result in JSON format.
///
/// Falls back to the summary line if serialization fails (should never
/// happen with these types, but all cases are handled).
pub fn print_json(result: &AnalysisResult) {
    let value = json!({
        "target": result.target,
        "total_candidates": result.total_candidates,
        "unused_count": result.unused_count(),
        "summary": result.summary(),
        "unused": result.unused,
        "used": result.used,
    });

    match serde_json::to_string_pretty(&value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            // Fallback: output in a simpler format
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{}", result.summary());
        }
    }
}
