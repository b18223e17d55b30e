use anyhow::{Context, Result};
use dissection::api::{chat_line, instruction_line, CalloutStyle, Outcome};
use dissection::{InsideState, OutsideState};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Lines shown to the user for one puzzle.
pub fn render(outcome: &Outcome, style: CalloutStyle) -> Vec<String> {
    match outcome {
        Outcome::Invalid(reason) => vec![format!("Invalid state: {reason}")],
        Outcome::AlreadySolved => vec!["Already solved".to_string()],
        Outcome::Steps(steps) => {
            let mut lines: Vec<String> =
                steps.iter().map(|s| instruction_line(s, style)).collect();
            lines.push(format!("chat: {}", chat_line(steps, style)));
            lines
        }
    }
}

/// JSON document describing one puzzle and its solution.
pub fn to_json(
    inside: InsideState,
    outside: OutsideState,
    outcome: &Outcome,
    style: CalloutStyle,
) -> Value {
    let (status, reason) = match outcome {
        Outcome::Invalid(reason) => ("invalid", Some(reason.to_string())),
        Outcome::AlreadySolved => ("already_solved", None),
        Outcome::Steps(_) => ("solved", None),
    };
    let steps = outcome.instructions();
    let instructions: Vec<Value> = steps
        .iter()
        .map(|s| {
            json!({
                "a": s.swap.a.to_string(),
                "b": s.swap.b.to_string(),
                "state": s.state.to_string(),
                "callout": instruction_line(s, style),
            })
        })
        .collect();
    json!({
        "version": dissection::VERSION,
        "inside": inside.to_string(),
        "outside": outside.to_string(),
        "status": status,
        "reason": reason,
        "instructions": instructions,
        "chat": chat_line(steps, style),
    })
}

/// Write `doc` as pretty JSON, creating parent directories as needed.
pub fn write_json<P: AsRef<Path>>(path: P, doc: &Value) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
