//! Human-readable callouts for instructions.
//!
//! `Abbreviated` uses the one-letter codes (`MT ↔ LC - TS,CT,CS`); `Verbose`
//! spells out sides and symbols (`Middle Triangle ↔ Left Circle - TS,CT,CS`).
//! The resulting state is always printed in codes.

use crate::state::{Dissect, Instruction};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalloutStyle {
    Abbreviated,
    #[default]
    Verbose,
}

pub fn dissect_label(dissect: Dissect, style: CalloutStyle) -> String {
    match style {
        CalloutStyle::Abbreviated => format!("{}{}", dissect.side.code(), dissect.shape.code()),
        CalloutStyle::Verbose => format!("{} {}", dissect.side.name(), dissect.shape.name()),
    }
}

/// `<a> ↔ <b> - <state>`
pub fn instruction_line(instruction: &Instruction, style: CalloutStyle) -> String {
    format!(
        "{} ↔ {} - {}",
        dissect_label(instruction.swap.a, style),
        dissect_label(instruction.swap.b, style),
        instruction.state
    )
}

/// All swaps on one line for pasting into game chat: `MT LC, MT RS`.
pub fn chat_line(instructions: &[Instruction], style: CalloutStyle) -> String {
    instructions
        .iter()
        .map(|ins| {
            format!(
                "{} {}",
                dissect_label(ins.swap.a, style),
                dissect_label(ins.swap.b, style)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
