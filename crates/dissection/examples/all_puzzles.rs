//! Print the full solution table.
//!
//! One line per valid puzzle: inside, outside, number of swaps, and the
//! abbreviated chat string. Useful for eyeballing the selector order against
//! known in-game solves.

use dissection::api::{chat_line, solve, valid_pairs, CalloutStyle};

fn main() {
    let mut max_steps = 0;
    for (inside, outside) in valid_pairs() {
        let steps = solve(inside, outside).expect("valid puzzles always solve");
        max_steps = max_steps.max(steps.len());
        println!(
            "inside={inside} outside={outside} swaps={} chat=\"{}\"",
            steps.len(),
            chat_line(&steps, CalloutStyle::Abbreviated)
        );
    }
    println!("max_swaps={max_steps}");
}
