//! Usage text rendering.
//!
//! One entry per canonical flag, ordered by canonical name, with every
//! spelling grouped on one line: short spellings first (`-x`), then
//! long ones (`--xxx`), followed by the value-kind word for flags that
//! take a value. Short single-spelling entries keep their description
//! on the same line; everything else wraps to an indented second line.

use crate::Flag;

pub(crate) fn render(flags: &[Flag]) -> String {
    let mut order: Vec<&Flag> = flags.iter().collect();
    order.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    for flag in order {
        let mut names: Vec<String> = Vec::new();
        for c in &flag.shorts {
            names.push(format!("-{c}"));
        }
        for long in &flag.longs {
            names.push(format!("--{long}"));
        }

        let mut line = String::from("  ");
        line.push_str(&names.join(", "));
        let word = flag.value.type_word();
        if !word.is_empty() {
            line.push(' ');
            line.push_str(word);
        }

        out.push_str(&line);
        // A lone short boolean ("  -d") fits its description on the
        // same line; anything wider wraps.
        if line.len() <= 4 {
            out.push('\t');
        } else {
            out.push_str("\n    \t");
        }
        out.push_str(&flag.usage);
        if !flag.default.is_zero() {
            out.push_str(&format!(" (default {})", flag.default));
        }
        out.push('\n');
    }
    out
}
