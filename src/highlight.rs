use inksac::prelude::*;

/// How a slice of an input line is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Command,
    Word,
    Operator,
    Space,
}

/// Cuts a line into displayable segments the way the tokenizer splits it.
///
/// Concatenating the slices gives back the input unchanged.
pub fn segments(input: &str) -> Vec<(Segment, &str)> {
    let mut out = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut expect_command = true;

    for (i, c) in input.char_indices() {
        let kind = match c {
            ' ' | '\t' | '\n' => Segment::Space,
            '>' | '&' => Segment::Operator,
            _ => {
                word_start.get_or_insert(i);
                continue;
            }
        };

        if let Some(start) = word_start.take() {
            let word = if expect_command { Segment::Command } else { Segment::Word };
            out.push((word, &input[start..i]));
            expect_command = false;
        }
        if kind == Segment::Operator {
            expect_command = c == '&';
        }
        out.push((kind, &input[i..i + c.len_utf8()]));
    }

    if let Some(start) = word_start {
        let word = if expect_command { Segment::Command } else { Segment::Word };
        out.push((word, &input[start..]));
    }

    out
}

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Command words in bold cyan, `>` and `&` in yellow, the rest untouched.
    pub fn highlight_line(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        segments(input)
            .into_iter()
            .map(|(kind, text)| match kind {
                Segment::Command => {
                    let style = Style::builder().foreground(Color::Cyan).bold().build();
                    text.style(style).to_string()
                }
                Segment::Operator => {
                    let style = Style::builder().foreground(Color::Yellow).build();
                    text.style(style).to_string()
                }
                Segment::Word | Segment::Space => text.to_string(),
            })
            .collect()
    }
}
