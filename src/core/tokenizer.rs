//! Splits raw input lines into tokens and tokens into commands.

/// Redirects a command's standard output to the file named after it.
pub const REDIRECT: &str = ">";
/// Separates commands that run concurrently on the same line.
pub const BACKGROUND: &str = "&";

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '>' | '&')
}

/// Tokenizes a single line.
///
/// `>` and `&` always come out as their own tokens, whatever surrounds them.
/// Every other maximal run of non-delimiter characters is one token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if !is_delimiter(c) {
            start.get_or_insert(i);
            continue;
        }

        if let Some(begin) = start.take() {
            tokens.push(line[begin..i].to_string());
        }

        match c {
            '>' => tokens.push(REDIRECT.to_string()),
            '&' => tokens.push(BACKGROUND.to_string()),
            _ => {}
        }
    }

    if let Some(begin) = start {
        tokens.push(line[begin..].to_string());
    }

    tokens
}

/// Splits a line's tokens into commands at every `&`.
///
/// The separator is consumed. Empty segments are dropped, so `a & & b &`
/// yields two commands.
pub fn split_commands(tokens: &[String]) -> Vec<Vec<String>> {
    tokens
        .split(|token| token == BACKGROUND)
        .filter(|segment| !segment.is_empty())
        .map(<[String]>::to_vec)
        .collect()
}
