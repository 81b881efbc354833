//! Best-effort LaTeX to readable Unicode conversion.
//!
//! The entry point is [`convert_latex`]; it never fails. Unknown commands
//! come back verbatim, unmatched delimiters consume what is there, and the
//! recursion over brace groups is depth-bounded, so the worst case for any
//! input is the input itself.

use std::sync::Mutex;

use lru::LruCache;
use once_cell::sync::Lazy;

use crate::symbols::{
    CombiningPolicy, LATEX_SYMBOLS, STYLE_COMMANDS, SUBSCRIPTS, SUPERSCRIPTS, combining_mark,
    fraction_glyph, negated_symbol, style_table,
};

/// Brace groups and command arguments past this nesting depth are passed
/// through unconverted instead of recursing further.
const MAX_DEPTH: usize = 64;

static CONVERT_CACHE: Lazy<Mutex<LruCache<String, String>>> =
    Lazy::new(|| Mutex::new(LruCache::new(100.try_into().unwrap())));

/// Convert a LaTeX snippet to a Unicode approximation.
///
/// Total function: any construct the engine cannot interpret is returned
/// verbatim. Results are memoized in a small process-wide cache since chat
/// documents tend to repeat formulas.
pub fn convert_latex(source: &str) -> String {
    if let Some(hit) = CONVERT_CACHE.lock().unwrap().get(source) {
        return hit.clone();
    }
    let converted = parse(source, 0);
    CONVERT_CACHE
        .lock()
        .unwrap()
        .put(source.to_string(), converted.clone());
    converted
}

/// Loose gate used before running the engine over a candidate span: long
/// enough, and mentioning at least one known command or symbol.
pub(crate) fn contains_latex_command(content: &str) -> bool {
    if content.chars().count() < 5 {
        return false;
    }
    if ["\\frac", "\\sqrt", "\\begin"]
        .iter()
        .any(|needle| content.contains(needle))
    {
        return true;
    }
    if LATEX_SYMBOLS.keys().any(|key| content.contains(key)) {
        return true;
    }
    if crate::symbols::NOT_PAIRS
        .iter()
        .any(|(plain, _)| content.contains(*plain))
    {
        return true;
    }
    STYLE_COMMANDS.iter().any(|cmd| content.contains(cmd))
}

fn char_at(latex: &str, index: usize) -> Option<char> {
    latex[index..].chars().next()
}

fn parse(latex: &str, depth: usize) -> String {
    if depth > MAX_DEPTH {
        log::warn!("latex nesting exceeds depth bound, passing span through verbatim");
        return latex.to_string();
    }
    let mut out = String::new();
    let mut i = 0;
    while let Some(ch) = char_at(latex, i) {
        match ch {
            '\\' => {
                let (command, next) = parse_command(latex, i);
                if command == "\\frac" {
                    space_mixed_number(&mut out);
                }
                let (handled, next) = handle_command(&command, latex, next, depth);
                out.push_str(&handled);
                i = next;
            }
            '{' => {
                let (block, next) = parse_block(latex, i, depth);
                out.push_str(&block);
                i = next;
            }
            '_' | '^' => {
                let (arg, next) = parse_script_arg(latex, i + 1, depth, &mut out);
                let rendered = if ch == '_' {
                    make_subscript(&arg)
                } else {
                    make_superscript(&arg)
                };
                out.push_str(&rendered);
                i = next;
            }
            _ if ch.is_whitespace() => {
                let (folded, next) = parse_spaces(latex, i);
                out.push_str(folded);
                i = next;
            }
            _ => {
                out.push(ch);
                i += ch.len_utf8();
            }
        }
    }
    out
}

/// Mixed numbers like `1\frac{1}{2}` need a space before the fraction.
fn space_mixed_number(out: &mut String) {
    if out.chars().next_back().is_some_and(char::is_numeric) {
        out.push(' ');
    }
}

/// Lex a command token: `\word` or `\` plus a single symbol character.
fn parse_command(latex: &str, start: usize) -> (String, usize) {
    let rest = &latex[start + 1..];
    let mut chars = rest.chars();
    match chars.next() {
        None => ("\\".to_string(), start + 1),
        Some(first) if first.is_ascii_alphabetic() => {
            let word_len = rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            (
                format!("\\{}", &rest[..word_len]),
                start + 1 + word_len,
            )
        }
        Some(symbol) => (
            format!("\\{symbol}"),
            start + 1 + symbol.len_utf8(),
        ),
    }
}

/// Parse the argument of `_` or `^`: a brace group, a command, or one char.
fn parse_script_arg(
    latex: &str,
    start: usize,
    depth: usize,
    out: &mut String,
) -> (String, usize) {
    match char_at(latex, start) {
        Some('{') => parse_block(latex, start, depth),
        Some('\\') => {
            let (command, next) = parse_command(latex, start);
            if command == "\\frac" {
                space_mixed_number(out);
            }
            handle_command(&command, latex, next, depth)
        }
        Some(c) => (c.to_string(), start + c.len_utf8()),
        None => (String::new(), start),
    }
}

/// Parse a `{...}` group. Without a brace, a single token is taken, which
/// is standard LaTeX argument behavior.
fn parse_block(latex: &str, start: usize, depth: usize) -> (String, usize) {
    let Some(first) = char_at(latex, start) else {
        return (String::new(), start);
    };
    if first != '{' {
        if first == '\\' {
            let (command, next) = parse_command(latex, start);
            return handle_command(&command, latex, next, depth);
        }
        return (first.to_string(), start + first.len_utf8());
    }
    // Braces are ASCII, so a byte scan cannot land inside a multi-byte char.
    let bytes = latex.as_bytes();
    let mut level = 1usize;
    let mut pos = start + 1;
    while pos < bytes.len() && level > 0 {
        match bytes[pos] {
            b'{' => level += 1,
            b'}' => level -= 1,
            _ => {}
        }
        pos += 1;
    }
    let inner_end = if level == 0 { pos - 1 } else { pos };
    (parse(&latex[start + 1..inner_end], depth + 1), pos)
}

/// Parse an optional `[...]` argument; empty when absent.
fn parse_optional(latex: &str, start: usize, depth: usize) -> (String, usize) {
    if char_at(latex, start) != Some('[') {
        return (String::new(), start);
    }
    let bytes = latex.as_bytes();
    let mut level = 1usize;
    let mut pos = start + 1;
    while pos < bytes.len() && level > 0 {
        match bytes[pos] {
            b'[' => level += 1,
            b']' => level -= 1,
            _ => {}
        }
        pos += 1;
    }
    let inner_end = if level == 0 { pos - 1 } else { pos };
    (parse(&latex[start + 1..inner_end], depth + 1), pos)
}

/// Fold a whitespace run: paragraph break if it contains a newline,
/// otherwise a single space.
fn parse_spaces(latex: &str, start: usize) -> (&'static str, usize) {
    let rest = &latex[start..];
    let end = rest
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(rest.len());
    let folded = if rest[..end].contains('\n') { "\n\n" } else { " " };
    (folded, start + end)
}

/// Ordered command dispatch. The order mirrors how often each shape shows
/// up in real input, with the symbol table as the fast path.
fn handle_command(command: &str, latex: &str, index: usize, depth: usize) -> (String, usize) {
    if let Some(replacement) = LATEX_SYMBOLS.get(command) {
        return ((*replacement).to_string(), index);
    }
    if command == "\\not" {
        return handle_not(latex, index);
    }
    if combining_mark(command).is_some() {
        let (arg, index) = parse_block(latex, index, depth);
        return (translate_combining(command, &arg), index);
    }
    match command {
        "\\frac" => {
            let (numerator, index) = parse_block(latex, index, depth);
            let (denominator, index) = parse_block(latex, index, depth);
            (make_fraction(&numerator, &denominator), index)
        }
        "\\sqrt" => {
            let (option, index) = parse_optional(latex, index, depth);
            let (param, index) = parse_block(latex, index, depth);
            (make_sqrt(option.trim(), param.trim()), index)
        }
        _ if style_table(command).is_some() => {
            let (arg, index) = parse_block(latex, index, depth);
            (translate_style(command, &arg), index)
        }
        "\\text" | "\\operatorname" | "\\mbox" | "\\textrm" | "\\textup" | "\\mathop"
        | "\\mathrm" => parse_block(latex, index, depth),
        "\\left" | "\\right" => parse_delimiter(latex, index),
        "\\binom" | "\\tbinom" | "\\dbinom" => {
            let (n, index) = parse_block(latex, index, depth);
            let (k, index) = parse_block(latex, index, depth);
            (format!("C({n},{k})"), index)
        }
        "\\boxed" => {
            let (arg, index) = parse_block(latex, index, depth);
            (format!("[{arg}]"), index)
        }
        "\\pmod" => {
            let (arg, index) = parse_block(latex, index, depth);
            (format!(" (mod {arg})"), index)
        }
        "\\phantom" | "\\hphantom" | "\\vphantom" => {
            let (arg, index) = parse_block(latex, index, depth);
            (" ".repeat(arg.chars().count().max(1)), index)
        }
        "\\overset" | "\\stackrel" => {
            let (over, index) = parse_block(latex, index, depth);
            let (base, index) = parse_block(latex, index, depth);
            let rendered = match try_make_superscript(&over) {
                Some(sup) => format!("{base}{sup}"),
                None => format!("{base}^({over})"),
            };
            (rendered, index)
        }
        "\\underset" => {
            let (under, index) = parse_block(latex, index, depth);
            let (base, index) = parse_block(latex, index, depth);
            let rendered = match try_make_subscript(&under) {
                Some(sub) => format!("{base}{sub}"),
                None => format!("{base}_({under})"),
            };
            (rendered, index)
        }
        "\\substack" => {
            let (text, index) = parse_block(latex, index, depth);
            let joined = text
                .split("\\\\")
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| parse(line, depth + 1))
                .collect::<Vec<_>>()
                .join(", ");
            (joined, index)
        }
        "\\color" => {
            let (_, index) = parse_block(latex, index, depth);
            (String::new(), index)
        }
        "\\cancel" | "\\bcancel" | "\\xcancel" | "\\sout" | "\\underbrace" => {
            let (arg, index) = parse_block(latex, index, depth);
            (translate_combining("\\underline", &arg), index)
        }
        "\\overbrace" => {
            let (arg, index) = parse_block(latex, index, depth);
            (translate_combining("\\overline", &arg), index)
        }
        "\\xrightarrow" => {
            let (arg, index) = parse_block(latex, index, depth);
            let rendered = if arg.trim().is_empty() {
                "→".to_string()
            } else {
                format!("→({arg})")
            };
            (rendered, index)
        }
        "\\xleftarrow" => {
            let (arg, index) = parse_block(latex, index, depth);
            let rendered = if arg.trim().is_empty() {
                "←".to_string()
            } else {
                format!("←({arg})")
            };
            (rendered, index)
        }
        "\\begin" => {
            let (env_name, index) = parse_env_name(latex, index);
            let (content, index) = parse_environment(latex, index, &env_name);
            (render_environment(&env_name, content, depth), index)
        }
        "\\end" => {
            let (_, index) = parse_env_name(latex, index);
            (String::new(), index)
        }
        _ => (command.to_string(), index),
    }
}

fn handle_not(latex: &str, index: usize) -> (String, usize) {
    match char_at(latex, index) {
        Some('\\') => {
            let (next_command, next_index) = parse_command(latex, index);
            let symbol = LATEX_SYMBOLS
                .get(next_command.as_str())
                .copied()
                .unwrap_or(next_command.as_str());
            (make_not(symbol), next_index)
        }
        Some(c) => (make_not(&c.to_string()), index + c.len_utf8()),
        None => ("\u{338}".to_string(), index),
    }
}

fn is_combining_char(c: char) -> bool {
    matches!(c,
        '\u{300}'..='\u{36F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}')
}

/// Splice a diacritic's combining mark into `text` per the command's
/// placement policy.
fn translate_combining(command: &str, text: &str) -> String {
    let Some((mark, policy)) = combining_mark(command) else {
        return text.to_string();
    };
    match policy {
        CombiningPolicy::FirstChar => {
            // Attach after the first base char, past marks already present.
            let mut cut = 0;
            let mut chars = text.char_indices();
            if let Some((_, first)) = chars.next() {
                cut = first.len_utf8();
                for (pos, c) in chars {
                    if c.is_whitespace() || is_combining_char(c) {
                        cut = pos + c.len_utf8();
                    } else {
                        break;
                    }
                }
            }
            format!("{}{}{}", &text[..cut], mark, &text[cut..])
        }
        CombiningPolicy::LastChar => format!("{text}{mark}"),
        CombiningPolicy::EveryChar => text.chars().flat_map(|c| [c, mark]).collect(),
    }
}

fn make_not(negated: &str) -> String {
    let trimmed = negated.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return " ".to_string();
    };
    if chars.as_str().is_empty() {
        if let Some(negated_char) = negated_symbol(first) {
            return negated_char.to_string();
        }
    }
    format!("{first}\u{338}{}", chars.as_str())
}

fn try_make_subscript(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    text.chars()
        .map(|c| SUBSCRIPTS.get(&c).copied())
        .collect()
}

fn make_subscript(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    if let Some(subscript) = try_make_subscript(text) {
        return subscript;
    }
    if text.chars().count() == 1 {
        return format!("_{text}");
    }
    format!("_({text})")
}

fn try_make_superscript(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    text.chars()
        .map(|c| SUPERSCRIPTS.get(&c).copied())
        .collect()
}

fn make_superscript(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    if let Some(superscript) = try_make_superscript(text) {
        return superscript;
    }
    if text.chars().count() == 1 {
        return format!("^{text}");
    }
    format!("^({text})")
}

fn make_sqrt(index: &str, radicand: &str) -> String {
    let radix = match index {
        "" | "2" => "√".to_string(),
        "3" => "∛".to_string(),
        "4" => "∜".to_string(),
        _ => {
            let exponent =
                try_make_superscript(index).unwrap_or_else(|| format!("({index})"));
            format!("{exponent}√")
        }
    };
    format!("{radix}{}", translate_combining("\\overline", radicand))
}

fn needs_parens(c: char) -> bool {
    !(c.is_alphanumeric() || is_combining_char(c) || c == '_')
}

fn maybe_parenthesize(text: &str) -> String {
    if text.chars().any(needs_parens) {
        format!("({text})")
    } else {
        text.to_string()
    }
}

fn make_fraction(numerator: &str, denominator: &str) -> String {
    let n = numerator.trim();
    let d = denominator.trim();
    if n.is_empty() && d.is_empty() {
        return String::new();
    }
    if let Some(glyph) = fraction_glyph(n, d) {
        return glyph.to_string();
    }
    format!("{}/{}", maybe_parenthesize(n), maybe_parenthesize(d))
}

fn translate_style(command: &str, text: &str) -> String {
    match style_table(command) {
        Some(table) => text
            .chars()
            .map(|c| table.get(&c).copied().unwrap_or(c))
            .collect(),
        None => text.to_string(),
    }
}

/// The delimiter after `\left` / `\right`; `.` is the invisible one.
fn parse_delimiter(latex: &str, index: usize) -> (String, usize) {
    match char_at(latex, index) {
        None => (String::new(), index),
        Some('\\') => {
            let (command, next) = parse_command(latex, index);
            let rendered = LATEX_SYMBOLS
                .get(command.as_str())
                .copied()
                .map(str::to_string)
                .unwrap_or_else(|| command.trim_start_matches('\\').to_string());
            (rendered, next)
        }
        Some('.') => (String::new(), index + 1),
        Some(c) => (c.to_string(), index + c.len_utf8()),
    }
}

fn parse_env_name(latex: &str, index: usize) -> (String, usize) {
    if char_at(latex, index) == Some('{') {
        if let Some(close) = latex[index..].find('}') {
            let name = latex[index + 1..index + close].to_string();
            return (name, index + close + 1);
        }
    }
    (String::new(), index)
}

/// Raw content between `\begin{env}` and the matching `\end{env}`; the rest
/// of the input when the end marker is missing.
fn parse_environment<'a>(latex: &'a str, index: usize, env_name: &str) -> (&'a str, usize) {
    let end_marker = format!("\\end{{{env_name}}}");
    match latex[index..].find(&end_marker) {
        Some(pos) => (
            &latex[index..index + pos],
            index + pos + end_marker.len(),
        ),
        None => (&latex[index..], latex.len()),
    }
}

fn render_environment(env_name: &str, content: &str, depth: usize) -> String {
    match env_name {
        "matrix" | "smallmatrix" => {
            render_matrix(content, "", "", env_name == "smallmatrix", depth)
        }
        "pmatrix" => render_matrix(content, "(", ")", false, depth),
        "bmatrix" => render_matrix(content, "[", "]", false, depth),
        "Bmatrix" => render_matrix(content, "{", "}", false, depth),
        "vmatrix" => render_matrix(content, "|", "|", false, depth),
        "Vmatrix" => render_matrix(content, "‖", "‖", false, depth),
        "cases" => render_cases(content, depth),
        "align" | "aligned" | "gather" | "gathered" | "equation" | "equation*" | "multline"
        | "multline*" | "split" | "flalign" | "flalign*" => render_align(content, depth),
        "array" => render_array(content, depth),
        _ => parse(content, depth + 1),
    }
}

fn environment_rows(content: &str) -> impl Iterator<Item = &str> {
    content.split("\\\\").map(str::trim).filter(|r| !r.is_empty())
}

fn render_matrix(content: &str, left: &str, right: &str, compact: bool, depth: usize) -> String {
    let cell_sep = if compact { ", " } else { "  " };
    let row_sep = if compact { "; " } else { "\n" };
    let body = environment_rows(content)
        .map(|row| {
            row.split('&')
                .map(|cell| parse(cell.trim(), depth + 1))
                .collect::<Vec<_>>()
                .join(cell_sep)
        })
        .collect::<Vec<_>>()
        .join(row_sep);
    format!("{left}{body}{right}")
}

/// Piecewise definitions rendered as stacked "value, condition" lines with
/// brace-continuation glyphs, which markdown parsing leaves alone.
fn render_cases(content: &str, depth: usize) -> String {
    let parts: Vec<String> = environment_rows(content)
        .map(|row| {
            let mut pieces = row.splitn(2, '&');
            let value = parse(pieces.next().unwrap_or("").trim(), depth + 1);
            let condition = pieces
                .next()
                .map(|c| parse(c.trim(), depth + 1))
                .unwrap_or_default();
            if condition.is_empty() {
                value
            } else {
                format!("{value}, {condition}")
            }
        })
        .collect();
    match parts.len() {
        0 => String::new(),
        1 => format!("\u{23A7} {}", parts[0]),
        n => parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let brace = if i == 0 {
                    '\u{23A7}'
                } else if i == n - 1 {
                    '\u{23A9}'
                } else {
                    '\u{23A8}'
                };
                format!("{brace} {part}")
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_align(content: &str, depth: usize) -> String {
    environment_rows(content)
        .map(|row| parse(&row.replace('&', " "), depth + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `array` opens with a column-format group like `{ccc}`; skip it, then
/// treat the rest as an undelimited matrix.
fn render_array(content: &str, depth: usize) -> String {
    let stripped = content.trim_start();
    let body = if stripped.starts_with('{') {
        match stripped.find('}') {
            Some(close) => &stripped[close + 1..],
            None => stripped,
        }
    } else {
        content
    };
    render_matrix(body, "", "", false, depth)
}
