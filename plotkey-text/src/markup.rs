//! Conversion of TLatex-style markup (`#tilde{#chi}^{0}_{1}`) to plain Unicode text.
//!
//! Renderers that only draw Unicode strings use this to display legend and label
//! text. Constructs without a Unicode equivalent degrade to their content, so
//! `#bf{ATLAS}` becomes `ATLAS` and `#scale[1.2]{x}` becomes `x`.

use std::iter::Peekable;

use pest::error::InputLocation;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

use crate::error::PlotKeyTextError;

const GREEK_NAMES: [&str; 24] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega",
];

/// Convert markup to display text
pub fn to_display_text(text: &str) -> Result<String, PlotKeyTextError> {
    let mut pairs = MarkupParser::parse(Rule::markup, text).map_err(|err| {
        let position = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        PlotKeyTextError::UnbalancedBraces {
            text: text.to_string(),
            position,
        }
    })?;
    let Some(markup) = pairs.next() else {
        return Ok(String::new());
    };
    Renderer { text }.render_nodes(markup.into_inner())
}

/// Whether the text contains anything that [`to_display_text`] would rewrite
pub fn has_markup(text: &str) -> bool {
    text.contains(['#', '^', '_', '{', '}'])
}

fn greek_letter(name: &str) -> Option<char> {
    let lower = name.to_ascii_lowercase();
    let position = GREEK_NAMES.iter().position(|n| *n == lower)? as u32;
    // The Unicode Greek block has a gap after rho (final sigma / reserved)
    let offset = if position > 16 { position + 1 } else { position };
    let first = if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        0x391
    } else {
        0x3B1
    };
    char::from_u32(first + offset)
}

fn symbol(name: &str) -> Option<char> {
    let c = match name {
        "pm" => '±',
        "mp" => '∓',
        "times" => '×',
        "cdot" => '⋅',
        "rightarrow" => '→',
        "leftarrow" => '←',
        "leftrightarrow" => '↔',
        "uparrow" => '↑',
        "downarrow" => '↓',
        "infty" => '∞',
        "approx" => '≈',
        "sim" => '∼',
        "leq" => '≤',
        "geq" => '≥',
        "neq" => '≠',
        "equiv" => '≡',
        "propto" => '∝',
        "ell" => 'ℓ',
        "circ" => '°',
        "partial" => '∂',
        "int" => '∫',
        "sum" => '∑',
        "prime" => '′',
        "hbar" => 'ℏ',
        "nabla" => '∇',
        "perp" => '⊥',
        "dagger" => '†',
        "in" => '∈',
        "backslash" => '\\',
        _ => return None,
    };
    Some(c)
}

fn combining_accent(name: &str) -> Option<char> {
    let c = match name {
        "tilde" => '\u{0303}',
        "bar" => '\u{0305}',
        "hat" => '\u{0302}',
        "dot" => '\u{0307}',
        "vec" => '\u{20D7}',
        _ => return None,
    };
    Some(c)
}

fn superscript(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'n' => 'ⁿ',
        'i' => 'ⁱ',
        other => other,
    }
}

fn subscript(c: char) -> char {
    match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'o' => 'ₒ',
        'x' => 'ₓ',
        'h' => 'ₕ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'p' => 'ₚ',
        's' => 'ₛ',
        't' => 'ₜ',
        other => other,
    }
}

#[derive(Parser)]
#[grammar = "latex.pest"]
struct MarkupParser;

type Nodes<'i> = Peekable<Pairs<'i, Rule>>;

/// Renders parsed markup. Commands take their arguments from the nodes that follow them.
struct Renderer<'t> {
    text: &'t str,
}

impl Renderer<'_> {
    fn missing_argument(&self, command: &str) -> PlotKeyTextError {
        PlotKeyTextError::MissingArgument {
            command: command.to_string(),
            text: self.text.to_string(),
        }
    }

    fn render_nodes(&self, pairs: Pairs<'_, Rule>) -> Result<String, PlotKeyTextError> {
        let mut nodes = pairs.peekable();
        let mut out = String::new();
        while let Some(node) = nodes.next() {
            out.push_str(&self.render_node(node, &mut nodes)?);
        }
        Ok(out)
    }

    fn render_node<'i>(
        &self,
        node: Pair<'i, Rule>,
        rest: &mut Nodes<'i>,
    ) -> Result<String, PlotKeyTextError> {
        match node.as_rule() {
            Rule::group => self.render_nodes(node.into_inner()),
            Rule::superscript => Ok(self
                .script_argument(node, "^", rest)?
                .chars()
                .map(superscript)
                .collect()),
            Rule::subscript => Ok(self
                .script_argument(node, "_", rest)?
                .chars()
                .map(subscript)
                .collect()),
            Rule::command => self.render_command(node, rest),
            Rule::hash => Ok("#".to_string()),
            Rule::literal => Ok(node.as_str().to_string()),
            _ => Ok(String::new()),
        }
    }

    fn script_argument<'i>(
        &self,
        script: Pair<'i, Rule>,
        command: &str,
        rest: &mut Nodes<'i>,
    ) -> Result<String, PlotKeyTextError> {
        match script.into_inner().next() {
            Some(argument) => self.render_node(argument, rest),
            None => Err(self.missing_argument(command)),
        }
    }

    /// The next node, rendered
    fn argument(&self, command: &str, rest: &mut Nodes<'_>) -> Result<String, PlotKeyTextError> {
        match rest.next_if(|node| node.as_rule() != Rule::EOI) {
            Some(node) => self.render_node(node, rest),
            None => Err(self.missing_argument(command)),
        }
    }

    fn render_command<'i>(
        &self,
        command: Pair<'i, Rule>,
        rest: &mut Nodes<'i>,
    ) -> Result<String, PlotKeyTextError> {
        let source = command.as_str();
        let mut inner = command.into_inner();
        let name = inner.next().map(|pair| pair.as_str()).unwrap_or_default();
        let option = inner.next().map(|pair| pair.as_str()).unwrap_or_default();

        let mut out = String::new();
        if let Some(letter) = greek_letter(name) {
            out.push(letter);
            out.push_str(option);
        } else if let Some(sym) = symbol(name) {
            out.push(sym);
            out.push_str(option);
        } else if let Some(accent) = combining_accent(name) {
            for c in self.argument(name, rest)?.chars() {
                out.push(c);
                if !c.is_whitespace() {
                    out.push(accent);
                }
            }
        } else {
            match name {
                "sqrt" => {
                    out.push('√');
                    if let Some(group) = rest.next_if(|node| node.as_rule() == Rule::group) {
                        out.push_str(&self.render_nodes(group.into_inner())?);
                    }
                }
                // Options (font, color, scale) have no plain text equivalent
                "it" | "bf" | "font" | "color" | "scale" | "kern" | "lower" => {
                    out.push_str(&self.argument(name, rest)?)
                }
                "splitline" => {
                    let top = self.argument(name, rest)?;
                    let bottom = self.argument(name, rest)?;
                    out.push_str(&top);
                    out.push('\n');
                    out.push_str(&bottom);
                }
                "frac" => {
                    let numerator = self.argument(name, rest)?;
                    let denominator = self.argument(name, rest)?;
                    out.push_str(&numerator);
                    out.push('/');
                    out.push_str(&denominator);
                }
                _ => out.push_str(source),
            }
        }
        Ok(out)
    }
}
