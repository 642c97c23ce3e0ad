//! Renders the card's display tree as ANSI text.
//!
//! The tree itself is rendering-neutral; this module is the terminal's
//! interpretation of it. Gradients become border colors, images become the
//! icon filename, the details row becomes one line of readings.

use weathercard_core::{Gradient, Node, TextRole};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const PANEL_WIDTH: usize = 40;

fn border_color(gradient: Gradient) -> &'static str {
    match gradient {
        Gradient::Day => "\x1b[96m",
        Gradient::Storm => "\x1b[90m",
        Gradient::Night => "\x1b[34m",
    }
}

pub fn print_card(node: &Node) {
    for line in render_lines(node) {
        println!("{line}");
    }
}

fn render_lines(node: &Node) -> Vec<String> {
    match node {
        Node::Panel { gradient, children } => {
            let color = border_color(*gradient);
            let rule = "─".repeat(PANEL_WIDTH);
            let mut lines = vec![format!("{color}╭{rule}╮{RESET}")];
            for child in children {
                for line in render_lines(child) {
                    lines.push(format!("{color}│{RESET}  {line}"));
                }
            }
            lines.push(format!("{color}╰{rule}╯{RESET}"));
            lines
        }
        Node::Text { content, role, .. } => {
            let line = match role {
                TextRole::CityName | TextRole::Temperature => format!("{BOLD}{content}{RESET}"),
                TextRole::Description | TextRole::Message => content.clone(),
            };
            vec![line]
        }
        Node::Image { url, .. } => {
            let filename = url.rsplit('/').next().unwrap_or(url);
            vec![format!("{DIM}{filename}{RESET}")]
        }
        Node::Divider => vec![format!("{DIM}{}{RESET}", "─".repeat(PANEL_WIDTH - 4))],
        Node::Row(cells) => {
            let joined = cells
                .iter()
                .flat_map(render_lines)
                .collect::<Vec<_>>()
                .join("   ");
            vec![joined]
        }
        Node::Cell { caption, value, unit } => {
            vec![format!("{DIM}{caption}{RESET} {value}{unit}")]
        }
    }
}
