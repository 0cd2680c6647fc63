// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::canvas::{Canvas, CanvasError};
use super::RenderOptions;
use crate::compile::Diagram;
use crate::layout::{layout_diagram, LayoutKind, LayoutNode, RailroadLayout};

const START_MARKER: char = '╟';
const END_MARKER: char = '╢';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RailroadRenderError {
    Canvas(CanvasError),
}

impl fmt::Display for RailroadRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "railroad render failed: {err}"),
        }
    }
}

impl std::error::Error for RailroadRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<CanvasError> for RailroadRenderError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

/// Lays out and draws `diagram` in one step.
pub fn render_diagram_unicode(
    diagram: &Diagram,
    options: RenderOptions,
) -> Result<String, RailroadRenderError> {
    render_railroad_unicode(&layout_diagram(diagram, &options))
}

/// Draws a finished layout. Trailing spaces are trimmed from every line.
pub fn render_railroad_unicode(layout: &RailroadLayout) -> Result<String, RailroadRenderError> {
    let mut canvas = Canvas::new(layout.width(), layout.height())?;
    let root = layout.root();
    let track = layout.baseline();

    canvas.set(0, track, START_MARKER)?;
    canvas.draw_hline(1, root.x, track)?;
    draw_node(&mut canvas, &root.node, root.x, root.y)?;
    canvas.draw_hline(root.end_col() - 1, layout.width() - 2, track)?;
    canvas.set(layout.width() - 1, track, END_MARKER)?;

    Ok(canvas.to_trimmed_string())
}

/// Draws `node` with its top-left corner at `(x, y)`.
///
/// Connecting tracks always include the child's first and last column so box sides merge into
/// `┤`/`├` junctions.
fn draw_node(
    canvas: &mut Canvas,
    node: &LayoutNode,
    x: usize,
    y: usize,
) -> Result<(), CanvasError> {
    let track = y + node.baseline;
    let last = x + node.exit_col();
    match &node.kind {
        LayoutKind::Box { label, .. } => {
            canvas.draw_box(x, y, node.width, node.height)?;
            canvas.write_str(x + 2, track, label)
        }
        LayoutKind::Label { text } => {
            canvas.write_str(x + 1, y, text)?;
            canvas.draw_hline(x, last, track)
        }
        LayoutKind::Track => canvas.draw_hline(x, last, track),
        LayoutKind::Sequence { items } => {
            let mut prev_end: Option<usize> = None;
            for item in items {
                let item_x = x + item.x;
                if let Some(prev_end) = prev_end {
                    canvas.draw_hline(prev_end, item_x, track)?;
                }
                draw_node(canvas, &item.node, item_x, y + item.y)?;
                prev_end = Some(x + item.end_col() - 1);
            }
            Ok(())
        }
        LayoutKind::Branch { paths, .. } => {
            let (left, right) = (x + 1, last - 1);
            canvas.draw_hline(x, left, track)?;
            canvas.draw_hline(right, last, track)?;
            if let (Some(first), Some(final_path)) = (paths.first(), paths.last()) {
                let (top, bottom) = (y + first.track_row(), y + final_path.track_row());
                canvas.draw_vline(left, top, bottom)?;
                canvas.draw_vline(right, top, bottom)?;
            }
            for path in paths {
                let row = y + path.track_row();
                canvas.draw_hline(left, x + path.x, row)?;
                draw_node(canvas, &path.node, x + path.x, y + path.y)?;
                canvas.draw_hline(x + path.end_col() - 1, right, row)?;
            }
            Ok(())
        }
        LayoutKind::Loop { body, back } => {
            let (left, right) = (x + 1, last - 1);
            let back_row = y + back.track_row();
            canvas.draw_hline(x, x + body.x, track)?;
            draw_node(canvas, &body.node, x + body.x, y + body.y)?;
            canvas.draw_hline(x + body.end_col() - 1, last, track)?;

            canvas.draw_vline(left, track, back_row)?;
            canvas.draw_vline(right, track, back_row)?;
            canvas.draw_hline(left, x + back.x, back_row)?;
            draw_node(canvas, &back.node, x + back.x, y + back.y)?;
            canvas.draw_hline(x + back.end_col() - 1, right, back_row)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render_diagram_unicode;
    use crate::compile::{compile, compile_rule};
    use crate::model::{Expr, Registry};
    use crate::render::RenderOptions;

    fn render(expr: &Expr) -> String {
        render_diagram_unicode(&compile(expr), RenderOptions::default()).expect("render")
    }

    #[test]
    fn renders_single_terminal() {
        let expected = ["  ┌────────┐", "╟─┤ 'pass' ├─╢", "  └────────┘"].join("\n");
        assert_eq!(render(&Expr::keyword("pass")), expected);
    }

    #[test]
    fn renders_sequence_with_joined_boxes() {
        let tree = Expr::sequence(vec![Expr::keyword("del"), Expr::non_terminal("del_targets")]);
        let expected = [
            "  ┌───────┐  ┌─────────────┐",
            "╟─┤ 'del' ├──┤ del_targets ├─╢",
            "  └───────┘  └─────────────┘",
        ]
        .join("\n");
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn renders_choice_with_rails() {
        let tree =
            Expr::choice(vec![Expr::terminal("+="), Expr::terminal("-=")]).expect("choice");
        let expected = [
            "     ┌──────┐",
            "╟──┬─┤ '+=' ├─┬──╢",
            "   │ └──────┘ │",
            "   │ ┌──────┐ │",
            "   └─┤ '-=' ├─┘",
            "     └──────┘",
        ]
        .join("\n");
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn renders_optional_bypass_above_main_track() {
        let expected = [
            "   ┌─────────┐",
            "   │ ┌─────┐ │",
            "╟──┴─┤ ',' ├─┴──╢",
            "     └─────┘",
        ]
        .join("\n");
        assert_eq!(render(&Expr::optional(Expr::terminal(","))), expected);
    }

    #[test]
    fn renders_loop_with_separator_on_return_track() {
        let tree = Expr::one_or_more_sep(Expr::non_terminal("item"), Expr::terminal(","))
            .expect("gather");
        let expected = [
            "     ┌──────┐",
            "╟──┬─┤ item ├─┬──╢",
            "   │ └──────┘ │",
            "   │ ┌─────┐  │",
            "   └─┤ ',' ├──┘",
            "     └─────┘",
        ]
        .join("\n");
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn renders_comments_above_the_track() {
        let tree = Expr::sequence(vec![Expr::annotation("&'('"), Expr::terminal("NAME")]);
        let expected = [
            "   &'('   ┌──────┐",
            "╟─────────┤ NAME ├─╢",
            "          └──────┘",
        ]
        .join("\n");
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn unknown_name_with_control_characters_keeps_the_frame() {
        let diagram = compile_rule(&Registry::new(), "a\nb\tc");
        let rendered = render_diagram_unicode(&diagram, RenderOptions::default()).expect("render");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2, "{rendered}");
        assert!(lines[0].contains("no definition for `a\\nb\\tc`"), "{rendered}");
        assert!(lines[1].starts_with('╟') && lines[1].ends_with('╢'), "{rendered}");
    }
}
