// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railgram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character-cell railroad layout.
//!
//! Every construct is a rectangle with one track row (`baseline`). The track enters at column 0
//! and leaves at column `width - 1` on that row, so parents only ever join children
//! horizontally on their baselines.

use crate::compile::{Diagram, DiagramNode, RepeatMin};
use crate::model::TerminalKind;
use crate::render::text::{text_len, truncate_with_ellipsis};
use crate::render::RenderOptions;

/// Track cells between consecutive items of a sequence.
pub const SEQUENCE_GAP: usize = 2;
/// Columns left of branch content: entry track, rail, connector.
pub const BRANCH_INSET: usize = 3;
/// Extra columns a branch adds around its widest path.
pub const BRANCH_PADDING: usize = 2 * BRANCH_INSET;
const BOX_HEIGHT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxShape {
    Terminal(TerminalKind),
    NonTerminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutKind {
    /// A 3-row box; the label sits on the track row.
    Box { label: String, shape: BoxShape },
    /// Text above a plain stretch of track.
    Label { text: String },
    Track,
    Sequence { items: Vec<Placed> },
    /// Paths stacked top to bottom; the path at `default` carries the main track.
    Branch { paths: Vec<Placed>, default: usize },
    /// `body` on the main track, `back` on the return row beneath it.
    Loop { body: Box<Placed>, back: Box<Placed> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    pub width: usize,
    pub height: usize,
    pub baseline: usize,
    pub kind: LayoutKind,
}

impl LayoutNode {
    fn track(width: usize) -> Self {
        Self {
            width: width.max(1),
            height: 1,
            baseline: 0,
            kind: LayoutKind::Track,
        }
    }

    /// Right-most column, where the track leaves.
    pub fn exit_col(&self) -> usize {
        self.width.saturating_sub(1)
    }
}

/// A child node offset from its parent's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    pub x: usize,
    pub y: usize,
    pub node: LayoutNode,
}

impl Placed {
    fn at(x: usize, y: usize, node: LayoutNode) -> Self {
        Self { x, y, node }
    }

    /// Row of the child's track, in parent coordinates.
    pub fn track_row(&self) -> usize {
        self.y + self.node.baseline
    }

    /// Column after the child's last cell, in parent coordinates.
    pub fn end_col(&self) -> usize {
        self.x + self.node.width
    }
}

/// A laid-out diagram: the root construct framed by start and end markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailroadLayout {
    width: usize,
    height: usize,
    baseline: usize,
    root: Placed,
}

impl RailroadLayout {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    pub fn root(&self) -> &Placed {
        &self.root
    }
}

pub fn layout_diagram(diagram: &Diagram, options: &RenderOptions) -> RailroadLayout {
    let node = layout_node(diagram.root(), options);
    let (height, baseline) = (node.height, node.baseline);
    // `╟─` before the root and `─╢` after it.
    let width = node.width + 4;
    RailroadLayout {
        width,
        height,
        baseline,
        root: Placed::at(2, 0, node),
    }
}

fn layout_node(node: &DiagramNode, options: &RenderOptions) -> LayoutNode {
    match node {
        DiagramNode::Terminal { text, kind } => {
            let label = if options.quote_literals {
                quote_terminal(text, *kind)
            } else {
                text.to_string()
            };
            boxed(label, BoxShape::Terminal(*kind), options)
        }
        DiagramNode::NonTerminal { name } => {
            boxed(name.to_string(), BoxShape::NonTerminal, options)
        }
        DiagramNode::Skip => LayoutNode::track(1),
        DiagramNode::Comment { text } if options.show_comments => label(text, options),
        DiagramNode::Comment { .. } => LayoutNode::track(1),
        DiagramNode::Missing { name } => {
            // Names come from callers unchecked; control characters would break the grid.
            label(&format!("no definition for `{}`", name.escape_debug()), options)
        }
        DiagramNode::Sequence { items } => {
            sequence(items.iter().map(|item| layout_node(item, options)).collect())
        }
        DiagramNode::Choice { default, paths } => {
            branch(paths.iter().map(|path| layout_node(path, options)).collect(), *default)
        }
        DiagramNode::Optional { body } => {
            branch(vec![LayoutNode::track(1), layout_node(body, options)], 1)
        }
        DiagramNode::Repeat {
            body,
            separator,
            min,
        } => {
            let body = layout_node(body, options);
            let separator = separator
                .as_deref()
                .map(|separator| layout_node(separator, options));
            let looped = repeat(body, separator);
            match min {
                RepeatMin::One => looped,
                RepeatMin::Zero => branch(vec![LayoutNode::track(1), looped], 1),
            }
        }
    }
}

fn quote_terminal(text: &str, kind: TerminalKind) -> String {
    match kind {
        TerminalKind::Token => text.to_owned(),
        TerminalKind::Literal | TerminalKind::Keyword => format!("'{text}'"),
        TerminalKind::SoftKeyword => format!("\"{text}\""),
    }
}

fn clip(text: &str, options: &RenderOptions) -> String {
    match options.max_label_width {
        Some(max) => truncate_with_ellipsis(text, max.max(1)),
        None => text.to_owned(),
    }
}

fn boxed(label: String, shape: BoxShape, options: &RenderOptions) -> LayoutNode {
    let label = clip(&label, options);
    LayoutNode {
        // `│ label │`
        width: text_len(&label) + 4,
        height: BOX_HEIGHT,
        baseline: 1,
        kind: LayoutKind::Box { label, shape },
    }
}

fn label(text: &str, options: &RenderOptions) -> LayoutNode {
    let text = clip(text, options);
    LayoutNode {
        width: text_len(&text) + 2,
        height: 2,
        baseline: 1,
        kind: LayoutKind::Label { text },
    }
}

fn sequence(items: Vec<LayoutNode>) -> LayoutNode {
    if items.is_empty() {
        return LayoutNode::track(1);
    }
    let baseline = items.iter().map(|item| item.baseline).max().unwrap_or(0);
    let below = items
        .iter()
        .map(|item| item.height - item.baseline)
        .max()
        .unwrap_or(1);

    let mut x = 0;
    let mut placed = Vec::with_capacity(items.len());
    for item in items {
        let width = item.width;
        placed.push(Placed::at(x, baseline - item.baseline, item));
        x += width + SEQUENCE_GAP;
    }
    LayoutNode {
        width: x - SEQUENCE_GAP,
        height: baseline + below,
        baseline,
        kind: LayoutKind::Sequence { items: placed },
    }
}

fn branch(paths: Vec<LayoutNode>, default: usize) -> LayoutNode {
    if paths.is_empty() {
        return LayoutNode::track(1);
    }
    let default = default.min(paths.len() - 1);
    let inner = paths.iter().map(|path| path.width).max().unwrap_or(1);

    let mut y = 0;
    let mut baseline = 0;
    let mut placed = Vec::with_capacity(paths.len());
    for (idx, path) in paths.into_iter().enumerate() {
        let height = path.height;
        if idx == default {
            baseline = y + path.baseline;
        }
        placed.push(Placed::at(BRANCH_INSET, y, path));
        y += height;
    }
    LayoutNode {
        width: inner + BRANCH_PADDING,
        height: y,
        baseline,
        kind: LayoutKind::Branch {
            paths: placed,
            default,
        },
    }
}

fn repeat(body: LayoutNode, separator: Option<LayoutNode>) -> LayoutNode {
    let back = separator.unwrap_or_else(|| LayoutNode::track(body.width));
    let inner = body.width.max(back.width);
    let back_x = BRANCH_INSET + (inner - back.width) / 2;
    let (baseline, body_height) = (body.baseline, body.height);
    let height = body_height + back.height;
    LayoutNode {
        width: inner + BRANCH_PADDING,
        height,
        baseline,
        kind: LayoutKind::Loop {
            body: Box::new(Placed::at(BRANCH_INSET, 0, body)),
            back: Box::new(Placed::at(back_x, body_height, back)),
        },
    }
}
