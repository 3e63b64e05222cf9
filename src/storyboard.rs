//! What the composition animation shows at a given progress.
//!
//! The picture has three columns holding the same set `{1..N}`: `R` edges run from the left
//! column to the middle and `S` edges from the middle to the right. As progress goes from 0 to
//! 1, edges on no composing path fade out, each path `a → b → c` is drawn as a bridge through
//! the middle node, the middle column shrinks away and the bridges straighten into the edges of
//! `R ∘ S`. [`Storyboard::frame`] computes that state; drawing it is left to the caller.
use crate::category::*;
use crate::compose::{compose, paths, ComposingEdges, Path};
use crate::relation::Relation;
use crate::timeline::{Stage, TimelineConfig};

/// Which relation an edge belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A visible `R` or `S` edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeFrame {
    pub side: Side,
    pub from: usize,
    pub to: usize,
    /// Whether the edge lies on a composing path.
    pub composing: bool,
    pub opacity: f64,
    /// Blend from the relation's own colour (0) to the highlight colour (1).
    pub highlight: f64,
    pub width: f64,
}

/// A path `from → via → to` drawn across all three columns.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BridgeFrame {
    pub path: Path,
    pub opacity: f64,
    pub width: f64,
    /// 1 while the path bends through the middle node, 0 once it is a straight edge.
    pub bend: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MiddleColumn {
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Labels {
    /// The middle column's set label and the `R`, `S` labels.
    pub operands: f64,
    /// The `R ∘ S` label.
    pub composite: f64,
}

/// Everything visible at one progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub progress: f64,
    pub stage: Stage,
    pub edges: Vec<EdgeFrame>,
    pub bridges: Vec<BridgeFrame>,
    pub middle: MiddleColumn,
    pub labels: Labels,
}

impl Frame {
    pub fn edges_on(&self, side: Side) -> impl Iterator<Item = &EdgeFrame> + '_ {
        self.edges.iter().filter(move |e| e.side == side)
    }
}

/// Node placement for the three-column picture.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnLayout {
    pub left: f64,
    pub column_gap: f64,
    pub top: f64,
    pub row_gap: f64,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            left: 150.0,
            column_gap: 250.0,
            top: 80.0,
            row_gap: 80.0,
        }
    }
}

impl ColumnLayout {
    /// Centre of node `value` in `column` (0, 1 or 2).
    pub fn position(&self, column: usize, value: usize) -> (f64, f64) {
        (
            self.left + column as f64 * self.column_gap,
            self.top + value.saturating_sub(1) as f64 * self.row_gap,
        )
    }

    /// Control point of the quadratic curve for a bridge: the middle node while bent, moving
    /// to the midpoint of the straight edge as `bend` falls to 0.
    pub fn control_point(&self, bridge: &BridgeFrame) -> (f64, f64) {
        let (x0, y0) = self.position(0, bridge.path.from);
        let (xm, ym) = self.position(1, bridge.path.via);
        let (x1, y1) = self.position(2, bridge.path.to);
        let (sx, sy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        let b = bridge.bend;
        (xm * b + sx * (1.0 - b), ym * b + sy * (1.0 - b))
    }
}

/// The animation of `R ∘ S` for two relations on the same set.
#[derive(Clone, Debug)]
pub struct Storyboard {
    r: Relation,
    s: Relation,
    composite: Relation,
    composing: ComposingEdges,
    paths: Vec<Path>,
    timeline: TimelineConfig,
}

impl Storyboard {
    /// Returns `None` unless `r` and `s` are relations on one set.
    pub fn new(r: Relation, s: Relation) -> Option<Self> {
        Self::with_timeline(r, s, TimelineConfig::default())
    }

    pub fn with_timeline(r: Relation, s: Relation, timeline: TimelineConfig) -> Option<Self> {
        if !r.is_endorelation() || r.source() != s.source() || !s.is_endorelation() {
            return None;
        }
        let composite = compose(&r, &s)?;
        let composing = ComposingEdges::new(&r, &s);
        let paths = paths(&r, &s);
        Some(Self {
            r,
            s,
            composite,
            composing,
            paths,
            timeline,
        })
    }

    pub fn left(&self) -> &Relation {
        &self.r
    }

    pub fn right(&self) -> &Relation {
        &self.s
    }

    pub fn composite(&self) -> &Relation {
        &self.composite
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn frame(&self, progress: f64) -> Frame {
        let p = progress.clamp(0.0, 1.0);
        let t = &self.timeline;
        let fade = t.fade_fraction(p);
        let bridge = t.bridge_fraction(p);
        let straighten = t.straighten_fraction(p);

        let mut edges = Vec::with_capacity(self.r.len() + self.s.len());
        for (side, relation, composing) in [
            (Side::Left, &self.r, &self.composing.left),
            (Side::Right, &self.s, &self.composing.right),
        ] {
            for (from, to) in relation.iter() {
                let edge = if composing.contains(from, to) {
                    let opacity = if p >= t.bridge_end { 1.0 - straighten } else { 1.0 };
                    EdgeFrame {
                        side,
                        from,
                        to,
                        composing: true,
                        opacity,
                        highlight: bridge,
                        width: 2.0 + bridge,
                    }
                } else {
                    EdgeFrame {
                        side,
                        from,
                        to,
                        composing: false,
                        opacity: 1.0 - fade,
                        highlight: 0.0,
                        width: 2.0,
                    }
                };
                if edge.opacity > 0.0 {
                    edges.push(edge);
                }
            }
        }

        let bridges = if p > t.fade_end {
            self.paths
                .iter()
                .map(|&path| {
                    if p <= t.bridge_end {
                        BridgeFrame {
                            path,
                            opacity: (bridge * 2.0).min(1.0),
                            width: 3.0,
                            bend: 1.0,
                        }
                    } else {
                        BridgeFrame {
                            path,
                            opacity: 1.0,
                            width: 3.0 + straighten,
                            bend: 1.0 - straighten,
                        }
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        Frame {
            progress: p,
            stage: t.stage(p),
            edges,
            bridges,
            middle: MiddleColumn {
                opacity: (1.0 - bridge * 2.0).max(0.0),
                scale: (1.0 - bridge).max(0.1),
            },
            labels: Labels {
                operands: 1.0 - p,
                composite: p,
            },
        }
    }
}
