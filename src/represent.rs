//! Text renderings of a relation: set notation, matrix table, Cartesian plot and directed graph.
use crate::category::*;
use crate::matrix::Matrix;
use crate::relation::{Pair, Relation};

use std::fmt::{self, Display};

/// `R = {(1,2), (2,3)}`
pub fn set_notation(name: &str, r: &Relation) -> String {
    format!("{name} = {r}")
}

/// A matrix with 1-indexed row and column headers.
///
/// ```text
///     1 2 3
///   ┌──────
/// 1 │ 0 1 0
/// 2 │ 0 0 1
/// 3 │ 0 0 0
/// ```
pub fn matrix_table<T: Display>(m: &Matrix<T>) -> String {
    MatrixTable(m).to_string()
}

struct MatrixTable<'a, T>(&'a Matrix<T>);

impl<T: Display> Display for MatrixTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        let cells: Vec<String> = m.entries().map(|(_, _, x)| x.to_string()).collect();
        let width = cells
            .iter()
            .map(|c| c.chars().count())
            .chain((1..=m.cols()).map(|j| j.to_string().len()))
            .max()
            .unwrap_or(1);
        let label = m.rows().to_string().len();

        write!(f, "{:label$}  ", "")?;
        for j in 1..=m.cols() {
            write!(f, " {j:>width$}")?;
        }
        writeln!(f)?;
        writeln!(f, "{:label$} ┌{}", "", "─".repeat(m.cols() * (width + 1)))?;
        for i in 0..m.rows() {
            write!(f, "{:>label$} │", i + 1)?;
            for j in 0..m.cols() {
                write!(f, " {:>width$}", cells[i * m.cols() + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Members plotted as `●` on a grid with `y` increasing upwards.
pub fn cartesian_plot(r: &Relation) -> String {
    CartesianPlot(r).to_string()
}

struct CartesianPlot<'a>(&'a Relation);

impl Display for CartesianPlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let (xs, ys) = (r.source(), r.target());
        let label = ys.to_string().len();
        for y in (1..=ys).rev() {
            write!(f, "{y:>label$} │")?;
            for x in 1..=xs {
                write!(f, " {}", if r.contains(x, y) { '●' } else { '·' })?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{:label$} └{}", "", "─".repeat(xs * 2))?;
        write!(f, "{:label$}  ", "")?;
        for x in 1..=xs {
            write!(f, " {}", x % 10)?;
        }
        writeln!(f)
    }
}

/// A relation on one set viewed as a directed graph.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Digraph {
    pub nodes: Vec<usize>,
    pub arrows: Vec<Pair>,
}

impl Digraph {
    pub fn new(r: &Relation) -> Self {
        Self {
            nodes: (1..=r.source().max(r.target())).collect(),
            arrows: r.pairs().to_vec(),
        }
    }

    /// Arrows from a node to itself.
    pub fn loops(&self) -> impl Iterator<Item = usize> + '_ {
        self.arrows.iter().filter(|(a, b)| a == b).map(|&(a, _)| a)
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.arrows.iter().filter(|&&(a, _)| a == node).count()
    }

    pub fn in_degree(&self, node: usize) -> usize {
        self.arrows.iter().filter(|&&(_, b)| b == node).count()
    }

    /// `Nodes: 1, 2, 3. Arrows: 1→2, 2→3`
    pub fn description(&self) -> String {
        let nodes: Vec<String> = self.nodes.iter().map(usize::to_string).collect();
        let arrows: Vec<String> = self.arrows.iter().map(|(a, b)| format!("{a}→{b}")).collect();
        if arrows.is_empty() {
            format!("Nodes: {}. No arrows", nodes.join(", "))
        } else {
            format!("Nodes: {}. Arrows: {}", nodes.join(", "), arrows.join(", "))
        }
    }

    /// Graphviz source.
    pub fn to_dot(&self, name: &str) -> String {
        Dot { graph: self, name }.to_string()
    }
}

struct Dot<'a> {
    graph: &'a Digraph,
    name: &'a str,
}

impl Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {} {{", self.name)?;
        for n in &self.graph.nodes {
            writeln!(f, "  {n};")?;
        }
        for (a, b) in &self.graph.arrows {
            writeln!(f, "  {a} -> {b};")?;
        }
        writeln!(f, "}}")
    }
}

impl Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
