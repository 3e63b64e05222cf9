//! Randomized practice questions with worked solutions.
//!
//! Every solution is computed by the rest of the crate, so a question set doubles as a
//! cross-check of the representations, composition and Boolean products.
use crate::category::*;
use crate::compose::{compose, paths, Path};
use crate::domain::Domain;
use crate::error::{RelationError, Result};
use crate::generate::{check_size, MatrixGenerator, RelationGenerator};
use crate::matrix::{BooleanMatrix, Matrix};
use crate::product::{boolean_product, cell_calculation, count_product, CellCalculation};
use crate::relation::Relation;
use crate::represent::{set_notation, Digraph};

use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Topic {
    Representation,
    Composition,
    BooleanProduct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    DrawGraph,
    WriteMatrix,
    SetFromMatrix,
    CartesianPlot,
    MatrixFromGraph,
    Compose,
    ComposeGraph,
    MatrixComposition,
    BothOrders,
    ComposeFromPlots,
    BooleanProduct,
    ProductCell,
    BooleanSquare,
    Associativity,
}

impl Kind {
    pub const ALL: [Kind; 14] = [
        Kind::DrawGraph,
        Kind::WriteMatrix,
        Kind::SetFromMatrix,
        Kind::CartesianPlot,
        Kind::MatrixFromGraph,
        Kind::Compose,
        Kind::ComposeGraph,
        Kind::MatrixComposition,
        Kind::BothOrders,
        Kind::ComposeFromPlots,
        Kind::BooleanProduct,
        Kind::ProductCell,
        Kind::BooleanSquare,
        Kind::Associativity,
    ];

    pub fn topic(self) -> Topic {
        use Kind::*;
        match self {
            DrawGraph | WriteMatrix | SetFromMatrix | CartesianPlot | MatrixFromGraph => {
                Topic::Representation
            }
            Compose | ComposeGraph | MatrixComposition | BothOrders | ComposeFromPlots => {
                Topic::Composition
            }
            BooleanProduct | ProductCell | BooleanSquare | Associativity => Topic::BooleanProduct,
        }
    }
}

/// The data a question hands to the student.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Given {
    Relation { domain: Domain, relation: Relation },
    Graph { domain: Domain, graph: Digraph },
    Matrix { domain: Domain, matrix: BooleanMatrix },
    Relations { domain: Domain, r: Relation, s: Relation },
    Matrices { a: BooleanMatrix, b: BooleanMatrix },
    Cell { a: BooleanMatrix, b: BooleanMatrix, row: usize, col: usize },
    Square { a: BooleanMatrix },
    Triple { a: BooleanMatrix, b: BooleanMatrix, c: BooleanMatrix },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Solution {
    Graph(Digraph),
    Matrix(BooleanMatrix),
    Set(Relation),
    Points(Relation),
    Composition { result: Relation, paths: Vec<Path> },
    CompositionGraph { graph: Digraph, paths: Vec<Path> },
    MatrixComposition { counts: Matrix<u32>, boolean: BooleanMatrix },
    BothOrders { rs: Relation, sr: Relation },
    Product(BooleanMatrix),
    Cell(CellCalculation),
    Associativity {
        ab: BooleanMatrix,
        ab_c: BooleanMatrix,
        bc: BooleanMatrix,
        a_bc: BooleanMatrix,
    },
}

fn path_list(paths: &[Path]) -> String {
    paths.iter().map(Path::to_string).collect::<Vec<_>>().join(", ")
}

impl Solution {
    /// The worked answer as text.
    pub fn explain(&self) -> String {
        match self {
            Solution::Graph(g) => g.description(),
            Solution::Matrix(m) | Solution::Product(m) => m.to_string(),
            Solution::Set(r) => set_notation("R", r),
            Solution::Points(r) => {
                let points: Vec<String> = r.iter().map(|(x, y)| format!("({x},{y})")).collect();
                format!(
                    "Plot points {} on a {}×{} grid.",
                    points.join(", "),
                    r.source(),
                    r.target()
                )
            }
            Solution::Composition { result, paths } if paths.is_empty() => format!(
                "No element links a pair of R to a pair of S, so {}",
                set_notation("R ∘ S", result)
            ),
            Solution::Composition { result, paths } => format!(
                "{}. Paths: {}.",
                set_notation("R ∘ S", result),
                path_list(paths)
            ),
            Solution::CompositionGraph { graph, paths } => {
                if graph.arrows.is_empty() {
                    return "R ∘ S is empty: no arrows.".to_string();
                }
                let arrows: Vec<String> = graph
                    .arrows
                    .iter()
                    .map(|&(a, c)| {
                        let via: Vec<Path> =
                            paths.iter().copied().filter(|p| p.pair() == (a, c)).collect();
                        format!("{a}→{c} (via {})", path_list(&via))
                    })
                    .collect();
                format!("Arrows: {}", arrows.join(", "))
            }
            Solution::MatrixComposition { counts, boolean } => {
                format!("Path counts M_R · M_S:\n{counts}\nBoolean result M_R ⊙ M_S:\n{boolean}")
            }
            Solution::BothOrders { rs, sr } => {
                let verdict = if rs == sr {
                    "Here R ∘ S = S ∘ R, though composition is not commutative in general."
                } else {
                    "Composition is not commutative: R ∘ S ≠ S ∘ R."
                };
                format!(
                    "{}; {}. {verdict}",
                    set_notation("R ∘ S", rs),
                    set_notation("S ∘ R", sr)
                )
            }
            Solution::Cell(calc) => format!(
                "(A ⊙ B)[{},{}] = {calc}",
                calc.row + 1,
                calc.col + 1
            ),
            Solution::Associativity { ab, ab_c, bc, a_bc } => {
                let verdict = if ab_c == a_bc { "equal" } else { "different" };
                format!(
                    "A ⊙ B =\n{ab}\n(A ⊙ B) ⊙ C =\n{ab_c}\nB ⊙ C =\n{bc}\nA ⊙ (B ⊙ C) =\n{a_bc}\nThe two results are {verdict}."
                )
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: usize,
    pub kind: Kind,
    pub prompt: String,
    pub given: Given,
    pub solution: Solution,
}

impl Question {
    pub fn topic(&self) -> Topic {
        self.kind.topic()
    }
}

impl fmt::Display for Given {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Given::Relation { domain, relation } => {
                write!(f, "A = {domain}, {}", set_notation("R", relation))
            }
            Given::Graph { domain, graph } => write!(f, "A = {domain}, graph: {graph}"),
            Given::Matrix { domain, matrix } => write!(f, "A = {domain}, M_R =\n{matrix}"),
            Given::Relations { domain, r, s } => write!(
                f,
                "A = {domain}, {}, {}",
                set_notation("R", r),
                set_notation("S", s)
            ),
            Given::Matrices { a, b } => write!(f, "A =\n{a}\nB =\n{b}"),
            Given::Cell { a, b, .. } => write!(f, "A =\n{a}\nB =\n{b}"),
            Given::Square { a } => write!(f, "A =\n{a}"),
            Given::Triple { a, b, c } => write!(f, "A =\n{a}\nB =\n{b}\nC =\n{c}"),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. {}", self.id, self.prompt)?;
        writeln!(f, "{}", self.given)?;
        write!(f, "Solution: {}", self.solution.explain())
    }
}

/// Which questions to ask and how large their sets may be.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    pub min_size: usize,
    pub max_size: usize,
    pub kinds: Vec<Kind>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            min_size: 3,
            max_size: 4,
            kinds: Kind::ALL.to_vec(),
        }
    }
}

impl PracticeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_size == 0 {
            return Err(RelationError::EmptyDomain);
        }
        if self.min_size > self.max_size {
            return Err(RelationError::InvalidRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        check_size(self.max_size)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// One question per configured kind, numbered from 1.
    #[tracing::instrument(level = "debug", skip_all, fields(kinds = config.kinds.len()))]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &PracticeConfig) -> Result<Self> {
        config.validate()?;
        let mut questions = Vec::with_capacity(config.kinds.len());
        for (n, &kind) in config.kinds.iter().enumerate() {
            let size = rng.gen_range(config.min_size..=config.max_size);
            questions.push(question(&mut *rng, kind, n + 1, size)?);
        }
        tracing::debug!(count = questions.len(), "generated question set");
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn relation_on<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<Relation> {
    Ok(RelationGenerator::new(n, n.min(3), n.saturating_add(1))?.generate(rng))
}

fn matrix_of<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<BooleanMatrix> {
    Ok(MatrixGenerator::new(n, n, n.saturating_mul(2))?.generate(rng))
}

fn product(a: &BooleanMatrix, b: &BooleanMatrix) -> Result<BooleanMatrix> {
    boolean_product(a, b).ok_or(RelationError::DimensionMismatch {
        expected: (a.cols(), b.cols()),
        found: b.dims(),
    })
}

fn composite(r: &Relation, s: &Relation) -> Result<Relation> {
    compose(r, s).ok_or(RelationError::DimensionMismatch {
        expected: (r.target(), s.target()),
        found: (s.source(), s.target()),
    })
}

/// Build question `id` of the given kind over a set of `size` elements.
///
/// Associativity questions always use 2×2 matrices.
pub fn question<R: Rng + ?Sized>(
    rng: &mut R,
    kind: Kind,
    id: usize,
    size: usize,
) -> Result<Question> {
    check_size(size)?;
    let domain = Domain::new(size)?;
    let (prompt, given, solution) = match kind {
        Kind::DrawGraph => {
            let r = relation_on(rng, size)?;
            (
                format!(
                    "Given the set A = {domain} and relation {}, draw the directed graph representation.",
                    set_notation("R", &r)
                ),
                Given::Relation {
                    domain,
                    relation: r.clone(),
                },
                Solution::Graph(Digraph::new(&r)),
            )
        }
        Kind::WriteMatrix => {
            let r = relation_on(rng, size)?;
            (
                format!(
                    "Given A = {domain} and {}, write the matrix representation.",
                    set_notation("R", &r)
                ),
                Given::Relation {
                    domain,
                    relation: r.clone(),
                },
                Solution::Matrix(r.to_matrix()),
            )
        }
        Kind::SetFromMatrix => {
            let m = matrix_of(rng, size)?;
            (
                format!(
                    "Given A = {domain} and the matrix below, write the relation in set notation."
                ),
                Given::Matrix {
                    domain,
                    matrix: m.clone(),
                },
                Solution::Set(Relation::from_matrix(&m)),
            )
        }
        Kind::CartesianPlot => {
            let r = relation_on(rng, size)?;
            (
                format!(
                    "Given A = {domain} and {}, create the Cartesian coordinate representation.",
                    set_notation("R", &r)
                ),
                Given::Relation {
                    domain,
                    relation: r.clone(),
                },
                Solution::Points(r),
            )
        }
        Kind::MatrixFromGraph => {
            let r = relation_on(rng, size)?;
            (
                format!(
                    "Given A = {domain} and the directed graph below, write the matrix representation."
                ),
                Given::Graph {
                    domain,
                    graph: Digraph::new(&r),
                },
                Solution::Matrix(r.to_matrix()),
            )
        }
        Kind::Compose => {
            let (r, s) = (relation_on(rng, size)?, relation_on(rng, size)?);
            (
                format!(
                    "Given A = {domain}, {} and {}, find R ∘ S.",
                    set_notation("R", &r),
                    set_notation("S", &s)
                ),
                Given::Relations {
                    domain,
                    r: r.clone(),
                    s: s.clone(),
                },
                Solution::Composition {
                    result: composite(&r, &s)?,
                    paths: paths(&r, &s),
                },
            )
        }
        Kind::ComposeGraph => {
            let (r, s) = (relation_on(rng, size)?, relation_on(rng, size)?);
            let rs = composite(&r, &s)?;
            (
                format!(
                    "Given A = {domain}, {} and {}, draw the directed graph of R ∘ S.",
                    set_notation("R", &r),
                    set_notation("S", &s)
                ),
                Given::Relations {
                    domain,
                    r: r.clone(),
                    s: s.clone(),
                },
                Solution::CompositionGraph {
                    graph: Digraph::new(&rs),
                    paths: paths(&r, &s),
                },
            )
        }
        Kind::MatrixComposition => {
            let (r, s) = (relation_on(rng, size)?, relation_on(rng, size)?);
            let (mr, ms) = (r.to_matrix(), s.to_matrix());
            let counts = count_product(&mr.map(|&x| u32::from(x)), &ms.map(|&x| u32::from(x)))
                .ok_or(RelationError::DimensionMismatch {
                    expected: mr.dims(),
                    found: ms.dims(),
                })?;
            (
                "Find the matrix representation of R ∘ S where R and S are given by their matrices."
                    .to_string(),
                Given::Matrices {
                    a: mr.clone(),
                    b: ms.clone(),
                },
                Solution::MatrixComposition {
                    counts,
                    boolean: product(&mr, &ms)?,
                },
            )
        }
        Kind::BothOrders => {
            let (r, s) = (relation_on(rng, size)?, relation_on(rng, size)?);
            (
                format!(
                    "Given {} and {} on A = {domain}, find both R ∘ S and S ∘ R.",
                    set_notation("R", &r),
                    set_notation("S", &s)
                ),
                Given::Relations {
                    domain,
                    r: r.clone(),
                    s: s.clone(),
                },
                Solution::BothOrders {
                    rs: composite(&r, &s)?,
                    sr: composite(&s, &r)?,
                },
            )
        }
        Kind::ComposeFromPlots => {
            let (r, s) = (relation_on(rng, size)?, relation_on(rng, size)?);
            let points = |x: &Relation| {
                x.iter()
                    .map(|(a, b)| format!("({a},{b})"))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            (
                format!(
                    "Express R ∘ S in set notation, where R and S are defined by the Cartesian plots: R has points {} and S has points {}.",
                    points(&r),
                    points(&s)
                ),
                Given::Relations {
                    domain,
                    r: r.clone(),
                    s: s.clone(),
                },
                Solution::Composition {
                    result: composite(&r, &s)?,
                    paths: paths(&r, &s),
                },
            )
        }
        Kind::BooleanProduct => {
            let (a, b) = (matrix_of(rng, size)?, matrix_of(rng, size)?);
            let ab = product(&a, &b)?;
            (
                "Compute the Boolean product A ⊙ B.".to_string(),
                Given::Matrices { a, b },
                Solution::Product(ab),
            )
        }
        Kind::ProductCell => {
            let (a, b) = (matrix_of(rng, size)?, matrix_of(rng, size)?);
            let (row, col) = (rng.gen_range(0..size), rng.gen_range(0..size));
            let calc = cell_calculation(&a, &b, row, col)?;
            (
                format!("Calculate (A ⊙ B)[{},{}] step by step.", row + 1, col + 1),
                Given::Cell { a, b, row, col },
                Solution::Cell(calc),
            )
        }
        Kind::BooleanSquare => {
            let a = matrix_of(rng, size)?;
            let square = product(&a, &a)?;
            (
                "Find the Boolean square A ⊙ A (A²).".to_string(),
                Given::Square { a },
                Solution::Product(square),
            )
        }
        Kind::Associativity => {
            let (a, b, c) = (matrix_of(rng, 2)?, matrix_of(rng, 2)?, matrix_of(rng, 2)?);
            let ab = product(&a, &b)?;
            let bc = product(&b, &c)?;
            let ab_c = product(&ab, &c)?;
            let a_bc = product(&a, &bc)?;
            (
                "Verify that (A ⊙ B) ⊙ C = A ⊙ (B ⊙ C) for the given 2×2 matrices.".to_string(),
                Given::Triple { a, b, c },
                Solution::Associativity { ab, ab_c, bc, a_bc },
            )
        }
    };
    Ok(Question {
        id,
        kind,
        prompt,
        given,
        solution,
    })
}
