//! Random relations and Boolean matrices for practice.
//!
//! Generators take the random source as an argument, so a seeded RNG such as
//! `rand_chacha::ChaCha8Rng` reproduces the same output.
use crate::domain::Domain;
use crate::error::{RelationError, Result};
use crate::matrix::{BooleanMatrix, Matrix};
use crate::relation::{Pair, Relation};

use rand::Rng;

/// Largest set, or matrix side, a generator will draw over.
pub const MAX_SIZE: usize = 64;

/// Most draws a single generated relation or matrix may take.
pub const MAX_DRAWS: usize = 4096;

pub(crate) fn check_size(size: usize) -> Result<()> {
    if size > MAX_SIZE {
        return Err(RelationError::TooLarge {
            what: "size",
            value: size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

fn check_draws(min: usize, max: usize) -> Result<()> {
    if min > max {
        return Err(RelationError::InvalidRange { min, max });
    }
    if max > MAX_DRAWS {
        return Err(RelationError::TooLarge {
            what: "draw count",
            value: max,
            max: MAX_DRAWS,
        });
    }
    Ok(())
}

/// Draws relations on `{1..N}` with a pair count chosen uniformly from `[min_pairs, max_pairs]`.
///
/// A draw that repeats an already accepted pair is skipped rather than retried, so the result
/// can hold fewer pairs than were drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RelationGenerator {
    pub domain: Domain,
    pub min_pairs: usize,
    pub max_pairs: usize,
}

impl RelationGenerator {
    pub fn new(domain_size: usize, min_pairs: usize, max_pairs: usize) -> Result<Self> {
        let g = Self {
            domain: Domain::new(domain_size)?,
            min_pairs,
            max_pairs,
        };
        g.validate()?;
        Ok(g)
    }

    /// Relations on `{1..9}` with 5 to 10 draws, for the representations view.
    pub fn representations() -> Self {
        Self::preset(9, 5, 10)
    }

    /// Relations on `{1..5}` with 3 to 6 draws, for the composition animation.
    pub fn composition() -> Self {
        Self::preset(5, 3, 6)
    }

    /// Relations on `{1..4}` with 3 to 6 draws, for composition through matrices.
    pub fn matrix_composition() -> Self {
        Self::preset(4, 3, 6)
    }

    fn preset(size: usize, min_pairs: usize, max_pairs: usize) -> Self {
        Self {
            domain: Domain::preset(size),
            min_pairs,
            max_pairs,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_size(self.domain.size())?;
        check_draws(self.min_pairs, self.max_pairs)
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Relation {
        self.generate_with_draws(rng).0
    }

    /// Generate a relation, also returning how many pairs were drawn.
    ///
    /// The relation never has more pairs than were drawn.
    pub fn generate_with_draws<R: Rng + ?Sized>(&self, rng: &mut R) -> (Relation, usize) {
        let n = self.domain.size();
        let draws = rng.gen_range(self.min_pairs..=self.max_pairs);
        let mut pairs: Vec<Pair> = Vec::with_capacity(draws);
        for _ in 0..draws {
            let pair = (rng.gen_range(1..=n), rng.gen_range(1..=n));
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
        let relation = Relation::from_parts(pairs, n, n);
        tracing::debug!(domain = n, draws, pairs = relation.len(), "generated relation");
        (relation, draws)
    }
}

impl Default for RelationGenerator {
    fn default() -> Self {
        Self::composition()
    }
}

/// Draws `n × n` Boolean matrices by setting between `min_draws` and `max_draws` random cells
/// to one. Cells may be drawn more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatrixGenerator {
    pub size: usize,
    pub min_draws: usize,
    pub max_draws: usize,
}

impl MatrixGenerator {
    pub fn new(size: usize, min_draws: usize, max_draws: usize) -> Result<Self> {
        let g = Self {
            size,
            min_draws,
            max_draws,
        };
        g.validate()?;
        Ok(g)
    }

    /// 4×4 matrices with 4 to 9 draws, for the Boolean products view.
    pub fn boolean_products() -> Self {
        Self {
            size: 4,
            min_draws: 4,
            max_draws: 9,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(RelationError::EmptyDomain);
        }
        check_size(self.size)?;
        check_draws(self.min_draws, self.max_draws)
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> BooleanMatrix {
        let n = self.size;
        let draws = rng.gen_range(self.min_draws..=self.max_draws);
        let mut ones = vec![false; n * n];
        for _ in 0..draws {
            let (i, j) = (rng.gen_range(0..n), rng.gen_range(0..n));
            ones[i * n + j] = true;
        }
        tracing::debug!(size = n, draws, "generated boolean matrix");
        Matrix::from_fn(n, n, |i, j| u8::from(ones[i * n + j]))
    }
}

impl Default for MatrixGenerator {
    fn default() -> Self {
        Self::boolean_products()
    }
}
