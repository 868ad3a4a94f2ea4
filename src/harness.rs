//! Fills an [`OrderedTree`] with random strings, prints it in order and
//! tears it down again.

use std::io::{self, Write};

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::error::{HarnessError, HarnessResult};
use crate::random::{random_number, random_string};
use crate::tree::OrderedTree;

/// How many strings to generate and how long they may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Strings inserted after the root.
    pub nodes: usize,
    /// Inclusive lower bound on the length of a string.
    pub min_length: usize,
    /// Exclusive upper bound on the length of a string.
    pub max_length: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            nodes: 50,
            min_length: 10,
            max_length: 20,
        }
    }
}

impl HarnessConfig {
    /// Checks that string lengths can actually be drawn.
    pub fn validate(&self) -> HarnessResult<()> {
        if self.min_length >= self.max_length {
            return Err(HarnessError::InvalidLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }

        Ok(())
    }
}

/// Builds a tree of `config.nodes + 1` random strings.
///
/// The root's length is drawn from `0..max_length`, so it may be short or
/// even empty; every later string's length comes from
/// `min_length..max_length`.
#[instrument(level = "debug", skip(rng))]
pub fn build_random_tree<R>(config: &HarnessConfig, rng: &mut R) -> HarnessResult<OrderedTree>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let mut tree = OrderedTree::new();
    let length = random_number(rng, 0, config.max_length);
    tree.insert(random_string(rng, length)?)?;

    for _ in 0..config.nodes {
        let length = random_number(rng, config.min_length, config.max_length);
        tree.insert(random_string(rng, length)?)?;
    }

    debug!(len = tree.len(), height = tree.height(), "built random tree");
    Ok(tree)
}

/// Writes every value on its own line in sorted order, with a blank line
/// before and after.
pub fn print_tree<W>(tree: &OrderedTree, mut out: W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out)?;
    let mut result = Ok(());
    tree.traverse_in_order(|value| {
        if result.is_ok() {
            result = writeln!(out, "{}", value);
        }
    });
    result?;
    writeln!(out)?;
    out.flush()
}

/// Builds a random tree, prints it to `out` and destroys it along with its
/// values.
pub fn run<R, W>(config: &HarnessConfig, rng: &mut R, out: W) -> HarnessResult<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    let tree = build_random_tree(config, rng)?;
    print_tree(&tree, out)?;
    info!(values = tree.len(), "printed tree");
    tree.destroy();
    Ok(())
}
