use crate::error::SpliceError;
use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;

/// An ordered pair of symbol sequences eligible to extend the two
/// accumulators. Case-folded at parse time; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genotype {
    left: String,
    right: String,
}

impl Genotype {
    pub fn new(left: &str, right: &str) -> Self {
        Genotype {
            left: left.to_lowercase(),
            right: right.to_lowercase(),
        }
    }

    /// Parse one record of exactly two whitespace-separated tokens.
    pub fn parse(record: &str) -> Result<Self, SpliceError> {
        let mut tokens = record.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(left), Some(right), None) => Ok(Genotype::new(left, right)),
            _ => Err(SpliceError::Malformed(format!(
                "expected two tokens in genotype record, got {:?}",
                record
            ))),
        }
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }
}

/// The normalized genotypes of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeSet {
    genotypes: Vec<Genotype>,
}

impl GenotypeSet {
    pub fn new(genotypes: Vec<Genotype>) -> Self {
        GenotypeSet { genotypes }
    }

    pub fn from_records<'a, I>(records: I) -> Result<Self, SpliceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let genotypes = records
            .into_iter()
            .map(Genotype::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GenotypeSet::new(genotypes))
    }

    pub fn len(&self) -> usize {
        self.genotypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genotypes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Genotype> {
        self.genotypes.iter()
    }

    /// Necessary-condition test: if every left side is strictly longer than
    /// its right side (or every right strictly longer than its left), the
    /// accumulator lengths diverge monotonically and no fit state exists.
    /// The empty set reports divergent vacuously.
    pub fn diverges(&self) -> bool {
        let left_heavy = self
            .genotypes
            .iter()
            .all(|g| g.left.chars().count() > g.right.chars().count());
        let right_heavy = self
            .genotypes
            .iter()
            .all(|g| g.left.chars().count() < g.right.chars().count());
        left_heavy || right_heavy
    }

    /// Drop genotypes referencing a symbol the opposite side's alphabet
    /// never produces; such genotypes cannot appear in any fit chain.
    pub fn closure_filtered(&self) -> GenotypeSet {
        let mut left_alphabet: FxHashSet<char> = FxHashSet::default();
        let mut right_alphabet: FxHashSet<char> = FxHashSet::default();
        for genotype in &self.genotypes {
            left_alphabet.extend(genotype.left.chars());
            right_alphabet.extend(genotype.right.chars());
        }

        let mut excluded = FixedBitSet::with_capacity(self.genotypes.len());
        for (index, genotype) in self.genotypes.iter().enumerate() {
            let closed = genotype.left.chars().all(|c| right_alphabet.contains(&c))
                && genotype.right.chars().all(|c| left_alphabet.contains(&c));
            if !closed {
                excluded.insert(index);
            }
        }

        GenotypeSet {
            genotypes: self
                .genotypes
                .iter()
                .enumerate()
                .filter(|(index, _)| !excluded.contains(*index))
                .map(|(_, genotype)| genotype.clone())
                .collect(),
        }
    }
}
