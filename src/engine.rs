use crate::frontier::Frontier;
use crate::genotype::GenotypeSet;
use crate::state::{Fitness, FusionState};
use itertools::Itertools;

/// Pruning policy for one search. Variants of the search are configuration,
/// not code forks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Generation budget; defaults to the genotype count when unset. A
    /// safety valve against non-converging frontiers, not an optimality
    /// bound.
    pub generations: Option<usize>,
    /// Drop genotypes whose symbols the opposite side can never produce.
    pub closure_filter: bool,
    /// Discard ongoing states that can no longer beat the shortest known
    /// survivor.
    pub bound_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            generations: None,
            closure_filter: false,
            bound_pruning: true,
        }
    }
}

/// The terminal outcome of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Fused(String),
    Impossible,
}

/// Accumulates completed fused strings and the running minimum length used
/// for pruning. Pure accumulation: nothing is ever removed.
#[derive(Debug, Clone)]
pub struct SurvivorTracker {
    survivors: Vec<String>,
    shortest: usize,
}

impl SurvivorTracker {
    pub fn new() -> Self {
        SurvivorTracker {
            survivors: Vec::new(),
            shortest: usize::MAX,
        }
    }

    pub fn record(&mut self, fused: String) {
        self.shortest = self.shortest.min(fused.len());
        self.survivors.push(fused);
    }

    /// The shortest-known bound; `usize::MAX` until a survivor exists.
    pub fn shortest(&self) -> usize {
        self.shortest
    }

    pub fn len(&self) -> usize {
        self.survivors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }

    /// Smallest length, ties broken lexicographically. Total order: `str`
    /// ordering is code-point order.
    pub fn select(self) -> Option<String> {
        self.survivors
            .into_iter()
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }
}

/// One expansion round: cross the frontier with the genotype set, keep the
/// ongoing children for the next generation, hand fit children to the
/// tracker. Fit children are recorded unconditionally — an equal-length
/// survivor can still win the lexicographic tie — while an ongoing child at
/// or past the bound is dropped: each further step matches at least one
/// symbol, so all of its completions are strictly longer than the bound.
fn expand(
    frontier: &Frontier,
    genotypes: &GenotypeSet,
    config: &SearchConfig,
    tracker: &mut SurvivorTracker,
) -> Vec<FusionState> {
    let mut next = Vec::new();
    for (state, genotype) in frontier.iter().cartesian_product(genotypes.iter()) {
        if !state.accepts(genotype) {
            continue;
        }
        let Some(child) = state.extend(genotype) else {
            continue;
        };
        match child.fitness() {
            Fitness::Fit => tracker.record(child.into_fused()),
            Fitness::Ongoing => {
                if config.bound_pruning && child.fused().len() >= tracker.shortest() {
                    continue;
                }
                next.push(child);
            }
        }
    }
    next
}

/// Run the full generation loop for one case. Deterministic for identical
/// genotype lists; each case is self-contained.
pub fn solve(genotypes: &GenotypeSet, config: &SearchConfig) -> Verdict {
    let filtered;
    let genotypes = if config.closure_filter {
        filtered = genotypes.closure_filtered();
        &filtered
    } else {
        genotypes
    };

    if genotypes.diverges() {
        return Verdict::Impossible;
    }

    let budget = config.generations.unwrap_or(genotypes.len());
    let mut tracker = SurvivorTracker::new();
    let mut frontier = Frontier::seed();

    for _generation in 0..budget {
        let candidates = expand(&frontier, genotypes, config, &mut tracker);
        frontier = Frontier::from_candidates(candidates);
        if frontier.is_empty() {
            break;
        }
    }

    match tracker.select() {
        Some(fused) => Verdict::Fused(fused),
        None => Verdict::Impossible,
    }
}
