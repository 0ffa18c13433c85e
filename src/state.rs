use crate::genotype::Genotype;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fitness {
    /// Expandable: at most one remainder is non-empty.
    Ongoing,
    /// Terminal: both remainders empty, an equality was just confirmed.
    Fit,
}

/// A partial assembly: the confirmed common prefix of both accumulators
/// plus the unmatched tail still outstanding on one side. At most one
/// remainder is non-empty; a state whose tails contradict each other is
/// never constructed (`extend` returns `None` instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionState {
    fused: String,
    left_remainder: String,
    right_remainder: String,
    fitness: Fitness,
}

/// True when `a` and `b` agree on their common byte length. For valid
/// UTF-8 this is exactly "one is a character prefix of the other".
fn agrees(a: &str, b: &str) -> bool {
    let common = a.len().min(b.len());
    a.as_bytes()[..common] == b.as_bytes()[..common]
}

impl FusionState {
    /// The search seed: nothing assembled yet.
    pub fn seed() -> Self {
        FusionState {
            fused: String::new(),
            left_remainder: String::new(),
            right_remainder: String::new(),
            fitness: Fitness::Ongoing,
        }
    }

    /// Eligibility guard: a genotype is only worth combining with this
    /// state if one of its sides agrees with the opposite outstanding
    /// remainder on their common length. Cheap pre-filter before `extend`
    /// allocates the candidate tails.
    pub fn accepts(&self, genotype: &Genotype) -> bool {
        agrees(genotype.left(), &self.right_remainder)
            || agrees(genotype.right(), &self.left_remainder)
    }

    /// Append a genotype to both accumulators and classify the outcome.
    /// Returns `None` when the extended tails disagree somewhere on their
    /// common length (a structural contradiction; the candidate is
    /// discarded, never stored).
    pub fn extend(&self, genotype: &Genotype) -> Option<FusionState> {
        let a = format!("{}{}", self.left_remainder, genotype.left());
        let b = format!("{}{}", self.right_remainder, genotype.right());
        if !agrees(&a, &b) {
            return None;
        }

        let matched = a.len().min(b.len());
        let mut fused = self.fused.clone();
        fused.push_str(&a[..matched]);

        let state = if a.len() == b.len() {
            FusionState {
                fused,
                left_remainder: String::new(),
                right_remainder: String::new(),
                fitness: Fitness::Fit,
            }
        } else if a.len() > b.len() {
            FusionState {
                fused,
                left_remainder: a[matched..].to_string(),
                right_remainder: String::new(),
                fitness: Fitness::Ongoing,
            }
        } else {
            FusionState {
                fused,
                left_remainder: String::new(),
                right_remainder: b[matched..].to_string(),
                fitness: Fitness::Ongoing,
            }
        };
        Some(state)
    }

    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    pub fn fused(&self) -> &str {
        &self.fused
    }

    pub fn left_remainder(&self) -> &str {
        &self.left_remainder
    }

    pub fn right_remainder(&self) -> &str {
        &self.right_remainder
    }

    /// Dedup identity: states with equal remainder pairs are behaviorally
    /// identical for all future expansion.
    pub fn remainder_key(&self) -> (&str, &str) {
        (&self.left_remainder, &self.right_remainder)
    }

    pub fn into_fused(self) -> String {
        self.fused
    }
}
