//! Typo-tolerant string distance
//!
//! A Levenshtein distance where substituting two characters that are easy to
//! confuse costs less than an arbitrary substitution. The default table is
//! tuned for Hebrew: final-form letters and their regular forms are almost
//! free to swap, letters sharing a sound are cheaper, visual look-alikes a
//! little less so.

use std::sync::LazyLock;

use hashbrown::HashMap;

/// Distance reported when either input is empty
pub const NO_MATCH_DISTANCE: f64 = 99.0;

/// Distances below this are most likely a typo of the intended name
pub const DEFAULT_TYPO_THRESHOLD: f64 = 1.5;

pub const FINAL_FORM_COST: f64 = 0.1;
pub const PHONETIC_COST: f64 = 0.3;
pub const VISUAL_COST: f64 = 0.5;

const INSERT_COST: f64 = 1.0;
const DELETE_COST: f64 = 1.0;
const SUBSTITUTE_COST: f64 = 1.0;

// (final form, regular form)
const HEBREW_FINAL_FORMS: [(char, char); 5] = [
    ('ך', 'כ'),
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ף', 'פ'),
    ('ץ', 'צ'),
];

const HEBREW_PHONETIC: [(char, char); 9] = [
    ('ב', 'ו'),
    ('כ', 'ח'),
    ('ך', 'ח'),
    ('כ', 'ק'),
    ('ת', 'ט'),
    ('ס', 'ש'),
    ('א', 'ע'),
    ('א', 'ה'),
    ('צ', 'ז'),
];

const HEBREW_VISUAL: [(char, char); 7] = [
    ('ד', 'ר'),
    ('ה', 'ח'),
    ('ו', 'ז'),
    ('ו', 'י'),
    ('ב', 'כ'),
    ('ס', 'ם'),
    ('ו', 'ן'),
];

static HEBREW_COSTS: LazyLock<SubstitutionCosts> = LazyLock::new(SubstitutionCosts::hebrew);

/// Substitution cost table.
///
/// Pairs are symmetric. Anything not in the table costs 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionCosts {
    pairs: HashMap<(char, char), f64>,
}

impl SubstitutionCosts {
    /// Every substitution costs 1, i.e. plain Levenshtein
    pub fn uniform() -> Self {
        Self::default()
    }

    /// Confusions of the Hebrew alphabet
    pub fn hebrew() -> Self {
        let mut costs = Self::uniform();
        for (a, b) in HEBREW_VISUAL {
            costs.insert(a, b, VISUAL_COST);
        }
        for (a, b) in HEBREW_PHONETIC {
            costs.insert(a, b, PHONETIC_COST);
        }
        for (a, b) in HEBREW_FINAL_FORMS {
            costs.insert(a, b, FINAL_FORM_COST);
        }
        costs
    }

    /// Add or override a pair; the cost is clamped to `0.0..=1.0`
    #[must_use]
    pub fn with_pair(mut self, a: char, b: char, cost: f64) -> Self {
        self.insert(a, b, cost);
        self
    }

    fn insert(&mut self, a: char, b: char, cost: f64) {
        let cost = if cost.is_nan() {
            SUBSTITUTE_COST
        } else {
            cost.clamp(0.0, SUBSTITUTE_COST)
        };
        self.pairs.insert((a, b), cost);
        self.pairs.insert((b, a), cost);
    }

    /// Cost of replacing `a` with `b`
    pub fn cost(&self, a: char, b: char) -> f64 {
        if a == b {
            return 0.0;
        }
        self.pairs.get(&(a, b)).copied().unwrap_or(SUBSTITUTE_COST)
    }

    pub fn len(&self) -> usize {
        self.pairs.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Weighted edit distance with the default Hebrew confusion table.
///
/// Returns [`NO_MATCH_DISTANCE`] if either string is empty.
pub fn weighted_edit_distance(a: &str, b: &str) -> f64 {
    weighted_edit_distance_with(a, b, &HEBREW_COSTS)
}

/// Weighted edit distance with a custom confusion table
pub fn weighted_edit_distance_with(a: &str, b: &str, costs: &SubstitutionCosts) -> f64 {
    if a.is_empty() || b.is_empty() {
        return NO_MATCH_DISTANCE;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two rows of the DP matrix
    let mut previous: Vec<f64> = (0..=b.len()).map(|j| j as f64 * INSERT_COST).collect();
    let mut current = vec![0.0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = (i + 1) as f64 * DELETE_COST;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = previous[j] + costs.cost(ca, cb);
            let delete = previous[j + 1] + DELETE_COST;
            let insert = current[j] + INSERT_COST;
            current[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings_have_zero_distance() {
        for s in ["a", "clubhouse", "שלום", "בניין 3"] {
            assert!(close(weighted_edit_distance(s, s), 0.0), "{s}");
        }
    }

    #[test]
    fn empty_input_is_no_match() {
        assert!(close(weighted_edit_distance("", "gym"), NO_MATCH_DISTANCE));
        assert!(close(weighted_edit_distance("gym", ""), NO_MATCH_DISTANCE));
        assert!(close(weighted_edit_distance("", ""), NO_MATCH_DISTANCE));
    }

    #[test]
    fn plain_edits_cost_one() {
        assert!(close(weighted_edit_distance("pool", "pol"), 1.0));
        assert!(close(weighted_edit_distance("pool", "pools"), 1.0));
        assert!(close(weighted_edit_distance("pool", "poll"), 1.0));
        assert!(close(weighted_edit_distance("kitten", "sitting"), 3.0));
    }

    #[test]
    fn final_form_swap_is_cheaper_than_unrelated_swap() {
        // final mem typed as regular mem
        let final_form = weighted_edit_distance("שלום", "שלומ");
        let unrelated = weighted_edit_distance("שלום", "שלוא");

        assert!(close(final_form, FINAL_FORM_COST));
        assert!(close(unrelated, 1.0));
        assert!(final_form < unrelated);
    }

    #[test]
    fn phonetic_swap_sits_between_final_form_and_unrelated() {
        // samekh and shin sound alike
        let phonetic = weighted_edit_distance("סער", "שער");

        assert!(close(phonetic, PHONETIC_COST));
        assert!(phonetic > FINAL_FORM_COST && phonetic < 1.0);
    }

    #[test]
    fn costs_are_symmetric() {
        let costs = SubstitutionCosts::hebrew();
        assert!(close(costs.cost('ך', 'כ'), costs.cost('כ', 'ך')));
        assert!(close(
            weighted_edit_distance("מרכז", "מרקז"),
            weighted_edit_distance("מרקז", "מרכז")
        ));
    }

    #[test]
    fn custom_pairs_override_the_default() {
        let costs = SubstitutionCosts::uniform().with_pair('o', '0', 0.2);

        assert!(close(weighted_edit_distance_with("g0lf", "golf", &costs), 0.2));
        assert!(close(
            weighted_edit_distance_with("g0lf", "golf", &SubstitutionCosts::uniform()),
            1.0
        ));
    }

    #[test]
    fn out_of_range_costs_are_clamped() {
        let costs = SubstitutionCosts::uniform()
            .with_pair('a', 'b', 5.0)
            .with_pair('c', 'd', -1.0);

        assert!(close(costs.cost('a', 'b'), 1.0));
        assert!(close(costs.cost('c', 'd'), 0.0));
        assert_eq!(costs.len(), 2);
    }
}
