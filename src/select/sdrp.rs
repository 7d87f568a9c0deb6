//! Strike/dip/rake/probability selection from a crustal domain table.
//!
//! Selectors:
//! - `case1` / `case2`: every mechanism of the case, in table order
//! - `mean_case1` / `mean_case2`: the most probable mechanism, reweighted to 1
//! - `all` / `mean_all`: the two cases (or their most probable mechanisms)
//!   combined with [`blend`]
//!
//! The magnitude-length tag is `>45` above Mw 7.5 and `>15` otherwise; a
//! case without a `>45` entry falls back to `>15`.

use crate::domain::{FocalMechanism, ModelSelector};
use crate::models::{CaseTable, DomainTable};

/// Above this magnitude the long-rupture (`>45`) mechanisms apply.
pub const LONG_RUPTURE_MW: f64 = 7.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    One,
    Two,
}

pub fn select_sdrp(
    table: &DomainTable,
    magnitude: f64,
    selector: ModelSelector,
) -> Vec<FocalMechanism> {
    match selector {
        ModelSelector::Case1 => case_mechanisms(table, Case::One, magnitude).to_vec(),
        ModelSelector::Case2 => case_mechanisms(table, Case::Two, magnitude).to_vec(),
        ModelSelector::MeanCase1 => most_probable(case_mechanisms(table, Case::One, magnitude)),
        ModelSelector::MeanCase2 => most_probable(case_mechanisms(table, Case::Two, magnitude)),
        ModelSelector::All => blend(
            select_sdrp(table, magnitude, ModelSelector::Case1),
            select_sdrp(table, magnitude, ModelSelector::Case2),
        ),
        ModelSelector::MeanAll => blend(
            select_sdrp(table, magnitude, ModelSelector::MeanCase1),
            select_sdrp(table, magnitude, ModelSelector::MeanCase2),
        ),
    }
}

fn case_mechanisms(table: &DomainTable, case: Case, magnitude: f64) -> &[FocalMechanism] {
    let case_table = match case {
        Case::One => &table.case1,
        Case::Two => &table.case2,
    };
    tagged(case_table, magnitude)
}

fn tagged(case: &CaseTable, magnitude: f64) -> &[FocalMechanism] {
    match (&case.over_45, magnitude > LONG_RUPTURE_MW) {
        (Some(long), true) => long.as_slice(),
        _ => case.over_15.as_slice(),
    }
}

/// Highest-probability mechanism (first on ties) with probability 1.0.
///
/// Empty input yields an empty result.
pub fn most_probable(mechanisms: &[FocalMechanism]) -> Vec<FocalMechanism> {
    let best = mechanisms.iter().fold(None::<&FocalMechanism>, |best, m| match best {
        Some(b) if b.probability >= m.probability => Some(b),
        _ => Some(m),
    });
    best.map(|m| vec![m.with_probability(1.0)]).unwrap_or_default()
}

/// Combine two mechanism lists.
///
/// Identical lists are returned once, unchanged. Otherwise `b` is appended
/// to `a` and every probability is halved; the result is not renormalized.
pub fn blend(a: Vec<FocalMechanism>, b: Vec<FocalMechanism>) -> Vec<FocalMechanism> {
    if a == b {
        return a;
    }
    a.into_iter()
        .chain(b)
        .map(|m| m.with_probability(m.probability * 0.5))
        .collect()
}
