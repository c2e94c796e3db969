//! Root canal indices
//!
//! The family's root canal indices are the real roots of
//! `I*x^2 + B*x - M = 0`, where `I`, `B` and `M` are the family-wide counts
//! of incisors, bicuspids and missing teeth.
//!
//! The constant term is `-M`, so the discriminant is `B^2 + 4*I*M`.

use std::fmt;

use crate::core::tooth::ToothTag;

/// Family-wide tooth counts by tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagTotals {
    pub incisors: u32,
    pub bicuspids: u32,
    pub missing: u32,
}

impl TagTotals {
    pub fn new(incisors: u32, bicuspids: u32, missing: u32) -> Self {
        Self {
            incisors,
            bicuspids,
            missing,
        }
    }

    /// Count one more tooth
    pub fn add(&mut self, tag: ToothTag) {
        match tag {
            ToothTag::Incisor => self.incisors += 1,
            ToothTag::Bicuspid => self.bicuspids += 1,
            ToothTag::Missing => self.missing += 1,
        }
    }

    /// Solve the root canal equation for these counts
    pub fn root_canal_indices(&self) -> RootCanalIndices {
        RootCanalIndices::solve(*self)
    }
}

/// Outcome of solving the root canal equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootCanalIndices {
    /// All coefficients are zero; every x solves 0 = 0
    Infinite,
    /// Equation reduces to `-M = 0` with `M != 0`
    NoRoots { missing: u32 },
    /// Quadratic with a negative discriminant
    NoRealRoots { discriminant: f64 },
    /// Linear case, `x = M / B`
    One(f64),
    /// Quadratic case; first uses `+sqrt(D)`, second `-sqrt(D)`
    Two(f64, f64),
}

impl RootCanalIndices {
    pub fn solve(totals: TagTotals) -> Self {
        let TagTotals {
            incisors: i,
            bicuspids: b,
            missing: m,
        } = totals;

        log::debug!("solving root canal equation with I={i} B={b} M={m}");

        if i == 0 {
            return match (b, m) {
                (0, 0) => RootCanalIndices::Infinite,
                (0, m) => RootCanalIndices::NoRoots { missing: m },
                (b, m) => RootCanalIndices::One(f64::from(m) / f64::from(b)),
            };
        }

        let (i, b, m) = (f64::from(i), f64::from(b), f64::from(m));
        let discriminant = b * b + 4.0 * i * m;
        if discriminant < 0.0 {
            return RootCanalIndices::NoRealRoots { discriminant };
        }

        // `-b` would be -0.0 when there are no bicuspids; keep it +0.0
        let neg_b = 0.0 - b;
        let sqrt_d = discriminant.sqrt();
        RootCanalIndices::Two(
            (neg_b + sqrt_d) / (2.0 * i),
            (neg_b - sqrt_d) / (2.0 * i),
        )
    }
}

impl fmt::Display for RootCanalIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootCanalIndices::Infinite => {
                write!(f, "Infinite number of root canals (all coefficients zero).")
            }
            RootCanalIndices::NoRoots { missing } => {
                write!(f, "No root canals (equation is -{} = 0).", missing)
            }
            RootCanalIndices::NoRealRoots { .. } => {
                write!(f, "No real root canals (discriminant < 0).")
            }
            RootCanalIndices::One(x) => write!(f, "One root canal at     {:.2}", x),
            RootCanalIndices::Two(x1, x2) => {
                writeln!(f, "One root canal at     {:.2}", x1)?;
                write!(f, "Another root canal at {:.2}", x2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_is_infinite() {
        let result = TagTotals::new(0, 0, 0).root_canal_indices();
        assert_eq!(result, RootCanalIndices::Infinite);
        assert_eq!(
            result.to_string(),
            "Infinite number of root canals (all coefficients zero)."
        );
    }

    #[test]
    fn test_only_missing_has_no_roots() {
        let result = TagTotals::new(0, 0, 5).root_canal_indices();
        assert_eq!(result, RootCanalIndices::NoRoots { missing: 5 });
        assert_eq!(result.to_string(), "No root canals (equation is -5 = 0).");
    }

    #[test]
    fn test_linear_case() {
        let result = TagTotals::new(0, 2, 6).root_canal_indices();
        assert_eq!(result, RootCanalIndices::One(3.0));
        assert_eq!(result.to_string(), "One root canal at     3.00");
    }

    #[test]
    fn test_linear_case_without_missing() {
        let result = TagTotals::new(0, 4, 0).root_canal_indices();
        assert_eq!(result.to_string(), "One root canal at     0.00");
    }

    #[test]
    fn test_quadratic_uses_plus_four_im() {
        // I=2 B=1 M=1: D = 1 + 8 = 9, not 1 - 8
        let result = TagTotals::new(2, 1, 1).root_canal_indices();
        assert_eq!(result, RootCanalIndices::Two(0.5, -1.0));
        assert_eq!(
            result.to_string(),
            "One root canal at     0.50\nAnother root canal at -1.00"
        );
    }

    #[test]
    fn test_quadratic_without_bicuspids_or_missing() {
        let result = TagTotals::new(3, 0, 0).root_canal_indices();
        assert_eq!(
            result.to_string(),
            "One root canal at     0.00\nAnother root canal at 0.00"
        );
    }

    #[test]
    fn test_quadratic_irrational_roots() {
        // 1x^2 + 1x - 1 = 0
        let result = TagTotals::new(1, 1, 1).root_canal_indices();
        assert_eq!(
            result.to_string(),
            "One root canal at     0.62\nAnother root canal at -1.62"
        );
    }

    #[test]
    fn test_solve_is_pure() {
        let totals = TagTotals::new(4, 3, 2);
        assert_eq!(totals.root_canal_indices(), totals.root_canal_indices());
    }

    #[test]
    fn test_add_counts_tags() {
        let mut totals = TagTotals::default();
        for tag in [ToothTag::Incisor, ToothTag::Incisor, ToothTag::Missing] {
            totals.add(tag);
        }
        assert_eq!(totals, TagTotals::new(2, 0, 1));
    }
}
