//! Positive integers under divisibility, as a thin category
//!
//! There is at most one morphism `a → b`, present exactly when `a`
//! divides `b`. Pullbacks are greatest common divisors and pushouts are
//! least common multiples, and every mediator is unique because the
//! category is thin. That makes this the simplest honest client for
//! exercising the uniqueness-sensitive combinators (pasting and its
//! cancellation direction in particular).

use serde::{Deserialize, Serialize};

use crate::category::{Category, HasPullbacks, HasPushouts};
use crate::cone::{PullbackCone, PushoutCocone};
use crate::diagram::{CospanDiagram, SpanDiagram};
use crate::error::LimitError;
use crate::universal::{FastPath, PullbackWitness, PushoutWitness};

/// The divisibility category on positive integers
#[derive(Debug, Clone, Default)]
pub struct DivLattice;

/// The unique morphism `from → to`, inhabited only when `from | to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivArrow {
    /// The dividing endpoint
    pub from: u64,
    /// The divided endpoint
    pub to: u64,
}

impl DivArrow {
    /// The morphism `from → to`, if `from` divides `to`
    pub fn hom(from: u64, to: u64) -> Option<Self> {
        if from != 0 && to != 0 && to % from == 0 {
            Some(DivArrow { from, to })
        } else {
            None
        }
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

impl Category for DivLattice {
    type Object = u64;
    type Morphism = DivArrow;

    fn domain(&self, f: &Self::Morphism) -> Self::Object {
        f.from
    }

    fn codomain(&self, f: &Self::Morphism) -> Self::Object {
        f.to
    }

    fn identity(&self, obj: &Self::Object) -> Self::Morphism {
        DivArrow {
            from: *obj,
            to: *obj,
        }
    }

    fn compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> Option<Self::Morphism> {
        if f.to != g.from {
            return None;
        }
        // Divisibility is transitive, so the composite always exists
        Some(DivArrow {
            from: f.from,
            to: g.to,
        })
    }

    fn inverse(&self, f: &Self::Morphism) -> Option<Self::Morphism> {
        // Mutual divisibility of positive integers forces equality
        if f.from == f.to {
            Some(*f)
        } else {
            None
        }
    }

    // Every arrow in a thin category is both monic and epic
    fn is_mono(&self, _f: &Self::Morphism) -> bool {
        true
    }

    fn is_epi(&self, _f: &Self::Morphism) -> bool {
        true
    }
}

impl HasPullbacks for DivLattice {
    fn pullback(&self, diagram: &CospanDiagram<Self>) -> Result<PullbackWitness<Self>, LimitError> {
        let a = *diagram.left_foot();
        let b = *diagram.right_foot();
        let meet = gcd(a, b);

        let left_leg = DivArrow { from: meet, to: a };
        let right_leg = DivArrow { from: meet, to: b };

        PullbackWitness::from_parts(
            self,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::Generic,
            move |_category: &DivLattice, competitor: &PullbackCone<DivLattice>| {
                // Anything below both feet divides their gcd
                DivArrow::hom(*competitor.apex(), meet)
            },
        )
    }
}

impl HasPushouts for DivLattice {
    fn pushout(&self, diagram: &SpanDiagram<Self>) -> Result<PushoutWitness<Self>, LimitError> {
        let a = *diagram.left_head();
        let b = *diagram.right_head();
        let join = lcm(a, b);

        let left_leg = DivArrow { from: a, to: join };
        let right_leg = DivArrow { from: b, to: join };

        PushoutWitness::from_parts(
            self,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::Generic,
            move |_category: &DivLattice, competitor: &PushoutCocone<DivLattice>| {
                // Anything above both heads is divided by their lcm
                DivArrow::hom(join, *competitor.apex())
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::laws::{verify_category_laws, verify_inverses};

    #[test]
    fn divisibility_satisfies_category_laws() {
        let category = DivLattice;
        let objects = vec![2, 6, 12];
        let morphisms = vec![
            (DivArrow::hom(2, 6).unwrap(), 0, 1),
            (DivArrow::hom(6, 12).unwrap(), 1, 2),
            (DivArrow::hom(2, 12).unwrap(), 0, 2),
        ];
        assert!(verify_category_laws(&category, &objects, &morphisms));
    }

    #[test]
    fn hom_exists_only_for_divisors() {
        assert!(DivArrow::hom(3, 12).is_some());
        assert!(DivArrow::hom(5, 12).is_none());
        assert!(DivArrow::hom(0, 12).is_none());
    }

    #[test]
    fn only_identities_are_invertible() {
        let category = DivLattice;
        assert!(category.inverse(&DivArrow::hom(4, 4).unwrap()).is_some());
        assert!(category.inverse(&DivArrow::hom(4, 8).unwrap()).is_none());

        let morphisms = vec![
            DivArrow::hom(4, 4).unwrap(),
            DivArrow::hom(4, 8).unwrap(),
            DivArrow::hom(3, 9).unwrap(),
        ];
        assert!(verify_inverses(&category, &morphisms));
    }

    #[test]
    fn gcd_and_lcm_agree_with_the_lattice() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(lcm(4, 6), 12);
    }
}
