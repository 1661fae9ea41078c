//! The category of finite sets and functions
//!
//! Objects are finite sets of `usize`, morphisms are total functions
//! between them. Pullbacks are computed as the subset of the cartesian
//! product where the two arms agree, pushouts as the quotient of the
//! tagged disjoint union by the relation generated by `f(a) ~ g(a)`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, HasPullbacks, HasPushouts};
use crate::cone::{PullbackCone, PushoutCocone};
use crate::diagram::{CospanDiagram, SpanDiagram};
use crate::error::LimitError;
use crate::universal::{FastPath, PullbackWitness, PushoutWitness};

/// Encoding base for pairs: the pair (x, y) is stored as x * N + y.
/// Large enough for the element ranges used in tests and examples.
const N: usize = 10000;

/// The category of finite sets and functions between them
#[derive(Debug, Clone, Default)]
pub struct FinSet;

/// A finite set of integers, kept sorted and deduplicated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiniteSet {
    /// The elements of the set
    pub elements: Vec<usize>,
}

impl FiniteSet {
    /// Create a new finite set with the given elements
    pub fn new(elements: Vec<usize>) -> Self {
        let mut unique_elements = elements;
        unique_elements.sort_unstable();
        unique_elements.dedup();
        FiniteSet {
            elements: unique_elements,
        }
    }

    /// Create an empty set
    pub fn empty() -> Self {
        FiniteSet {
            elements: Vec::new(),
        }
    }

    /// Create a singleton set containing just one element
    pub fn singleton(element: usize) -> Self {
        FiniteSet {
            elements: vec![element],
        }
    }

    /// Create a set containing a range of integers
    pub fn range(start: usize, end: usize) -> Self {
        FiniteSet {
            elements: (start..end).collect(),
        }
    }

    /// The cardinality (size) of the set
    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    /// Check if the set contains a given element
    pub fn contains(&self, element: usize) -> bool {
        self.elements.binary_search(&element).is_ok()
    }
}

/// A function between finite sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetFunction {
    /// The domain (source) of the function
    pub domain: FiniteSet,
    /// The codomain (target) of the function
    pub codomain: FiniteSet,
    /// The element-wise mapping
    pub mapping: HashMap<usize, usize>,
}

impl SetFunction {
    /// Create a new function between finite sets.
    ///
    /// Returns None if the mapping is not total on the domain or maps
    /// outside the codomain.
    pub fn new(
        domain: FiniteSet,
        codomain: FiniteSet,
        mapping: HashMap<usize, usize>,
    ) -> Option<Self> {
        for (&x, &y) in mapping.iter() {
            if !domain.contains(x) || !codomain.contains(y) {
                return None;
            }
        }
        for &x in domain.elements.iter() {
            if !mapping.contains_key(&x) {
                return None;
            }
        }
        Some(SetFunction {
            domain,
            codomain,
            mapping,
        })
    }

    /// Build a function from a closure over the domain elements.
    ///
    /// Returns None if the closure maps some element outside the codomain.
    pub fn from_fn<F>(domain: FiniteSet, codomain: FiniteSet, f: F) -> Option<Self>
    where
        F: Fn(usize) -> usize,
    {
        let mut mapping = HashMap::new();
        for &x in domain.elements.iter() {
            let y = f(x);
            if !codomain.contains(y) {
                return None;
            }
            mapping.insert(x, y);
        }
        Some(SetFunction {
            domain,
            codomain,
            mapping,
        })
    }

    /// Apply the function to an element of the domain
    pub fn apply(&self, element: usize) -> Option<usize> {
        self.mapping.get(&element).copied()
    }

    /// The identity function on a set
    pub fn identity(set: &FiniteSet) -> Self {
        let mapping = set.elements.iter().map(|&x| (x, x)).collect();
        SetFunction {
            domain: set.clone(),
            codomain: set.clone(),
            mapping,
        }
    }

    /// Whether the function is injective
    pub fn is_injective(&self) -> bool {
        let mut seen = Vec::with_capacity(self.mapping.len());
        for &y in self.mapping.values() {
            if seen.contains(&y) {
                return false;
            }
            seen.push(y);
        }
        true
    }

    /// Whether the function is surjective
    pub fn is_surjective(&self) -> bool {
        self.codomain
            .elements
            .iter()
            .all(|y| self.mapping.values().any(|v| v == y))
    }
}

impl Category for FinSet {
    type Object = FiniteSet;
    type Morphism = SetFunction;

    fn domain(&self, f: &Self::Morphism) -> Self::Object {
        f.domain.clone()
    }

    fn codomain(&self, f: &Self::Morphism) -> Self::Object {
        f.codomain.clone()
    }

    fn identity(&self, obj: &Self::Object) -> Self::Morphism {
        SetFunction::identity(obj)
    }

    fn compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> Option<Self::Morphism> {
        if f.codomain != g.domain {
            return None;
        }
        let mut mapping = HashMap::new();
        for &x in f.domain.elements.iter() {
            let y = f.apply(x)?;
            let z = g.apply(y)?;
            mapping.insert(x, z);
        }
        Some(SetFunction {
            domain: f.domain.clone(),
            codomain: g.codomain.clone(),
            mapping,
        })
    }

    fn inverse(&self, f: &Self::Morphism) -> Option<Self::Morphism> {
        if !f.is_injective() || !f.is_surjective() {
            return None;
        }
        let mapping = f.mapping.iter().map(|(&x, &y)| (y, x)).collect();
        Some(SetFunction {
            domain: f.codomain.clone(),
            codomain: f.domain.clone(),
            mapping,
        })
    }

    fn is_mono(&self, f: &Self::Morphism) -> bool {
        f.is_injective()
    }

    fn is_epi(&self, f: &Self::Morphism) -> bool {
        f.is_surjective()
    }
}

impl HasPullbacks for FinSet {
    fn pullback(&self, diagram: &CospanDiagram<Self>) -> Result<PullbackWitness<Self>, LimitError> {
        let f = diagram.left_arm();
        let g = diagram.right_arm();

        // Apex: encoded pairs (x, y) with f(x) = g(y)
        let mut apex_elements = Vec::new();
        let mut to_left = HashMap::new();
        let mut to_right = HashMap::new();
        for &x in f.domain.elements.iter() {
            for &y in g.domain.elements.iter() {
                if f.apply(x) == g.apply(y) {
                    let pair = x * N + y;
                    apex_elements.push(pair);
                    to_left.insert(pair, x);
                    to_right.insert(pair, y);
                }
            }
        }
        let apex = FiniteSet::new(apex_elements);

        let left_leg = SetFunction {
            domain: apex.clone(),
            codomain: f.domain.clone(),
            mapping: to_left,
        };
        let right_leg = SetFunction {
            domain: apex.clone(),
            codomain: g.domain.clone(),
            mapping: to_right,
        };

        PullbackWitness::from_parts(
            self,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::Generic,
            move |_category: &FinSet, competitor: &PullbackCone<FinSet>| {
                // w ↦ (q1(w), q2(w)), encoded
                let mut mapping = HashMap::new();
                for &w in competitor.apex().elements.iter() {
                    let x = competitor.left_leg().apply(w)?;
                    let y = competitor.right_leg().apply(w)?;
                    mapping.insert(w, x * N + y);
                }
                Some(SetFunction {
                    domain: competitor.apex().clone(),
                    codomain: apex.clone(),
                    mapping,
                })
            },
        )
    }
}

/// Union-find over encoded disjoint-union elements
fn find(parent: &mut HashMap<usize, usize>, mut e: usize) -> usize {
    while parent[&e] != e {
        let grand = parent[&parent[&e]];
        parent.insert(e, grand);
        e = grand;
    }
    e
}

fn union(parent: &mut HashMap<usize, usize>, a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Keep the smaller element as representative
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent.insert(hi, lo);
    }
}

impl HasPushouts for FinSet {
    fn pushout(&self, diagram: &SpanDiagram<Self>) -> Result<PushoutWitness<Self>, LimitError> {
        let f = diagram.left_arm();
        let g = diagram.right_arm();

        // Tagged disjoint union: y ↦ 2y, z ↦ 2z + 1
        let mut parent: HashMap<usize, usize> = HashMap::new();
        for &y in f.codomain.elements.iter() {
            parent.insert(2 * y, 2 * y);
        }
        for &z in g.codomain.elements.iter() {
            parent.insert(2 * z + 1, 2 * z + 1);
        }

        // Glue along the span root: f(a) ~ g(a)
        for &a in diagram.root_object().elements.iter() {
            let fa = f.apply(a).ok_or_else(|| {
                LimitError::ComposeFailed(format!("left arm undefined at {}", a))
            })?;
            let ga = g.apply(a).ok_or_else(|| {
                LimitError::ComposeFailed(format!("right arm undefined at {}", a))
            })?;
            union(&mut parent, 2 * fa, 2 * ga + 1);
        }

        // Class representatives become the apex elements
        let members: Vec<usize> = parent.keys().copied().collect();
        let mut class_of: HashMap<usize, usize> = HashMap::new();
        for e in members {
            let r = find(&mut parent, e);
            class_of.insert(e, r);
        }
        let apex = FiniteSet::new(class_of.values().copied().collect());

        let left_mapping = f
            .codomain
            .elements
            .iter()
            .map(|&y| (y, class_of[&(2 * y)]))
            .collect();
        let right_mapping = g
            .codomain
            .elements
            .iter()
            .map(|&z| (z, class_of[&(2 * z + 1)]))
            .collect();

        let left_leg = SetFunction {
            domain: f.codomain.clone(),
            codomain: apex.clone(),
            mapping: left_mapping,
        };
        let right_leg = SetFunction {
            domain: g.codomain.clone(),
            codomain: apex.clone(),
            mapping: right_mapping,
        };

        PushoutWitness::from_parts(
            self,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::Generic,
            move |_category: &FinSet, competitor: &PushoutCocone<FinSet>| {
                // A cocone is constant on glued classes, so mapping each
                // representative through any member is well-defined.
                let mut mapping = HashMap::new();
                for (&e, &r) in class_of.iter() {
                    let value = if e % 2 == 0 {
                        competitor.left_leg().apply(e / 2)?
                    } else {
                        competitor.right_leg().apply((e - 1) / 2)?
                    };
                    if let Some(&previous) = mapping.get(&r) {
                        if previous != value {
                            return None;
                        }
                    }
                    mapping.insert(r, value);
                }
                Some(SetFunction {
                    domain: apex.clone(),
                    codomain: competitor.apex().clone(),
                    mapping,
                })
            },
        )
    }
}
