//! The abstract category this crate is parameterized over
//!
//! Objects and morphisms are associated types of the [`Category`] trait;
//! composition is partial (`Option`) because composability is a runtime
//! question for most concrete categories. The limit-construction layer
//! consumes this trait together with the [`HasPullbacks`]/[`HasPushouts`]
//! solver seams and the arrow-class predicates used by its fast paths.

use std::fmt::Debug;

use crate::diagram::{CospanDiagram, SpanDiagram};
use crate::error::LimitError;
use crate::universal::{PullbackWitness, PushoutWitness};

/// A category consists of objects and morphisms between them.
///
/// Morphisms require `PartialEq`: every invariant in this crate
/// (commuting squares, leg equations, uniqueness of mediators) is
/// verified by composing morphisms and comparing the results.
pub trait Category {
    /// The type representing objects in this category
    type Object: Clone + Debug + PartialEq;

    /// The type representing morphisms between objects
    type Morphism: Clone + Debug + PartialEq;

    /// The domain (source) of a morphism
    fn domain(&self, f: &Self::Morphism) -> Self::Object;

    /// The codomain (target) of a morphism
    fn codomain(&self, f: &Self::Morphism) -> Self::Object;

    /// The identity morphism for a given object
    fn identity(&self, obj: &Self::Object) -> Self::Morphism;

    /// Composition of morphisms f and g, where f goes from A to B, and g goes
    /// from B to C. The result is a morphism from A to C.
    ///
    /// Returns None if the morphisms cannot be composed (i.e., if codomain of
    /// f ≠ domain of g)
    fn compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> Option<Self::Morphism>;

    /// Helper function to verify objects are equal for composition
    fn can_compose(&self, f: &Self::Morphism, g: &Self::Morphism) -> bool {
        self.codomain(f) == self.domain(g)
    }

    /// The two-sided inverse of a morphism, when one is known.
    ///
    /// The default is `None`; concrete categories override this when they
    /// can decide invertibility. The universal-construction layer only uses
    /// the answer to select fast paths, never for correctness.
    fn inverse(&self, _f: &Self::Morphism) -> Option<Self::Morphism> {
        None
    }

    /// Whether a morphism is an isomorphism
    fn is_iso(&self, f: &Self::Morphism) -> bool {
        self.inverse(f).is_some()
    }

    /// Whether a morphism is a monomorphism. Conservative default.
    fn is_mono(&self, _f: &Self::Morphism) -> bool {
        false
    }

    /// Whether a morphism is an epimorphism. Conservative default.
    fn is_epi(&self, _f: &Self::Morphism) -> bool {
        false
    }
}

/// A category that can solve the cospan limit: the underlying "has-limit"
/// primitive the universality layer repackages.
///
/// The returned witness must already satisfy the cone invariants; the
/// construction layer re-verifies every mediator the witness produces, so
/// a misbehaving solver surfaces as [`LimitError::BadMediator`] at the call
/// site rather than as a silently wrong square.
pub trait HasPullbacks: Category + Sized {
    /// Produce the canonical limiting cone for a cospan diagram
    fn pullback(&self, diagram: &CospanDiagram<Self>) -> Result<PullbackWitness<Self>, LimitError>;
}

/// Dual of [`HasPullbacks`]: the span colimit primitive.
pub trait HasPushouts: Category + Sized {
    /// Produce the canonical colimiting cocone for a span diagram
    fn pushout(&self, diagram: &SpanDiagram<Self>) -> Result<PushoutWitness<Self>, LimitError>;
}

/// Verification of category laws over finite test data
pub mod laws {
    use super::*;

    /// Verify the category laws for a given category and collection of test
    /// objects and morphisms
    pub fn verify_category_laws<C: Category>(
        category: &C,
        test_objects: &[C::Object],
        test_morphisms: &[(C::Morphism, usize, usize)], // morphism, source_idx, target_idx
    ) -> bool {
        // Identity law: id_B ∘ f = f = f ∘ id_A for f: A → B
        let identity_law = test_morphisms.iter().all(|(f, src_idx, tgt_idx)| {
            let src = &test_objects[*src_idx];
            let tgt = &test_objects[*tgt_idx];

            let id_src = category.identity(src);
            let id_tgt = category.identity(tgt);

            if let Some(f_id_src) = category.compose(&id_src, f) {
                if let Some(id_tgt_f) = category.compose(f, &id_tgt) {
                    return f_id_src == *f && id_tgt_f == *f;
                }
            }
            false
        });

        // Generate composable morphism triples for associativity test
        let mut composable_triples = Vec::new();
        for (f, _f_src, f_tgt) in test_morphisms {
            for (g, g_src, g_tgt) in test_morphisms {
                for (h, h_src, _h_tgt) in test_morphisms {
                    if test_objects[*f_tgt] == test_objects[*g_src]
                        && test_objects[*g_tgt] == test_objects[*h_src]
                    {
                        composable_triples.push((f, g, h));
                    }
                }
            }
        }

        // Associativity law: h ∘ (g ∘ f) = (h ∘ g) ∘ f
        let associativity_law = composable_triples.iter().all(|(f, g, h)| {
            if let Some(g_f) = category.compose(f, g) {
                if let Some(h_g) = category.compose(g, h) {
                    if let Some(lhs) = category.compose(&g_f, h) {
                        if let Some(rhs) = category.compose(f, &h_g) {
                            return lhs == rhs;
                        }
                    }
                }
            }
            // Inconclusive if the chain cannot be composed
            true
        });

        identity_law && associativity_law
    }

    /// Verify that claimed inverses really are two-sided inverses for a
    /// collection of test morphisms
    pub fn verify_inverses<C: Category>(category: &C, test_morphisms: &[C::Morphism]) -> bool {
        test_morphisms.iter().all(|f| match category.inverse(f) {
            None => true,
            Some(f_inv) => {
                let id_dom = category.identity(&category.domain(f));
                let id_cod = category.identity(&category.codomain(f));

                let left = category.compose(f, &f_inv);
                let right = category.compose(&f_inv, f);

                left == Some(id_dom) && right == Some(id_cod)
            }
        })
    }
}
