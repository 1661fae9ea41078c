//! Canonical isomorphisms between universal witnesses
//!
//! Two witnesses that are universal for the same diagram have isomorphic
//! apexes, and the isomorphism is canonical: each direction is the unique
//! mediator obtained by factoring one witness's cone through the other,
//! and the round trips equal the identities because an endomorphism
//! satisfying the leg equations must equal the identity (the identity
//! satisfies them too).

use crate::category::Category;
use crate::error::LimitError;
use crate::universal::{PullbackWitness, PushoutWitness};

/// A pair of mutually inverse morphisms between two objects.
pub struct IsoWitness<C: Category> {
    hom: C::Morphism,
    inv: C::Morphism,
}

// Manual impls: the derived versions would add spurious `C: Clone` /
// `C: Debug` / `C: PartialEq` bounds, but only the associated types
// (which `Category` already bounds) appear in the fields.
impl<C: Category> Clone for IsoWitness<C> {
    fn clone(&self) -> Self {
        IsoWitness {
            hom: self.hom.clone(),
            inv: self.inv.clone(),
        }
    }
}

impl<C: Category> std::fmt::Debug for IsoWitness<C> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("IsoWitness")
            .field("hom", &self.hom)
            .field("inv", &self.inv)
            .finish()
    }
}

impl<C: Category> PartialEq for IsoWitness<C> {
    fn eq(&self, other: &Self) -> bool {
        self.hom == other.hom && self.inv == other.inv
    }
}

impl<C: Category> IsoWitness<C> {
    /// Build an isomorphism witness, checking both round trips against
    /// the identities.
    pub fn new(category: &C, hom: C::Morphism, inv: C::Morphism) -> Result<Self, LimitError> {
        let id_dom = category.identity(&category.domain(&hom));
        let id_cod = category.identity(&category.codomain(&hom));

        if category.compose(&hom, &inv) != Some(id_dom) {
            return Err(LimitError::NotAnIsomorphism(format!(
                "hom ; inv is not the identity: {:?} ; {:?}",
                hom, inv
            )));
        }
        if category.compose(&inv, &hom) != Some(id_cod) {
            return Err(LimitError::NotAnIsomorphism(format!(
                "inv ; hom is not the identity: {:?} ; {:?}",
                inv, hom
            )));
        }
        Ok(IsoWitness { hom, inv })
    }

    /// The forward direction
    pub fn hom(&self) -> &C::Morphism {
        &self.hom
    }

    /// The backward direction
    pub fn inv(&self) -> &C::Morphism {
        &self.inv
    }

    /// The same isomorphism pointing the other way
    pub fn reverse(&self) -> Self {
        IsoWitness {
            hom: self.inv.clone(),
            inv: self.hom.clone(),
        }
    }
}

/// The cone point of a pullback is unique up to canonical isomorphism:
/// given two witnesses for the *same* cospan diagram, produce the
/// isomorphism `apex(u2) → apex(u1)` determined by their factorizations.
///
/// Direction convention: `hom` is `u1.factor_through(u2.cone())`, the
/// mediator from `u2`'s apex into `u1`'s.
pub fn pullback_point_iso<C: Category>(
    category: &C,
    u1: &PullbackWitness<C>,
    u2: &PullbackWitness<C>,
) -> Result<IsoWitness<C>, LimitError> {
    if u1.diagram() != u2.diagram() {
        return Err(LimitError::DiagramMismatch(format!(
            "{:?} vs {:?}",
            u1.diagram(),
            u2.diagram()
        )));
    }

    let hom = u1.factor_through(category, u2.cone())?;
    let inv = u2.factor_through(category, u1.cone())?;

    // hom ; inv is an endo-mediator of u2's own cone; so is the identity.
    // Uniqueness forces both round trips onto the identities.
    let round2 = category
        .compose(&hom, &inv)
        .ok_or_else(|| LimitError::ComposeFailed("hom ; inv".to_string()))?;
    u2.unique_mediator(
        category,
        u2.cone(),
        &round2,
        &category.identity(u2.apex()),
    )?;

    let round1 = category
        .compose(&inv, &hom)
        .ok_or_else(|| LimitError::ComposeFailed("inv ; hom".to_string()))?;
    u1.unique_mediator(
        category,
        u1.cone(),
        &round1,
        &category.identity(u1.apex()),
    )?;

    IsoWitness::new(category, hom, inv)
}

/// Dual of [`pullback_point_iso`]: the cocone point of a pushout is
/// unique up to canonical isomorphism. `hom` is the mediator
/// `apex(u1) → apex(u2)` obtained from `u1`'s factorization.
pub fn pushout_point_iso<C: Category>(
    category: &C,
    u1: &PushoutWitness<C>,
    u2: &PushoutWitness<C>,
) -> Result<IsoWitness<C>, LimitError> {
    if u1.diagram() != u2.diagram() {
        return Err(LimitError::DiagramMismatch(format!(
            "{:?} vs {:?}",
            u1.diagram(),
            u2.diagram()
        )));
    }

    let hom = u1.factor_through(category, u2.cocone())?;
    let inv = u2.factor_through(category, u1.cocone())?;

    let round1 = category
        .compose(&hom, &inv)
        .ok_or_else(|| LimitError::ComposeFailed("hom ; inv".to_string()))?;
    u1.unique_mediator(
        category,
        u1.cocone(),
        &round1,
        &category.identity(u1.apex()),
    )?;

    let round2 = category
        .compose(&inv, &hom)
        .ok_or_else(|| LimitError::ComposeFailed("inv ; hom".to_string()))?;
    u2.unique_mediator(
        category,
        u2.cocone(),
        &round2,
        &category.identity(u2.apex()),
    )?;

    IsoWitness::new(category, hom, inv)
}
