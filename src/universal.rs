//! Universal witnesses and the universality checker
//!
//! A [`PullbackWitness`] packages a limiting cone together with its
//! factorization function: for every competing cone there is exactly one
//! mediating morphism into the apex commuting with both legs. Existence
//! is delegated to the client category's solver ([`HasPullbacks`]); this
//! layer is responsible for re-verifying the leg equations of every
//! mediator it hands out, and for the uniqueness argument, which for
//! these shapes reduces to comparing two leg composites (a morphism into
//! a pullback is determined by its two projections).
//!
//! When one arm of the diagram is an isomorphism the construction
//! degenerates: the apex is the other foot and the mediator is a computed
//! formula rather than a solver call. The [`FastPath`] tag records which
//! of the three construction routes produced a witness.

use std::fmt;
use std::rc::Rc;

use crate::category::{Category, HasPullbacks, HasPushouts};
use crate::cone::{PullbackCone, PushoutCocone};
use crate::diagram::{CospanDiagram, SpanDiagram};
use crate::error::LimitError;

/// Which construction route produced a witness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastPath {
    /// The client category's generic limit solver
    Generic,
    /// The left arm is an isomorphism; the apex is the right foot
    LeftIso,
    /// The right arm is an isomorphism; the apex is the left foot
    RightIso,
}

type PullbackFactorizer<C> =
    dyn Fn(&C, &PullbackCone<C>) -> Option<<C as Category>::Morphism>;

type PushoutFactorizer<C> =
    dyn Fn(&C, &PushoutCocone<C>) -> Option<<C as Category>::Morphism>;

/// A limiting cone for a cospan diagram, with its factorization function.
pub struct PullbackWitness<C: Category> {
    diagram: CospanDiagram<C>,
    cone: PullbackCone<C>,
    path: FastPath,
    factor: Rc<PullbackFactorizer<C>>,
}

impl<C: Category> Clone for PullbackWitness<C> {
    fn clone(&self) -> Self {
        PullbackWitness {
            diagram: self.diagram.clone(),
            cone: self.cone.clone(),
            path: self.path,
            factor: Rc::clone(&self.factor),
        }
    }
}

impl<C: Category> fmt::Debug for PullbackWitness<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PullbackWitness")
            .field("diagram", &self.diagram)
            .field("cone", &self.cone)
            .field("path", &self.path)
            .finish()
    }
}

impl<C: Category> PullbackWitness<C> {
    /// Wrap an externally-solved cone and factorizer into a witness.
    ///
    /// The cone is re-verified against the diagram; the factorizer is
    /// trusted for existence only, since [`factor_through`] checks the
    /// leg equations of everything it produces.
    ///
    /// [`factor_through`]: PullbackWitness::factor_through
    pub fn from_parts<F>(
        category: &C,
        diagram: CospanDiagram<C>,
        left_leg: C::Morphism,
        right_leg: C::Morphism,
        path: FastPath,
        factor: F,
    ) -> Result<Self, LimitError>
    where
        F: Fn(&C, &PullbackCone<C>) -> Option<C::Morphism> + 'static,
    {
        let cone = PullbackCone::new(category, &diagram, left_leg, right_leg)?;
        Ok(PullbackWitness {
            diagram,
            cone,
            path,
            factor: Rc::new(factor),
        })
    }

    /// Build the witness for a diagram, dispatching over the three
    /// construction routes: an invertible arm short-circuits to the
    /// degenerate pullback, anything else goes to the solver.
    pub fn for_diagram(category: &C, diagram: &CospanDiagram<C>) -> Result<Self, LimitError>
    where
        C: HasPullbacks,
    {
        let path = if category.is_iso(diagram.left_arm()) {
            FastPath::LeftIso
        } else if category.is_iso(diagram.right_arm()) {
            FastPath::RightIso
        } else {
            FastPath::Generic
        };

        match path {
            FastPath::LeftIso => Self::left_iso(category, diagram),
            FastPath::RightIso => Self::right_iso(category, diagram),
            FastPath::Generic => {
                let witness = category.pullback(diagram)?;
                if witness.diagram != *diagram {
                    return Err(LimitError::DiagramMismatch(
                        "solver returned a witness for a different diagram".to_string(),
                    ));
                }
                Ok(witness)
            }
        }
    }

    /// Degenerate pullback when the left arm `f : X → Z` is invertible:
    /// the apex is `Y` with legs `g ; f⁻¹` and `id_Y`, and the mediator
    /// for any competitor is its right leg.
    pub fn left_iso(category: &C, diagram: &CospanDiagram<C>) -> Result<Self, LimitError> {
        let f_inv = category.inverse(diagram.left_arm()).ok_or_else(|| {
            LimitError::NotAnIsomorphism(format!("{:?}", diagram.left_arm()))
        })?;
        let left_leg = category
            .compose(diagram.right_arm(), &f_inv)
            .ok_or_else(|| LimitError::ComposeFailed("g ; f⁻¹".to_string()))?;
        let right_leg = category.identity(diagram.right_foot());

        Self::from_parts(
            category,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::LeftIso,
            |_category: &C, competitor: &PullbackCone<C>| Some(competitor.right_leg().clone()),
        )
    }

    /// Degenerate pullback when the right arm `g : Y → Z` is invertible:
    /// the apex is `X` with legs `id_X` and `f ; g⁻¹`.
    pub fn right_iso(category: &C, diagram: &CospanDiagram<C>) -> Result<Self, LimitError> {
        let g_inv = category.inverse(diagram.right_arm()).ok_or_else(|| {
            LimitError::NotAnIsomorphism(format!("{:?}", diagram.right_arm()))
        })?;
        let left_leg = category.identity(diagram.left_foot());
        let right_leg = category
            .compose(diagram.left_arm(), &g_inv)
            .ok_or_else(|| LimitError::ComposeFailed("f ; g⁻¹".to_string()))?;

        Self::from_parts(
            category,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::RightIso,
            |_category: &C, competitor: &PullbackCone<C>| Some(competitor.left_leg().clone()),
        )
    }

    /// The diagram this witness is universal for
    pub fn diagram(&self) -> &CospanDiagram<C> {
        &self.diagram
    }

    /// The limiting cone
    pub fn cone(&self) -> &PullbackCone<C> {
        &self.cone
    }

    /// Which construction route produced this witness
    pub fn path(&self) -> FastPath {
        self.path
    }

    /// The apex of the limiting cone
    pub fn apex(&self) -> &C::Object {
        self.cone.apex()
    }

    /// Factor a competing cone through this witness: produce the mediator
    /// `m : apex(competitor) → apex(self)` and verify both leg equations
    /// before handing it out.
    pub fn factor_through(
        &self,
        category: &C,
        competitor: &PullbackCone<C>,
    ) -> Result<C::Morphism, LimitError> {
        let m = (self.factor)(category, competitor).ok_or_else(|| {
            LimitError::NoMediator(format!("competitor apex {:?}", competitor.apex()))
        })?;

        if category.domain(&m) != *competitor.apex() || category.codomain(&m) != *self.apex() {
            return Err(LimitError::BadMediator(format!(
                "mediator {:?} has wrong endpoints",
                m
            )));
        }
        if !self.cone.is_mediated_by(category, &m, competitor) {
            return Err(LimitError::BadMediator(format!(
                "mediator {:?} fails a leg equation",
                m
            )));
        }
        Ok(m)
    }

    /// The uniqueness clause, as an explicit helper: two candidate
    /// mediators for the same competitor that both satisfy the leg
    /// equations must be equal. A morphism into a pullback is determined
    /// by its two projections, so nothing beyond the two leg checks is
    /// needed.
    pub fn unique_mediator(
        &self,
        category: &C,
        competitor: &PullbackCone<C>,
        m1: &C::Morphism,
        m2: &C::Morphism,
    ) -> Result<(), LimitError> {
        if !self.cone.is_mediated_by(category, m1, competitor) {
            return Err(LimitError::BadMediator(format!("{:?}", m1)));
        }
        if !self.cone.is_mediated_by(category, m2, competitor) {
            return Err(LimitError::BadMediator(format!("{:?}", m2)));
        }
        if m1 == m2 {
            Ok(())
        } else {
            Err(LimitError::MediatorNotUnique(format!(
                "{:?} vs {:?}",
                m1, m2
            )))
        }
    }

    /// Check that `m` is *the* mediator for `competitor`, by comparing it
    /// with the canonical one.
    pub fn mediator_agrees(
        &self,
        category: &C,
        competitor: &PullbackCone<C>,
        m: &C::Morphism,
    ) -> Result<(), LimitError> {
        let canonical = self.factor_through(category, competitor)?;
        self.unique_mediator(category, competitor, m, &canonical)
    }
}

/// A colimiting cocone for a span diagram, with its factorization
/// function. Dual to [`PullbackWitness`]: mediators go *out of* the apex.
pub struct PushoutWitness<C: Category> {
    diagram: SpanDiagram<C>,
    cocone: PushoutCocone<C>,
    path: FastPath,
    factor: Rc<PushoutFactorizer<C>>,
}

impl<C: Category> Clone for PushoutWitness<C> {
    fn clone(&self) -> Self {
        PushoutWitness {
            diagram: self.diagram.clone(),
            cocone: self.cocone.clone(),
            path: self.path,
            factor: Rc::clone(&self.factor),
        }
    }
}

impl<C: Category> fmt::Debug for PushoutWitness<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushoutWitness")
            .field("diagram", &self.diagram)
            .field("cocone", &self.cocone)
            .field("path", &self.path)
            .finish()
    }
}

impl<C: Category> PushoutWitness<C> {
    /// Wrap an externally-solved cocone and factorizer into a witness.
    pub fn from_parts<F>(
        category: &C,
        diagram: SpanDiagram<C>,
        left_leg: C::Morphism,
        right_leg: C::Morphism,
        path: FastPath,
        factor: F,
    ) -> Result<Self, LimitError>
    where
        F: Fn(&C, &PushoutCocone<C>) -> Option<C::Morphism> + 'static,
    {
        let cocone = PushoutCocone::new(category, &diagram, left_leg, right_leg)?;
        Ok(PushoutWitness {
            diagram,
            cocone,
            path,
            factor: Rc::new(factor),
        })
    }

    /// Build the witness for a diagram, dispatching over the three
    /// construction routes.
    pub fn for_diagram(category: &C, diagram: &SpanDiagram<C>) -> Result<Self, LimitError>
    where
        C: HasPushouts,
    {
        let path = if category.is_iso(diagram.left_arm()) {
            FastPath::LeftIso
        } else if category.is_iso(diagram.right_arm()) {
            FastPath::RightIso
        } else {
            FastPath::Generic
        };

        match path {
            FastPath::LeftIso => Self::left_iso(category, diagram),
            FastPath::RightIso => Self::right_iso(category, diagram),
            FastPath::Generic => {
                let witness = category.pushout(diagram)?;
                if witness.diagram != *diagram {
                    return Err(LimitError::DiagramMismatch(
                        "solver returned a witness for a different diagram".to_string(),
                    ));
                }
                Ok(witness)
            }
        }
    }

    /// Degenerate pushout when the left arm `f : X → Y` is invertible:
    /// the apex is `Z` with legs `f⁻¹ ; g` and `id_Z`, and the mediator
    /// for any competitor is its right leg.
    pub fn left_iso(category: &C, diagram: &SpanDiagram<C>) -> Result<Self, LimitError> {
        let f_inv = category.inverse(diagram.left_arm()).ok_or_else(|| {
            LimitError::NotAnIsomorphism(format!("{:?}", diagram.left_arm()))
        })?;
        let left_leg = category
            .compose(&f_inv, diagram.right_arm())
            .ok_or_else(|| LimitError::ComposeFailed("f⁻¹ ; g".to_string()))?;
        let right_leg = category.identity(diagram.right_head());

        Self::from_parts(
            category,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::LeftIso,
            |_category: &C, competitor: &PushoutCocone<C>| Some(competitor.right_leg().clone()),
        )
    }

    /// Degenerate pushout when the right arm `g : X → Z` is invertible:
    /// the apex is `Y` with legs `id_Y` and `g⁻¹ ; f`.
    pub fn right_iso(category: &C, diagram: &SpanDiagram<C>) -> Result<Self, LimitError> {
        let g_inv = category.inverse(diagram.right_arm()).ok_or_else(|| {
            LimitError::NotAnIsomorphism(format!("{:?}", diagram.right_arm()))
        })?;
        let left_leg = category.identity(diagram.left_head());
        let right_leg = category
            .compose(&g_inv, diagram.left_arm())
            .ok_or_else(|| LimitError::ComposeFailed("g⁻¹ ; f".to_string()))?;

        Self::from_parts(
            category,
            diagram.clone(),
            left_leg,
            right_leg,
            FastPath::RightIso,
            |_category: &C, competitor: &PushoutCocone<C>| Some(competitor.left_leg().clone()),
        )
    }

    /// The diagram this witness is universal for
    pub fn diagram(&self) -> &SpanDiagram<C> {
        &self.diagram
    }

    /// The colimiting cocone
    pub fn cocone(&self) -> &PushoutCocone<C> {
        &self.cocone
    }

    /// Which construction route produced this witness
    pub fn path(&self) -> FastPath {
        self.path
    }

    /// The apex of the colimiting cocone
    pub fn apex(&self) -> &C::Object {
        self.cocone.apex()
    }

    /// Factor this witness through a competing cocone: produce the
    /// mediator `m : apex(self) → apex(competitor)` and verify both leg
    /// equations before handing it out.
    pub fn factor_through(
        &self,
        category: &C,
        competitor: &PushoutCocone<C>,
    ) -> Result<C::Morphism, LimitError> {
        let m = (self.factor)(category, competitor).ok_or_else(|| {
            LimitError::NoMediator(format!("competitor apex {:?}", competitor.apex()))
        })?;

        if category.domain(&m) != *self.apex() || category.codomain(&m) != *competitor.apex() {
            return Err(LimitError::BadMediator(format!(
                "mediator {:?} has wrong endpoints",
                m
            )));
        }
        if !self.cocone.is_mediated_by(category, &m, competitor) {
            return Err(LimitError::BadMediator(format!(
                "mediator {:?} fails a leg equation",
                m
            )));
        }
        Ok(m)
    }

    /// The uniqueness clause: two candidate mediators out of the apex
    /// agreeing on both legs must be equal.
    pub fn unique_mediator(
        &self,
        category: &C,
        competitor: &PushoutCocone<C>,
        m1: &C::Morphism,
        m2: &C::Morphism,
    ) -> Result<(), LimitError> {
        if !self.cocone.is_mediated_by(category, m1, competitor) {
            return Err(LimitError::BadMediator(format!("{:?}", m1)));
        }
        if !self.cocone.is_mediated_by(category, m2, competitor) {
            return Err(LimitError::BadMediator(format!("{:?}", m2)));
        }
        if m1 == m2 {
            Ok(())
        } else {
            Err(LimitError::MediatorNotUnique(format!(
                "{:?} vs {:?}",
                m1, m2
            )))
        }
    }

    /// Check that `m` is *the* mediator for `competitor`.
    pub fn mediator_agrees(
        &self,
        category: &C,
        competitor: &PushoutCocone<C>,
        m: &C::Morphism,
    ) -> Result<(), LimitError> {
        let canonical = self.factor_through(category, competitor)?;
        self.unique_mediator(category, competitor, m, &canonical)
    }
}
