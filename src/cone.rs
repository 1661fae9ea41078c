//! Cone and cocone witnesses
//!
//! A pullback cone is an apex with two legs into the feet of a cospan
//! such that the square commutes; a pushout cocone is the dual. The
//! square equation is not carried as a proof term: the only constructor
//! checks it by composing the legs with the arms and comparing, so a
//! value of these types always satisfies its invariant.

use crate::category::Category;
use crate::diagram::{CospanDiagram, SpanDiagram};
use crate::error::LimitError;

/// An object `W` with legs `left : W → X`, `right : W → Y` over a cospan
/// `f : X → Z ← Y : g`, satisfying `left ; f = right ; g`.
pub struct PullbackCone<C: Category> {
    apex: C::Object,
    left: C::Morphism,
    right: C::Morphism,
}

// Manual impls: the derived versions would add spurious `C: Clone` /
// `C: Debug` / `C: PartialEq` bounds, but only the associated types
// (which `Category` already bounds) appear in the fields.
impl<C: Category> Clone for PullbackCone<C> {
    fn clone(&self) -> Self {
        PullbackCone {
            apex: self.apex.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<C: Category> std::fmt::Debug for PullbackCone<C> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("PullbackCone")
            .field("apex", &self.apex)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<C: Category> PartialEq for PullbackCone<C> {
    fn eq(&self, other: &Self) -> bool {
        self.apex == other.apex && self.left == other.left && self.right == other.right
    }
}

impl<C: Category> PullbackCone<C> {
    /// Build a cone over `diagram`, checking leg endpoints and the square
    /// equation.
    pub fn new(
        category: &C,
        diagram: &CospanDiagram<C>,
        left: C::Morphism,
        right: C::Morphism,
    ) -> Result<Self, LimitError> {
        let apex = category.domain(&left);
        if category.domain(&right) != apex {
            return Err(LimitError::LegMismatch(format!(
                "legs have different domains: {:?} vs {:?}",
                apex,
                category.domain(&right)
            )));
        }
        if category.codomain(&left) != *diagram.left_foot() {
            return Err(LimitError::LegMismatch(format!(
                "left leg lands in {:?}, diagram expects {:?}",
                category.codomain(&left),
                diagram.left_foot()
            )));
        }
        if category.codomain(&right) != *diagram.right_foot() {
            return Err(LimitError::LegMismatch(format!(
                "right leg lands in {:?}, diagram expects {:?}",
                category.codomain(&right),
                diagram.right_foot()
            )));
        }

        let via_left = category.compose(&left, diagram.left_arm());
        let via_right = category.compose(&right, diagram.right_arm());
        match (via_left, via_right) {
            (Some(lf), Some(rg)) if lf == rg => Ok(PullbackCone { apex, left, right }),
            (Some(lf), Some(rg)) => Err(LimitError::SquareDoesNotCommute(format!(
                "left;f = {:?} but right;g = {:?}",
                lf, rg
            ))),
            _ => Err(LimitError::ComposeFailed(
                "cone legs do not compose with the cospan arms".to_string(),
            )),
        }
    }

    /// The apex object `W`
    pub fn apex(&self) -> &C::Object {
        &self.apex
    }

    /// The leg `W → X`
    pub fn left_leg(&self) -> &C::Morphism {
        &self.left
    }

    /// The leg `W → Y`
    pub fn right_leg(&self) -> &C::Morphism {
        &self.right
    }

    /// Whether `m : V → W` makes `other`'s legs factor through this cone:
    /// `m ; left = other.left` and `m ; right = other.right`.
    pub fn is_mediated_by(&self, category: &C, m: &C::Morphism, other: &PullbackCone<C>) -> bool {
        let left_ok = category.compose(m, &self.left) == Some(other.left.clone());
        let right_ok = category.compose(m, &self.right) == Some(other.right.clone());
        left_ok && right_ok
    }
}

/// An object `W` with legs `left : Y → W`, `right : Z → W` under a span
/// `Y ← X → Z`, satisfying `f ; left = g ; right`.
pub struct PushoutCocone<C: Category> {
    apex: C::Object,
    left: C::Morphism,
    right: C::Morphism,
}

impl<C: Category> Clone for PushoutCocone<C> {
    fn clone(&self) -> Self {
        PushoutCocone {
            apex: self.apex.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<C: Category> std::fmt::Debug for PushoutCocone<C> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("PushoutCocone")
            .field("apex", &self.apex)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<C: Category> PartialEq for PushoutCocone<C> {
    fn eq(&self, other: &Self) -> bool {
        self.apex == other.apex && self.left == other.left && self.right == other.right
    }
}

impl<C: Category> PushoutCocone<C> {
    /// Build a cocone under `diagram`, checking leg endpoints and the
    /// square equation.
    pub fn new(
        category: &C,
        diagram: &SpanDiagram<C>,
        left: C::Morphism,
        right: C::Morphism,
    ) -> Result<Self, LimitError> {
        let apex = category.codomain(&left);
        if category.codomain(&right) != apex {
            return Err(LimitError::LegMismatch(format!(
                "legs have different codomains: {:?} vs {:?}",
                apex,
                category.codomain(&right)
            )));
        }
        if category.domain(&left) != *diagram.left_head() {
            return Err(LimitError::LegMismatch(format!(
                "left leg starts at {:?}, diagram expects {:?}",
                category.domain(&left),
                diagram.left_head()
            )));
        }
        if category.domain(&right) != *diagram.right_head() {
            return Err(LimitError::LegMismatch(format!(
                "right leg starts at {:?}, diagram expects {:?}",
                category.domain(&right),
                diagram.right_head()
            )));
        }

        let via_left = category.compose(diagram.left_arm(), &left);
        let via_right = category.compose(diagram.right_arm(), &right);
        match (via_left, via_right) {
            (Some(fl), Some(gr)) if fl == gr => Ok(PushoutCocone { apex, left, right }),
            (Some(fl), Some(gr)) => Err(LimitError::SquareDoesNotCommute(format!(
                "f;left = {:?} but g;right = {:?}",
                fl, gr
            ))),
            _ => Err(LimitError::ComposeFailed(
                "cocone legs do not compose with the span arms".to_string(),
            )),
        }
    }

    /// The apex object `W`
    pub fn apex(&self) -> &C::Object {
        &self.apex
    }

    /// The leg `Y → W`
    pub fn left_leg(&self) -> &C::Morphism {
        &self.left
    }

    /// The leg `Z → W`
    pub fn right_leg(&self) -> &C::Morphism {
        &self.right
    }

    /// Whether `m : W → V` makes `other`'s legs factor through this
    /// cocone: `left ; m = other.left` and `right ; m = other.right`.
    pub fn is_mediated_by(&self, category: &C, m: &C::Morphism, other: &PushoutCocone<C>) -> bool {
        let left_ok = category.compose(&self.left, m) == Some(other.left.clone());
        let right_ok = category.compose(&self.right, m) == Some(other.right.clone());
        left_ok && right_ok
    }
}
