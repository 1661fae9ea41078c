//! Diagrams over the two fixed shapes
//!
//! A diagram is a functor from a shape into the client category. For the
//! walking cospan and span the functor is determined by the two arms, so
//! a diagram is stored as the arms plus their (checked) endpoints, and
//! the node/arrow lookups realize the functor on demand.

use crate::category::Category;
use crate::error::LimitError;
use crate::shape::{CospanArrow, CospanNode, SpanArrow, SpanNode};

/// A cospan `f : X → Z ← Y : g` in the category `C`.
///
/// Construction checks that the two arms share the codomain `Z`;
/// everything else about the functor holds by the shape of the walking
/// cospan (no non-identity composites).
pub struct CospanDiagram<C: Category> {
    x: C::Object,
    y: C::Object,
    z: C::Object,
    f: C::Morphism,
    g: C::Morphism,
}

// Manual impls: the derived versions would add spurious `C: Clone` /
// `C: Debug` / `C: PartialEq` bounds, but only the associated types
// (which `Category` already bounds) appear in the fields.
impl<C: Category> Clone for CospanDiagram<C> {
    fn clone(&self) -> Self {
        CospanDiagram {
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
            f: self.f.clone(),
            g: self.g.clone(),
        }
    }
}

impl<C: Category> std::fmt::Debug for CospanDiagram<C> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("CospanDiagram")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("f", &self.f)
            .field("g", &self.g)
            .finish()
    }
}

impl<C: Category> PartialEq for CospanDiagram<C> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.f == other.f
            && self.g == other.g
    }
}

impl<C: Category> CospanDiagram<C> {
    /// Build the cospan diagram for `f : X → Z` and `g : Y → Z`.
    ///
    /// Fails with [`LimitError::CodomainMismatch`] when the arms do not
    /// share a codomain.
    pub fn new(category: &C, f: C::Morphism, g: C::Morphism) -> Result<Self, LimitError> {
        let z = category.codomain(&f);
        let z_other = category.codomain(&g);
        if z != z_other {
            return Err(LimitError::CodomainMismatch(format!(
                "{:?} vs {:?}",
                z, z_other
            )));
        }
        Ok(CospanDiagram {
            x: category.domain(&f),
            y: category.domain(&g),
            z,
            f,
            g,
        })
    }

    /// The object at a shape node
    pub fn object_at(&self, node: CospanNode) -> &C::Object {
        match node {
            CospanNode::Left => &self.x,
            CospanNode::Right => &self.y,
            CospanNode::Apex => &self.z,
        }
    }

    /// The morphism at a shape arrow
    pub fn morphism_at(&self, category: &C, arrow: CospanArrow) -> C::Morphism {
        match arrow {
            CospanArrow::IdLeft => category.identity(&self.x),
            CospanArrow::IdRight => category.identity(&self.y),
            CospanArrow::IdApex => category.identity(&self.z),
            CospanArrow::LeftLeg => self.f.clone(),
            CospanArrow::RightLeg => self.g.clone(),
        }
    }

    /// The left arm `f : X → Z`
    pub fn left_arm(&self) -> &C::Morphism {
        &self.f
    }

    /// The right arm `g : Y → Z`
    pub fn right_arm(&self) -> &C::Morphism {
        &self.g
    }

    /// The domain of the left arm
    pub fn left_foot(&self) -> &C::Object {
        &self.x
    }

    /// The domain of the right arm
    pub fn right_foot(&self) -> &C::Object {
        &self.y
    }

    /// The shared codomain
    pub fn apex_object(&self) -> &C::Object {
        &self.z
    }

    /// The same cospan with the two arms swapped: `g : Y → Z ← X : f`
    pub fn flip(&self) -> Self {
        CospanDiagram {
            x: self.y.clone(),
            y: self.x.clone(),
            z: self.z.clone(),
            f: self.g.clone(),
            g: self.f.clone(),
        }
    }

    /// Check the functor laws over the whole shape table: identities map
    /// to identities and every composable pair of arrows maps to the
    /// composite of the images.
    pub fn is_functorial(&self, category: &C) -> bool {
        let identities_ok = CospanNode::NODES.iter().all(|node| {
            self.morphism_at(category, node.identity()) == category.identity(self.object_at(*node))
        });

        let composites_ok = CospanArrow::ARROWS.iter().all(|a| {
            CospanArrow::ARROWS.iter().all(|b| match a.compose(*b) {
                None => true,
                Some(ab) => {
                    let image_a = self.morphism_at(category, *a);
                    let image_b = self.morphism_at(category, *b);
                    category.compose(&image_a, &image_b)
                        == Some(self.morphism_at(category, ab))
                }
            })
        });

        identities_ok && composites_ok
    }
}

/// A span `Y ← X → Z`, given by `f : X → Y` and `g : X → Z`.
pub struct SpanDiagram<C: Category> {
    x: C::Object,
    y: C::Object,
    z: C::Object,
    f: C::Morphism,
    g: C::Morphism,
}

impl<C: Category> Clone for SpanDiagram<C> {
    fn clone(&self) -> Self {
        SpanDiagram {
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
            f: self.f.clone(),
            g: self.g.clone(),
        }
    }
}

impl<C: Category> std::fmt::Debug for SpanDiagram<C> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("SpanDiagram")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("f", &self.f)
            .field("g", &self.g)
            .finish()
    }
}

impl<C: Category> PartialEq for SpanDiagram<C> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.f == other.f
            && self.g == other.g
    }
}

impl<C: Category> SpanDiagram<C> {
    /// Build the span diagram for `f : X → Y` and `g : X → Z`.
    ///
    /// Fails with [`LimitError::DomainMismatch`] when the arms do not
    /// share a domain.
    pub fn new(category: &C, f: C::Morphism, g: C::Morphism) -> Result<Self, LimitError> {
        let x = category.domain(&f);
        let x_other = category.domain(&g);
        if x != x_other {
            return Err(LimitError::DomainMismatch(format!(
                "{:?} vs {:?}",
                x, x_other
            )));
        }
        Ok(SpanDiagram {
            y: category.codomain(&f),
            z: category.codomain(&g),
            x,
            f,
            g,
        })
    }

    /// The object at a shape node
    pub fn object_at(&self, node: SpanNode) -> &C::Object {
        match node {
            SpanNode::Zero => &self.x,
            SpanNode::Left => &self.y,
            SpanNode::Right => &self.z,
        }
    }

    /// The morphism at a shape arrow
    pub fn morphism_at(&self, category: &C, arrow: SpanArrow) -> C::Morphism {
        match arrow {
            SpanArrow::IdZero => category.identity(&self.x),
            SpanArrow::IdLeft => category.identity(&self.y),
            SpanArrow::IdRight => category.identity(&self.z),
            SpanArrow::LeftLeg => self.f.clone(),
            SpanArrow::RightLeg => self.g.clone(),
        }
    }

    /// The left arm `f : X → Y`
    pub fn left_arm(&self) -> &C::Morphism {
        &self.f
    }

    /// The right arm `g : X → Z`
    pub fn right_arm(&self) -> &C::Morphism {
        &self.g
    }

    /// The shared domain
    pub fn root_object(&self) -> &C::Object {
        &self.x
    }

    /// The codomain of the left arm
    pub fn left_head(&self) -> &C::Object {
        &self.y
    }

    /// The codomain of the right arm
    pub fn right_head(&self) -> &C::Object {
        &self.z
    }

    /// The same span with the two arms swapped
    pub fn flip(&self) -> Self {
        SpanDiagram {
            x: self.x.clone(),
            y: self.z.clone(),
            z: self.y.clone(),
            f: self.g.clone(),
            g: self.f.clone(),
        }
    }

    /// Check the functor laws over the whole shape table
    pub fn is_functorial(&self, category: &C) -> bool {
        let identities_ok = SpanNode::NODES.iter().all(|node| {
            self.morphism_at(category, node.identity()) == category.identity(self.object_at(*node))
        });

        let composites_ok = SpanArrow::ARROWS.iter().all(|a| {
            SpanArrow::ARROWS.iter().all(|b| match a.compose(*b) {
                None => true,
                Some(ab) => {
                    let image_a = self.morphism_at(category, *a);
                    let image_b = self.morphism_at(category, *b);
                    category.compose(&image_a, &image_b)
                        == Some(self.morphism_at(category, ab))
                }
            })
        });

        identities_ok && composites_ok
    }
}
