//! Errors for the universal-construction layer
//!
//! Every precondition that a proof assistant would discharge statically is
//! checked at construction time here; a violation surfaces as a
//! [`LimitError`] rather than a panic.

use thiserror::Error;

/// Errors that can occur while building diagrams, cones, and witnesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// The two arms of a cospan do not share a codomain
    #[error("cospan arms do not share a codomain: {0}")]
    CodomainMismatch(String),

    /// The two arms of a span do not share a domain
    #[error("span arms do not share a domain: {0}")]
    DomainMismatch(String),

    /// A leg of a cone/cocone has the wrong endpoints for its diagram
    #[error("cone leg has wrong endpoints: {0}")]
    LegMismatch(String),

    /// The legs of a candidate cone/cocone fail the square equation
    #[error("square does not commute: {0}")]
    SquareDoesNotCommute(String),

    /// A solver-produced mediating morphism fails its leg equations
    #[error("mediator does not satisfy the leg equations: {0}")]
    BadMediator(String),

    /// Two mediators agree on both legs but are not equal
    #[error("mediator is not unique: {0}")]
    MediatorNotUnique(String),

    /// The underlying limit primitive produced no mediator at all
    #[error("no mediator exists for the competing cone: {0}")]
    NoMediator(String),

    /// An isomorphism was requested between witnesses of different diagrams
    #[error("witnesses are for different diagrams: {0}")]
    DiagramMismatch(String),

    /// Two squares fed to a pasting combinator do not share the right edge
    #[error("squares cannot be pasted: {0}")]
    PastingMismatch(String),

    /// A pair of morphisms claimed mutually inverse is not
    #[error("morphisms are not mutually inverse: {0}")]
    NotAnIsomorphism(String),

    /// Morphism composition failed inside the underlying category
    #[error("morphisms cannot be composed: {0}")]
    ComposeFailed(String),
}
