//! The two fixed indexing shapes: walking cospan and walking span
//!
//! Each shape is a finite category given by enums with total lookup
//! tables. The cospan shape has three nodes and two non-identity arrows
//! into the apex; the span shape is its dual. Neither shape has a
//! non-identity composite, which is what makes diagram building total:
//! the functor laws hold by the shape of the table alone.

use serde::{Deserialize, Serialize};

/// Nodes of the walking cospan: `Left → Apex ← Right`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CospanNode {
    Left,
    Right,
    Apex,
}

/// Arrows of the walking cospan: three identities and the two legs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CospanArrow {
    IdLeft,
    IdRight,
    IdApex,
    /// The arrow `Left → Apex`
    LeftLeg,
    /// The arrow `Right → Apex`
    RightLeg,
}

impl CospanNode {
    /// All nodes of the shape
    pub const NODES: [CospanNode; 3] = [CospanNode::Left, CospanNode::Right, CospanNode::Apex];

    /// The identity arrow on this node
    pub fn identity(self) -> CospanArrow {
        match self {
            CospanNode::Left => CospanArrow::IdLeft,
            CospanNode::Right => CospanArrow::IdRight,
            CospanNode::Apex => CospanArrow::IdApex,
        }
    }
}

impl CospanArrow {
    /// All arrows of the shape
    pub const ARROWS: [CospanArrow; 5] = [
        CospanArrow::IdLeft,
        CospanArrow::IdRight,
        CospanArrow::IdApex,
        CospanArrow::LeftLeg,
        CospanArrow::RightLeg,
    ];

    /// The source node of this arrow
    pub fn source(self) -> CospanNode {
        match self {
            CospanArrow::IdLeft => CospanNode::Left,
            CospanArrow::IdRight => CospanNode::Right,
            CospanArrow::IdApex => CospanNode::Apex,
            CospanArrow::LeftLeg => CospanNode::Left,
            CospanArrow::RightLeg => CospanNode::Right,
        }
    }

    /// The target node of this arrow
    pub fn target(self) -> CospanNode {
        match self {
            CospanArrow::IdLeft => CospanNode::Left,
            CospanArrow::IdRight => CospanNode::Right,
            CospanArrow::IdApex => CospanNode::Apex,
            CospanArrow::LeftLeg => CospanNode::Apex,
            CospanArrow::RightLeg => CospanNode::Apex,
        }
    }

    /// Whether this arrow is an identity
    pub fn is_identity(self) -> bool {
        matches!(
            self,
            CospanArrow::IdLeft | CospanArrow::IdRight | CospanArrow::IdApex
        )
    }

    /// Composition `self ; other` in diagrammatic order.
    ///
    /// Returns None when the endpoints do not meet. Every composite in
    /// this shape has an identity on at least one side, so the table
    /// never has to invent a new arrow.
    pub fn compose(self, other: CospanArrow) -> Option<CospanArrow> {
        if self.target() != other.source() {
            return None;
        }
        if self.is_identity() {
            Some(other)
        } else {
            // `other` must be the identity on the apex
            Some(self)
        }
    }
}

/// Nodes of the walking span: `Left ← Zero → Right`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanNode {
    Zero,
    Left,
    Right,
}

/// Arrows of the walking span: three identities and the two legs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanArrow {
    IdZero,
    IdLeft,
    IdRight,
    /// The arrow `Zero → Left`
    LeftLeg,
    /// The arrow `Zero → Right`
    RightLeg,
}

impl SpanNode {
    /// All nodes of the shape
    pub const NODES: [SpanNode; 3] = [SpanNode::Zero, SpanNode::Left, SpanNode::Right];

    /// The identity arrow on this node
    pub fn identity(self) -> SpanArrow {
        match self {
            SpanNode::Zero => SpanArrow::IdZero,
            SpanNode::Left => SpanArrow::IdLeft,
            SpanNode::Right => SpanArrow::IdRight,
        }
    }
}

impl SpanArrow {
    /// All arrows of the shape
    pub const ARROWS: [SpanArrow; 5] = [
        SpanArrow::IdZero,
        SpanArrow::IdLeft,
        SpanArrow::IdRight,
        SpanArrow::LeftLeg,
        SpanArrow::RightLeg,
    ];

    /// The source node of this arrow
    pub fn source(self) -> SpanNode {
        match self {
            SpanArrow::IdZero => SpanNode::Zero,
            SpanArrow::IdLeft => SpanNode::Left,
            SpanArrow::IdRight => SpanNode::Right,
            SpanArrow::LeftLeg => SpanNode::Zero,
            SpanArrow::RightLeg => SpanNode::Zero,
        }
    }

    /// The target node of this arrow
    pub fn target(self) -> SpanNode {
        match self {
            SpanArrow::IdZero => SpanNode::Zero,
            SpanArrow::IdLeft => SpanNode::Left,
            SpanArrow::IdRight => SpanNode::Right,
            SpanArrow::LeftLeg => SpanNode::Left,
            SpanArrow::RightLeg => SpanNode::Right,
        }
    }

    /// Whether this arrow is an identity
    pub fn is_identity(self) -> bool {
        matches!(
            self,
            SpanArrow::IdZero | SpanArrow::IdLeft | SpanArrow::IdRight
        )
    }

    /// Composition `self ; other` in diagrammatic order
    pub fn compose(self, other: SpanArrow) -> Option<SpanArrow> {
        if self.target() != other.source() {
            return None;
        }
        if self.is_identity() {
            Some(other)
        } else {
            Some(self)
        }
    }
}
