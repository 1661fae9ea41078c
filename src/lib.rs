//! Pullback and Pushout Universal Constructions
//!
//! This crate provides a small combinator library for the two minimal
//! limit shapes of category theory: pullbacks (limits of cospans) and
//! pushouts (colimits of spans). It is parameterized over an abstract
//! [`Category`](category::Category) trait, so any client category that can
//! compose morphisms and compare them for equality can use the
//! constructions: checked diagram building, cone/cocone witnesses,
//! universal-property factorization, uniqueness-up-to-isomorphism, and the
//! square algebra (pasting, cancellation, associativity, symmetry).

pub mod category;
pub mod cone;
pub mod diagram;
pub mod error;
pub mod instances;
pub mod iso;
pub mod shape;
pub mod square;
pub mod universal;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::category::{Category, HasPullbacks, HasPushouts};
    pub use crate::cone::{PullbackCone, PushoutCocone};
    pub use crate::diagram::{CospanDiagram, SpanDiagram};
    pub use crate::error::LimitError;
    pub use crate::iso::{pullback_point_iso, pushout_point_iso, IsoWitness};
    pub use crate::shape::{CospanArrow, CospanNode, SpanArrow, SpanNode};
    pub use crate::square::{
        assoc, co_induced_iso, co_induced_map, co_paste, co_symm, induced_iso, induced_map, paste,
        split_left, split_right, symm, symm_iso,
    };
    pub use crate::universal::{FastPath, PullbackWitness, PushoutWitness};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
