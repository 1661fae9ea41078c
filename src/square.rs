//! The square algebra: combinators over universal witnesses
//!
//! Pullback squares compose: pasting two squares that share an edge
//! yields a pullback of the composite cospan, and the cancellation
//! direction recovers one small square from the big one. Together with
//! symmetry and the induced maps between apexes of compatible diagrams,
//! these combinators derive the associativity and flip isomorphisms of
//! iterated pullbacks without ever touching a concrete apex.
//!
//! Orientation convention for pasting: the `right` square sits against
//! the apex of the composite cospan and the `left` square hangs off its
//! bottom leg,
//!
//! ```text
//!   P2 --p2--> P1 --p1--> X
//!   |          |          |
//!   q2         q1         f
//!   v          v          v
//!   A  --u-->  B  --v-->  Z
//! ```
//!
//! so `paste` turns pullbacks of `(f, v)` and `(q1, u)` into a pullback
//! of `(f, u ; v)` with legs `(p2 ; p1, q2)`.

use crate::category::{Category, HasPullbacks};
use crate::cone::{PullbackCone, PushoutCocone};
use crate::diagram::{CospanDiagram, SpanDiagram};
use crate::error::LimitError;
use crate::iso::{pullback_point_iso, IsoWitness};
use crate::universal::{FastPath, PullbackWitness, PushoutWitness};

fn flip_path(path: FastPath) -> FastPath {
    match path {
        FastPath::Generic => FastPath::Generic,
        FastPath::LeftIso => FastPath::RightIso,
        FastPath::RightIso => FastPath::LeftIso,
    }
}

/// Paste two pullback squares sharing an edge into a pullback of the
/// composite cospan.
///
/// `right` must be universal for `(f : X → Z, v : B → Z)` and `left` for
/// `(q1 : P1 → B, u : A → B)` where `q1` is `right`'s right leg. The
/// result is universal for `(f, u ; v)`.
pub fn paste<C>(
    category: &C,
    right: &PullbackWitness<C>,
    left: &PullbackWitness<C>,
) -> Result<PullbackWitness<C>, LimitError>
where
    C: Category + 'static,
{
    if left.diagram().left_arm() != right.cone().right_leg() {
        return Err(LimitError::PastingMismatch(format!(
            "left square's left arm {:?} is not the right square's right leg {:?}",
            left.diagram().left_arm(),
            right.cone().right_leg()
        )));
    }

    let f = right.diagram().left_arm().clone();
    let u = left.diagram().right_arm().clone();
    let v = right.diagram().right_arm().clone();
    let composite = category
        .compose(&u, &v)
        .ok_or_else(|| LimitError::ComposeFailed("u ; v".to_string()))?;

    let outer_diagram = CospanDiagram::new(category, f, composite)?;
    let outer_left = category
        .compose(left.cone().left_leg(), right.cone().left_leg())
        .ok_or_else(|| LimitError::ComposeFailed("p2 ; p1".to_string()))?;
    let outer_right = left.cone().right_leg().clone();

    let right_w = right.clone();
    let left_w = left.clone();
    let bottom = u;

    PullbackWitness::from_parts(
        category,
        outer_diagram,
        outer_left,
        outer_right,
        FastPath::Generic,
        move |category: &C, competitor: &PullbackCone<C>| {
            // Factor through the right square first, then the left one.
            let to_mid = category.compose(competitor.right_leg(), &bottom)?;
            let right_competitor = PullbackCone::new(
                category,
                right_w.diagram(),
                competitor.left_leg().clone(),
                to_mid,
            )
            .ok()?;
            let m = right_w.factor_through(category, &right_competitor).ok()?;

            let left_competitor = PullbackCone::new(
                category,
                left_w.diagram(),
                m,
                competitor.right_leg().clone(),
            )
            .ok()?;
            left_w.factor_through(category, &left_competitor).ok()
        },
    )
}

/// Cancellation: given that the big pasted square and the right square
/// are pullbacks, the left square is one too.
///
/// `outer` must be universal for `(f : X → Z, w : A → Z)` and `right`
/// for `(f, v : B → Z)`, with `w = u ; v` for the supplied
/// `u : A → B`. The result is universal for `(q1, u)` where `q1` is
/// `right`'s right leg, on `outer`'s own apex.
pub fn split_left<C>(
    category: &C,
    outer: &PullbackWitness<C>,
    right: &PullbackWitness<C>,
    u: &C::Morphism,
) -> Result<PullbackWitness<C>, LimitError>
where
    C: Category + 'static,
{
    if outer.diagram().left_arm() != right.diagram().left_arm() {
        return Err(LimitError::PastingMismatch(
            "outer and right squares have different left arms".to_string(),
        ));
    }
    let composite = category
        .compose(u, right.diagram().right_arm())
        .ok_or_else(|| LimitError::ComposeFailed("u ; v".to_string()))?;
    if composite != *outer.diagram().right_arm() {
        return Err(LimitError::PastingMismatch(
            "u ; v is not the outer cospan's right arm".to_string(),
        ));
    }

    // The outer apex is itself a cone over the right square's cospan,
    // so it carries a canonical edge t into the right apex.
    let down_then_u = category
        .compose(outer.cone().right_leg(), u)
        .ok_or_else(|| LimitError::ComposeFailed("outer right leg ; u".to_string()))?;
    let outer_as_right_cone = PullbackCone::new(
        category,
        right.diagram(),
        outer.cone().left_leg().clone(),
        down_then_u,
    )?;
    let t = right.factor_through(category, &outer_as_right_cone)?;

    let left_diagram = CospanDiagram::new(
        category,
        right.cone().right_leg().clone(),
        u.clone(),
    )?;

    let outer_w = outer.clone();
    let right_w = right.clone();
    let top_edge = t.clone();

    PullbackWitness::from_parts(
        category,
        left_diagram,
        t,
        outer.cone().right_leg().clone(),
        FastPath::Generic,
        move |category: &C, competitor: &PullbackCone<C>| {
            // Competitor: (W', m : W' → P1, b : W' → A) with m ; q1 = b ; u.
            // Rebuild it as a competitor of the outer square. The square
            // proof chains through the right square's own equation:
            //   (m ; p1) ; f = m ; (q1 ; v) = (b ; u) ; v = b ; w
            // and is re-checked by the cone constructor below.
            let to_x = category.compose(competitor.left_leg(), right_w.cone().left_leg())?;
            let outer_competitor = PullbackCone::new(
                category,
                outer_w.diagram(),
                to_x,
                competitor.right_leg().clone(),
            )
            .ok()?;
            let n = outer_w.factor_through(category, &outer_competitor).ok()?;

            // n ; t and the competitor's own left leg both mediate the
            // right square for the same cone; the right square's
            // uniqueness forces them equal, which is exactly the leg
            // equation the caller will verify.
            let n_t = category.compose(&n, &top_edge)?;
            let to_x2 = category.compose(competitor.left_leg(), right_w.cone().left_leg())?;
            let to_b = category.compose(competitor.left_leg(), right_w.cone().right_leg())?;
            let agreement_cone =
                PullbackCone::new(category, right_w.diagram(), to_x2, to_b).ok()?;
            right_w
                .unique_mediator(category, &agreement_cone, &n_t, competitor.left_leg())
                .ok()?;

            Some(n)
        },
    )
}

/// Cancellation on the other arm: the same lemma run on the
/// vertically-pasted orientation.
///
/// `outer` must be universal for `(w : A → Z, g : Y → Z)` and `bottom`
/// for `(v : B → Z, g)`, with `w = u ; v`. The result is universal for
/// `(u : A → B, q1 : P1 → B)` where `q1` is `bottom`'s left leg. Both
/// inputs are flipped through [`symm`], the left-arm cancellation runs,
/// and the recovered square is flipped back.
pub fn split_right<C>(
    category: &C,
    outer: &PullbackWitness<C>,
    bottom: &PullbackWitness<C>,
    u: &C::Morphism,
) -> Result<PullbackWitness<C>, LimitError>
where
    C: Category + 'static,
{
    let outer_flipped = symm(category, outer)?;
    let bottom_flipped = symm(category, bottom)?;
    let recovered = split_left(category, &outer_flipped, &bottom_flipped, u)?;
    symm(category, &recovered)
}

/// The witness for the flipped diagram on the same apex: swap the legs
/// and the arms.
pub fn symm<C>(category: &C, witness: &PullbackWitness<C>) -> Result<PullbackWitness<C>, LimitError>
where
    C: Category + 'static,
{
    let flipped = witness.diagram().flip();
    let inner = witness.clone();

    PullbackWitness::from_parts(
        category,
        flipped,
        witness.cone().right_leg().clone(),
        witness.cone().left_leg().clone(),
        flip_path(witness.path()),
        move |category: &C, competitor: &PullbackCone<C>| {
            let unflipped = PullbackCone::new(
                category,
                inner.diagram(),
                competitor.right_leg().clone(),
                competitor.left_leg().clone(),
            )
            .ok()?;
            inner.factor_through(category, &unflipped).ok()
        },
    )
}

/// The canonical isomorphism `A ×_B C ≅ C ×_B A`: `u` universal for
/// `(f, g)`, `v` universal for the flipped cospan `(g, f)`. The `hom`
/// direction runs `apex(v) → apex(u)`.
pub fn symm_iso<C>(
    category: &C,
    u: &PullbackWitness<C>,
    v: &PullbackWitness<C>,
) -> Result<IsoWitness<C>, LimitError>
where
    C: Category + 'static,
{
    if *v.diagram() != u.diagram().flip() {
        return Err(LimitError::DiagramMismatch(
            "second witness is not over the flipped cospan".to_string(),
        ));
    }
    let u_flipped = symm(category, u)?;
    pullback_point_iso(category, &u_flipped, v)
}

/// The associativity isomorphism of iterated pullbacks,
/// `(A ×_B C) ×_C Q ≅ A ×_B Q` where `Q = C ×_D E`.
///
/// `inner` is universal for `(f : A → B, g : C → B)`; `nested` is
/// universal for `(pc, qc)` where `pc` is `inner`'s right leg and
/// `qc : Q → C` is the edge along which the third object hangs. Pastes
/// the two squares, solves the outer cospan `(f, qc ; g)` directly, and
/// returns the canonical iso (`hom` runs from the pasted apex to the
/// directly-solved one).
pub fn assoc<C>(
    category: &C,
    inner: &PullbackWitness<C>,
    nested: &PullbackWitness<C>,
) -> Result<IsoWitness<C>, LimitError>
where
    C: HasPullbacks + 'static,
{
    let pasted = paste(category, inner, nested)?;
    let direct = PullbackWitness::for_diagram(category, pasted.diagram())?;
    pullback_point_iso(category, &direct, &pasted)
}

/// The morphism between pullback apexes induced by a compatible map of
/// cospans: `hx, hy, hz` connect the objects of `source`'s diagram to
/// `target`'s, commuting with the arms.
pub fn induced_map<C>(
    category: &C,
    source: &PullbackWitness<C>,
    target: &PullbackWitness<C>,
    hx: &C::Morphism,
    hy: &C::Morphism,
    hz: &C::Morphism,
) -> Result<C::Morphism, LimitError>
where
    C: Category,
{
    let left_square = category.compose(hx, target.diagram().left_arm());
    let left_expected = category.compose(source.diagram().left_arm(), hz);
    if left_square.is_none() || left_square != left_expected {
        return Err(LimitError::SquareDoesNotCommute(
            "hx does not commute with the left arms".to_string(),
        ));
    }
    let right_square = category.compose(hy, target.diagram().right_arm());
    let right_expected = category.compose(source.diagram().right_arm(), hz);
    if right_square.is_none() || right_square != right_expected {
        return Err(LimitError::SquareDoesNotCommute(
            "hy does not commute with the right arms".to_string(),
        ));
    }

    let left_leg = category
        .compose(source.cone().left_leg(), hx)
        .ok_or_else(|| LimitError::ComposeFailed("p1 ; hx".to_string()))?;
    let right_leg = category
        .compose(source.cone().right_leg(), hy)
        .ok_or_else(|| LimitError::ComposeFailed("p2 ; hy".to_string()))?;

    let competitor = PullbackCone::new(category, target.diagram(), left_leg, right_leg)?;
    target.factor_through(category, &competitor)
}

/// The isomorphism between pullback apexes induced by an isomorphism of
/// cospans. Each direction is an [`induced_map`]; uniqueness forces the
/// round trips onto the identities.
pub fn induced_iso<C>(
    category: &C,
    source: &PullbackWitness<C>,
    target: &PullbackWitness<C>,
    hx: &C::Morphism,
    hy: &C::Morphism,
    hz: &C::Morphism,
) -> Result<IsoWitness<C>, LimitError>
where
    C: Category,
{
    let hx_inv = category
        .inverse(hx)
        .ok_or_else(|| LimitError::NotAnIsomorphism(format!("{:?}", hx)))?;
    let hy_inv = category
        .inverse(hy)
        .ok_or_else(|| LimitError::NotAnIsomorphism(format!("{:?}", hy)))?;
    let hz_inv = category
        .inverse(hz)
        .ok_or_else(|| LimitError::NotAnIsomorphism(format!("{:?}", hz)))?;

    let hom = induced_map(category, source, target, hx, hy, hz)?;
    let inv = induced_map(category, target, source, &hx_inv, &hy_inv, &hz_inv)?;

    let round_source = category
        .compose(&hom, &inv)
        .ok_or_else(|| LimitError::ComposeFailed("hom ; inv".to_string()))?;
    source.unique_mediator(
        category,
        source.cone(),
        &round_source,
        &category.identity(source.apex()),
    )?;
    let round_target = category
        .compose(&inv, &hom)
        .ok_or_else(|| LimitError::ComposeFailed("inv ; hom".to_string()))?;
    target.unique_mediator(
        category,
        target.cone(),
        &round_target,
        &category.identity(target.apex()),
    )?;

    IsoWitness::new(category, hom, inv)
}

/// Paste two pushout squares sharing an edge into a pushout of the
/// composite span: the dual of [`paste`].
///
/// `first` must be universal for the span `(f : Z → X, v : Z → B)` and
/// `second` for `(q1 : B → P1, u : B → A)` where `q1` is `first`'s right
/// leg. The result is universal for `(f, v ; u)` with legs
/// `(p1 ; p2, q2)`.
pub fn co_paste<C>(
    category: &C,
    first: &PushoutWitness<C>,
    second: &PushoutWitness<C>,
) -> Result<PushoutWitness<C>, LimitError>
where
    C: Category + 'static,
{
    if second.diagram().left_arm() != first.cocone().right_leg() {
        return Err(LimitError::PastingMismatch(format!(
            "second square's left arm {:?} is not the first square's right leg {:?}",
            second.diagram().left_arm(),
            first.cocone().right_leg()
        )));
    }

    let f = first.diagram().left_arm().clone();
    let v = first.diagram().right_arm().clone();
    let u = second.diagram().right_arm().clone();
    let composite = category
        .compose(&v, &u)
        .ok_or_else(|| LimitError::ComposeFailed("v ; u".to_string()))?;

    let outer_diagram = SpanDiagram::new(category, f, composite)?;
    let outer_left = category
        .compose(first.cocone().left_leg(), second.cocone().left_leg())
        .ok_or_else(|| LimitError::ComposeFailed("p1 ; p2".to_string()))?;
    let outer_right = second.cocone().right_leg().clone();

    let first_w = first.clone();
    let second_w = second.clone();
    let bottom = u;

    PushoutWitness::from_parts(
        category,
        outer_diagram,
        outer_left,
        outer_right,
        FastPath::Generic,
        move |category: &C, competitor: &PushoutCocone<C>| {
            let from_mid = category.compose(&bottom, competitor.right_leg())?;
            let first_competitor = PushoutCocone::new(
                category,
                first_w.diagram(),
                competitor.left_leg().clone(),
                from_mid,
            )
            .ok()?;
            let m = first_w.factor_through(category, &first_competitor).ok()?;

            let second_competitor = PushoutCocone::new(
                category,
                second_w.diagram(),
                m,
                competitor.right_leg().clone(),
            )
            .ok()?;
            second_w.factor_through(category, &second_competitor).ok()
        },
    )
}

/// The pushout witness for the flipped span on the same apex: the dual
/// of [`symm`].
pub fn co_symm<C>(
    category: &C,
    witness: &PushoutWitness<C>,
) -> Result<PushoutWitness<C>, LimitError>
where
    C: Category + 'static,
{
    let flipped = witness.diagram().flip();
    let inner = witness.clone();

    PushoutWitness::from_parts(
        category,
        flipped,
        witness.cocone().right_leg().clone(),
        witness.cocone().left_leg().clone(),
        flip_path(witness.path()),
        move |category: &C, competitor: &PushoutCocone<C>| {
            let unflipped = PushoutCocone::new(
                category,
                inner.diagram(),
                competitor.right_leg().clone(),
                competitor.left_leg().clone(),
            )
            .ok()?;
            inner.factor_through(category, &unflipped).ok()
        },
    )
}

/// The morphism between pushout apexes induced by a compatible map of
/// spans: the dual of [`induced_map`]. The mediator runs
/// `apex(source) → apex(target)`.
pub fn co_induced_map<C>(
    category: &C,
    source: &PushoutWitness<C>,
    target: &PushoutWitness<C>,
    hx: &C::Morphism,
    hy: &C::Morphism,
    hz: &C::Morphism,
) -> Result<C::Morphism, LimitError>
where
    C: Category,
{
    let left_square = category.compose(source.diagram().left_arm(), hy);
    let left_expected = category.compose(hx, target.diagram().left_arm());
    if left_square.is_none() || left_square != left_expected {
        return Err(LimitError::SquareDoesNotCommute(
            "hy does not commute with the left arms".to_string(),
        ));
    }
    let right_square = category.compose(source.diagram().right_arm(), hz);
    let right_expected = category.compose(hx, target.diagram().right_arm());
    if right_square.is_none() || right_square != right_expected {
        return Err(LimitError::SquareDoesNotCommute(
            "hz does not commute with the right arms".to_string(),
        ));
    }

    let left_leg = category
        .compose(hy, target.cocone().left_leg())
        .ok_or_else(|| LimitError::ComposeFailed("hy ; j1".to_string()))?;
    let right_leg = category
        .compose(hz, target.cocone().right_leg())
        .ok_or_else(|| LimitError::ComposeFailed("hz ; j2".to_string()))?;

    let competitor = PushoutCocone::new(category, source.diagram(), left_leg, right_leg)?;
    source.factor_through(category, &competitor)
}

/// The isomorphism between pushout apexes induced by an isomorphism of
/// spans: the dual of [`induced_iso`].
pub fn co_induced_iso<C>(
    category: &C,
    source: &PushoutWitness<C>,
    target: &PushoutWitness<C>,
    hx: &C::Morphism,
    hy: &C::Morphism,
    hz: &C::Morphism,
) -> Result<IsoWitness<C>, LimitError>
where
    C: Category,
{
    let hx_inv = category
        .inverse(hx)
        .ok_or_else(|| LimitError::NotAnIsomorphism(format!("{:?}", hx)))?;
    let hy_inv = category
        .inverse(hy)
        .ok_or_else(|| LimitError::NotAnIsomorphism(format!("{:?}", hy)))?;
    let hz_inv = category
        .inverse(hz)
        .ok_or_else(|| LimitError::NotAnIsomorphism(format!("{:?}", hz)))?;

    let hom = co_induced_map(category, source, target, hx, hy, hz)?;
    let inv = co_induced_map(category, target, source, &hx_inv, &hy_inv, &hz_inv)?;

    let round_source = category
        .compose(&hom, &inv)
        .ok_or_else(|| LimitError::ComposeFailed("hom ; inv".to_string()))?;
    source.unique_mediator(
        category,
        source.cocone(),
        &round_source,
        &category.identity(source.apex()),
    )?;
    let round_target = category
        .compose(&inv, &hom)
        .ok_or_else(|| LimitError::ComposeFailed("inv ; hom".to_string()))?;
    target.unique_mediator(
        category,
        target.cocone(),
        &round_target,
        &category.identity(target.apex()),
    )?;

    IsoWitness::new(category, hom, inv)
}
