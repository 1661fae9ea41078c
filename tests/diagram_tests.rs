#[cfg(test)]
mod tests {
    use limn::instances::{FinSet, FiniteSet, SetFunction};
    use limn::prelude::*;
    use limn::shape::{CospanArrow, CospanNode, SpanArrow, SpanNode};

    fn arms() -> (FinSet, SetFunction, SetFunction) {
        let category = FinSet;
        let x = FiniteSet::range(1, 4);
        let y = FiniteSet::range(4, 6);
        let z = FiniteSet::range(0, 2);

        let f = SetFunction::from_fn(x, z.clone(), |v| v % 2).unwrap();
        let g = SetFunction::from_fn(y, z, |v| v % 2).unwrap();
        (category, f, g)
    }

    #[test]
    fn cospan_diagram_realizes_the_functor() {
        let (category, f, g) = arms();
        let diagram = CospanDiagram::new(&category, f.clone(), g.clone()).unwrap();

        assert_eq!(diagram.object_at(CospanNode::Left), &f.domain);
        assert_eq!(diagram.object_at(CospanNode::Right), &g.domain);
        assert_eq!(diagram.object_at(CospanNode::Apex), &f.codomain);
        assert_eq!(diagram.morphism_at(&category, CospanArrow::LeftLeg), f);
        assert_eq!(diagram.morphism_at(&category, CospanArrow::RightLeg), g);
        assert!(diagram.is_functorial(&category));
    }

    #[test]
    fn cospan_diagram_rejects_mismatched_codomains() {
        let (category, f, _) = arms();
        let other = SetFunction::from_fn(FiniteSet::range(4, 6), FiniteSet::range(7, 9), |v| {
            v + 3
        })
        .unwrap();

        let result = CospanDiagram::new(&category, f, other);
        assert!(matches!(result, Err(LimitError::CodomainMismatch(_))));
    }

    #[test]
    fn flipping_a_cospan_swaps_the_arms() {
        let (category, f, g) = arms();
        let diagram = CospanDiagram::new(&category, f.clone(), g.clone()).unwrap();
        let flipped = diagram.flip();

        assert_eq!(flipped.left_arm(), &g);
        assert_eq!(flipped.right_arm(), &f);
        assert_eq!(flipped.flip(), diagram);
        assert!(flipped.is_functorial(&category));
    }

    #[test]
    fn span_diagram_realizes_the_functor() {
        let category = FinSet;
        let x = FiniteSet::range(1, 3);
        let y = FiniteSet::range(10, 13);
        let z = FiniteSet::range(20, 23);

        let f = SetFunction::from_fn(x.clone(), y.clone(), |v| v + 9).unwrap();
        let g = SetFunction::from_fn(x.clone(), z.clone(), |v| v + 19).unwrap();
        let diagram = SpanDiagram::new(&category, f.clone(), g.clone()).unwrap();

        assert_eq!(diagram.object_at(SpanNode::Zero), &x);
        assert_eq!(diagram.object_at(SpanNode::Left), &y);
        assert_eq!(diagram.object_at(SpanNode::Right), &z);
        assert_eq!(diagram.morphism_at(&category, SpanArrow::LeftLeg), f);
        assert_eq!(diagram.morphism_at(&category, SpanArrow::RightLeg), g);
        assert!(diagram.is_functorial(&category));
    }

    #[test]
    fn span_diagram_rejects_mismatched_domains() {
        let category = FinSet;
        let f = SetFunction::from_fn(FiniteSet::range(1, 3), FiniteSet::range(10, 12), |v| {
            v + 9
        })
        .unwrap();
        let g = SetFunction::from_fn(FiniteSet::range(5, 7), FiniteSet::range(20, 22), |v| {
            v + 15
        })
        .unwrap();

        let result = SpanDiagram::new(&category, f, g);
        assert!(matches!(result, Err(LimitError::DomainMismatch(_))));
    }

    #[test]
    fn cone_constructor_rejects_noncommuting_legs() {
        let (category, f, g) = arms();
        let diagram = CospanDiagram::new(&category, f.clone(), g.clone()).unwrap();

        let w = FiniteSet::singleton(0);
        // 1 maps to 1 under f, 4 maps to 0 under g: the square fails
        let left = SetFunction::from_fn(w.clone(), f.domain.clone(), |_| 1).unwrap();
        let right = SetFunction::from_fn(w, g.domain.clone(), |_| 4).unwrap();

        let result = PullbackCone::new(&category, &diagram, left, right);
        assert!(matches!(result, Err(LimitError::SquareDoesNotCommute(_))));
    }

    #[test]
    fn cone_constructor_rejects_wrong_endpoints() {
        let (category, f, g) = arms();
        let diagram = CospanDiagram::new(&category, f.clone(), g.clone()).unwrap();

        let w = FiniteSet::singleton(0);
        let left = SetFunction::from_fn(w.clone(), f.domain.clone(), |_| 1).unwrap();
        // lands in the apex instead of the right foot
        let stray = SetFunction::from_fn(w, f.codomain.clone(), |_| 1).unwrap();

        let result = PullbackCone::new(&category, &diagram, left, stray);
        assert!(matches!(result, Err(LimitError::LegMismatch(_))));
    }

    #[test]
    fn cone_accepts_commuting_legs() {
        let (category, f, g) = arms();
        let diagram = CospanDiagram::new(&category, f.clone(), g.clone()).unwrap();

        let w = FiniteSet::range(0, 2);
        // 1 ↦ 1 under f and 5 ↦ 1 under g, 2 ↦ 0 and 4 ↦ 0: both agree
        let left = SetFunction::from_fn(w.clone(), f.domain.clone(), |v| v + 1).unwrap();
        let right = SetFunction::from_fn(w, g.domain.clone(), |v| 5 - v).unwrap();

        let cone = PullbackCone::new(&category, &diagram, left.clone(), right).unwrap();
        assert_eq!(cone.apex(), &FiniteSet::range(0, 2));
        assert_eq!(cone.left_leg(), &left);
    }
}
