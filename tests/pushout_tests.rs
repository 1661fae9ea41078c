#[cfg(test)]
mod tests {
    use limn::instances::{DivArrow, DivLattice, FinSet, FiniteSet, SetFunction};
    use limn::prelude::*;

    fn glued_span() -> (FinSet, SpanDiagram<FinSet>) {
        let category = FinSet;
        let x = FiniteSet::singleton(1);
        let y = FiniteSet::new(vec![1, 2]);
        let z = FiniteSet::new(vec![3, 4]);

        let f = SetFunction::from_fn(x.clone(), y, |_| 1).unwrap();
        let g = SetFunction::from_fn(x, z, |_| 3).unwrap();
        let diagram = SpanDiagram::new(&category, f, g).unwrap();
        (category, diagram)
    }

    #[test]
    fn pushout_glues_exactly_the_identified_elements() {
        let (category, diagram) = glued_span();
        let witness = category.pushout(&diagram).unwrap();

        // Y ⊔ Z has four elements; gluing 1 ~ 3 leaves three classes
        assert_eq!(witness.apex().cardinality(), 3);
        let left = witness.cocone().left_leg();
        let right = witness.cocone().right_leg();
        assert_eq!(left.apply(1), right.apply(3));
        assert_ne!(left.apply(2), right.apply(4));
    }

    #[test]
    fn pushout_factors_every_cocone() {
        let (category, diagram) = glued_span();
        let witness = category.pushout(&diagram).unwrap();

        let w = FiniteSet::new(vec![5, 6]);
        let j1 = SetFunction::from_fn(FiniteSet::new(vec![1, 2]), w.clone(), |v| v + 4).unwrap();
        let j2 = SetFunction::from_fn(FiniteSet::new(vec![3, 4]), w, |v| v + 2).unwrap();
        let competitor = PushoutCocone::new(&category, &diagram, j1, j2).unwrap();

        let mediator = witness.factor_through(&category, &competitor).unwrap();
        assert!(witness
            .cocone()
            .is_mediated_by(&category, &mediator, &competitor));
        witness
            .mediator_agrees(&category, &competitor, &mediator)
            .unwrap();
    }

    #[test]
    fn invertible_arm_degenerates_the_pushout() {
        let category = FinSet;
        let x = FiniteSet::range(1, 3);
        let z = FiniteSet::range(6, 8);

        let f = SetFunction::identity(&x);
        let g = SetFunction::from_fn(x.clone(), z.clone(), |v| v + 5).unwrap();
        let diagram = SpanDiagram::new(&category, f, g.clone()).unwrap();

        let witness = PushoutWitness::for_diagram(&category, &diagram).unwrap();
        assert_eq!(witness.path(), FastPath::LeftIso);
        assert_eq!(witness.apex(), &z);
        assert_eq!(witness.cocone().left_leg(), &g);
        assert_eq!(witness.cocone().right_leg(), &SetFunction::identity(&z));
    }

    #[test]
    fn fast_path_and_generic_pushout_agree_up_to_iso() {
        let category = FinSet;
        let x = FiniteSet::range(1, 3);
        let y = FiniteSet::range(4, 6);
        let z = FiniteSet::range(6, 9);

        let f = SetFunction::from_fn(x.clone(), y, |v| v + 3).unwrap();
        assert!(category.is_iso(&f));
        let g = SetFunction::from_fn(x, z, |v| v + 5).unwrap();
        let diagram = SpanDiagram::new(&category, f, g).unwrap();

        let fast = PushoutWitness::for_diagram(&category, &diagram).unwrap();
        assert_eq!(fast.path(), FastPath::LeftIso);
        let generic = category.pushout(&diagram).unwrap();

        let iso = pushout_point_iso(&category, &fast, &generic).unwrap();
        assert_eq!(
            category.compose(iso.hom(), iso.inv()),
            Some(SetFunction::identity(fast.apex()))
        );
    }

    #[test]
    fn pushout_iso_round_trip_is_the_identity() {
        let (category, diagram) = glued_span();
        let u1 = category.pushout(&diagram).unwrap();
        let u2 = PushoutWitness::for_diagram(&category, &diagram).unwrap();

        let forward = pushout_point_iso(&category, &u1, &u2).unwrap();
        let backward = pushout_point_iso(&category, &u2, &u1).unwrap();

        assert_eq!(
            category.compose(forward.hom(), backward.hom()),
            Some(SetFunction::identity(u1.apex()))
        );
    }

    #[test]
    fn co_symm_flips_the_span_and_keeps_the_apex() {
        let (category, diagram) = glued_span();
        let witness = category.pushout(&diagram).unwrap();

        let flipped = co_symm(&category, &witness).unwrap();
        assert_eq!(flipped.diagram(), &diagram.flip());
        assert_eq!(flipped.apex(), witness.apex());
        assert_eq!(flipped.cocone().left_leg(), witness.cocone().right_leg());

        // Flipping twice restores the witness's cocone and diagram
        let back = co_symm(&category, &flipped).unwrap();
        assert_eq!(back.diagram(), witness.diagram());
        assert_eq!(back.cocone(), witness.cocone());
    }

    #[test]
    fn co_paste_composes_pushouts_in_the_divisibility_lattice() {
        let category = DivLattice;

        // First square: span 4 ← 2 → 6 with apex lcm(4, 6) = 12
        let d1 = SpanDiagram::new(
            &category,
            DivArrow::hom(2, 4).unwrap(),
            DivArrow::hom(2, 6).unwrap(),
        )
        .unwrap();
        let first = category.pushout(&d1).unwrap();
        assert_eq!(*first.apex(), 12);

        // Second square hangs off the right leg 6 → 12, adding 6 → 30
        let d2 = SpanDiagram::new(
            &category,
            *first.cocone().right_leg(),
            DivArrow::hom(6, 30).unwrap(),
        )
        .unwrap();
        let second = category.pushout(&d2).unwrap();
        assert_eq!(*second.apex(), 60);

        let pasted = co_paste(&category, &first, &second).unwrap();
        assert_eq!(*pasted.apex(), 60);
        assert_eq!(pasted.diagram().left_arm(), &DivArrow::hom(2, 4).unwrap());
        assert_eq!(pasted.diagram().right_arm(), &DivArrow::hom(2, 30).unwrap());

        // The direct pushout of the composite span is canonically the same
        let direct = category.pushout(pasted.diagram()).unwrap();
        let iso = pushout_point_iso(&category, &direct, &pasted).unwrap();
        assert_eq!(iso.hom(), &category.identity(&60));
    }

    #[test]
    fn co_induced_map_connects_compatible_spans() {
        let category = DivLattice;

        let d1 = SpanDiagram::new(
            &category,
            DivArrow::hom(2, 4).unwrap(),
            DivArrow::hom(2, 6).unwrap(),
        )
        .unwrap();
        let d2 = SpanDiagram::new(
            &category,
            DivArrow::hom(2, 8).unwrap(),
            DivArrow::hom(2, 6).unwrap(),
        )
        .unwrap();
        let source = category.pushout(&d1).unwrap();
        let target = category.pushout(&d2).unwrap();

        let hx = category.identity(&2);
        let hy = DivArrow::hom(4, 8).unwrap();
        let hz = category.identity(&6);

        let induced = co_induced_map(&category, &source, &target, &hx, &hy, &hz).unwrap();
        assert_eq!(induced, DivArrow::hom(12, 24).unwrap());
    }
}
