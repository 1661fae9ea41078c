#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use limn::instances::{FinSet, FiniteSet, SetFunction};
    use limn::prelude::*;

    #[test]
    fn one_point_cospan_has_a_one_point_pullback() {
        let category = FinSet;
        let point = FiniteSet::singleton(1);
        let id = SetFunction::identity(&point);

        let diagram = CospanDiagram::new(&category, id.clone(), id.clone()).unwrap();
        let witness = PullbackWitness::for_diagram(&category, &diagram).unwrap();

        // The identity arm is invertible, so the degenerate route fires
        assert_eq!(witness.path(), FastPath::LeftIso);
        assert_eq!(witness.apex(), &point);
        assert_eq!(witness.cone().left_leg(), &id);
        assert_eq!(witness.cone().right_leg(), &id);
    }

    #[test]
    fn monic_arm_against_identity_gives_the_domain_back() {
        let category = FinSet;
        let x = FiniteSet::range(1, 3);
        let z = FiniteSet::range(1, 4);

        let f = SetFunction::from_fn(x.clone(), z.clone(), |v| v).unwrap();
        assert!(category.is_mono(&f));
        let g = SetFunction::identity(&z);

        let diagram = CospanDiagram::new(&category, f.clone(), g).unwrap();
        let witness = PullbackWitness::for_diagram(&category, &diagram).unwrap();

        assert_eq!(witness.path(), FastPath::RightIso);
        assert_eq!(witness.apex(), &x);
        assert_eq!(witness.cone().left_leg(), &SetFunction::identity(&x));
        assert_eq!(witness.cone().right_leg(), &f);
    }

    #[test]
    fn fast_path_and_generic_path_agree_up_to_iso() {
        let category = FinSet;
        let x = FiniteSet::range(1, 4);
        let z = FiniteSet::range(11, 14);
        let y = FiniteSet::range(21, 23);

        let f = SetFunction::from_fn(x, z.clone(), |v| v + 10).unwrap();
        let g = SetFunction::from_fn(y, z, |v| if v == 21 { 11 } else { 12 }).unwrap();
        assert!(category.is_iso(&f));

        let diagram = CospanDiagram::new(&category, f, g).unwrap();

        let fast = PullbackWitness::for_diagram(&category, &diagram).unwrap();
        assert_eq!(fast.path(), FastPath::LeftIso);

        let generic = category.pullback(&diagram).unwrap();
        assert_eq!(generic.path(), FastPath::Generic);

        let iso = pullback_point_iso(&category, &fast, &generic).unwrap();
        assert_eq!(
            category.compose(iso.hom(), iso.inv()),
            Some(SetFunction::identity(generic.apex()))
        );
    }

    #[test]
    fn generic_pullback_contains_exactly_the_agreeing_pairs() {
        let category = FinSet;
        let x = FiniteSet::range(1, 4);
        let y = FiniteSet::range(4, 6);
        let z = FiniteSet::range(0, 2);

        let f = SetFunction::from_fn(x, z.clone(), |v| v % 2).unwrap();
        let g = SetFunction::from_fn(y, z, |v| v % 2).unwrap();

        let diagram = CospanDiagram::new(&category, f.clone(), g.clone()).unwrap();
        let witness = category.pullback(&diagram).unwrap();

        for &pair in witness.apex().elements.iter() {
            let to_x = witness.cone().left_leg().apply(pair).unwrap();
            let to_y = witness.cone().right_leg().apply(pair).unwrap();
            assert_eq!(f.apply(to_x), g.apply(to_y));
        }
        // f sends {2} to 0 and {1,3} to 1; g sends {4} to 0 and {5} to 1
        assert_eq!(witness.apex().cardinality(), 3);
    }

    #[test]
    fn factorization_satisfies_and_determines_the_legs() {
        let category = FinSet;
        let x = FiniteSet::range(1, 4);
        let y = FiniteSet::range(4, 6);
        let z = FiniteSet::range(0, 2);

        let f = SetFunction::from_fn(x.clone(), z.clone(), |v| v % 2).unwrap();
        let g = SetFunction::from_fn(y.clone(), z, |v| v % 2).unwrap();
        let diagram = CospanDiagram::new(&category, f, g).unwrap();
        let witness = category.pullback(&diagram).unwrap();

        let w = FiniteSet::range(0, 2);
        let left = SetFunction::from_fn(w.clone(), x, |v| v + 1).unwrap();
        let right = SetFunction::from_fn(w, y, |v| 5 - v).unwrap();
        let competitor = PullbackCone::new(&category, &diagram, left, right).unwrap();

        let mediator = witness.factor_through(&category, &competitor).unwrap();
        assert!(witness
            .cone()
            .is_mediated_by(&category, &mediator, &competitor));

        // The canonical mediator is the only one
        witness
            .unique_mediator(&category, &competitor, &mediator, &mediator)
            .unwrap();

        // A morphism that fails a leg equation is rejected outright
        let wrong = SetFunction::from_fn(
            competitor.apex().clone(),
            witness.apex().clone(),
            |_| witness.apex().elements[0],
        )
        .unwrap();
        let err = witness
            .unique_mediator(&category, &competitor, &wrong, &mediator)
            .unwrap_err();
        assert!(matches!(err, LimitError::BadMediator(_)));
    }

    #[test]
    fn iso_builder_round_trip_is_the_identity() {
        let category = FinSet;
        let x = FiniteSet::range(1, 4);
        let z = FiniteSet::range(11, 14);
        let y = FiniteSet::range(21, 23);

        let f = SetFunction::from_fn(x, z.clone(), |v| v + 10).unwrap();
        let g = SetFunction::from_fn(y, z, |v| if v == 21 { 11 } else { 13 }).unwrap();
        let diagram = CospanDiagram::new(&category, f, g).unwrap();

        let u1 = category.pullback(&diagram).unwrap();
        let u2 = PullbackWitness::for_diagram(&category, &diagram).unwrap();

        let forward = pullback_point_iso(&category, &u1, &u2).unwrap();
        let backward = pullback_point_iso(&category, &u2, &u1).unwrap();

        assert_eq!(
            category.compose(forward.hom(), backward.hom()),
            Some(SetFunction::identity(u2.apex()))
        );
        assert_eq!(
            category.compose(backward.hom(), forward.hom()),
            Some(SetFunction::identity(u1.apex()))
        );

        // Both directions are canonical, so flipping one gives the other
        assert_eq!(backward, forward.reverse());
    }

    #[test]
    fn disjoint_images_pull_back_to_the_empty_set() {
        let category = FinSet;
        let z = FiniteSet::range(0, 2);

        // f lands in {0}, g lands in {1}: no agreeing pairs
        let f = SetFunction::from_fn(FiniteSet::singleton(1), z.clone(), |_| 0).unwrap();
        let g = SetFunction::from_fn(FiniteSet::singleton(4), z, |_| 1).unwrap();
        let diagram = CospanDiagram::new(&category, f, g).unwrap();

        let witness = category.pullback(&diagram).unwrap();
        assert_eq!(witness.apex(), &FiniteSet::empty());
        assert_eq!(witness.apex().cardinality(), 0);
    }

    #[test]
    fn iso_builder_rejects_witnesses_for_different_diagrams() {
        let category = FinSet;
        let z = FiniteSet::range(0, 2);
        let x = FiniteSet::range(1, 4);
        let y = FiniteSet::range(4, 6);

        let f = SetFunction::from_fn(x, z.clone(), |v| v % 2).unwrap();
        let g = SetFunction::from_fn(y, z, |v| v % 2).unwrap();

        let d1 = CospanDiagram::new(&category, f.clone(), g.clone()).unwrap();
        let d2 = CospanDiagram::new(&category, g, f).unwrap();

        let u1 = category.pullback(&d1).unwrap();
        let u2 = category.pullback(&d2).unwrap();

        let err = pullback_point_iso(&category, &u1, &u2).unwrap_err();
        assert!(matches!(err, LimitError::DiagramMismatch(_)));
    }

    fn random_function(rng: &mut StdRng, domain: &FiniteSet, codomain: &FiniteSet) -> SetFunction {
        let n = codomain.cardinality();
        let mapping = domain
            .elements
            .iter()
            .map(|&x| (x, codomain.elements[rng.gen_range(0..n)]))
            .collect();
        SetFunction::new(domain.clone(), codomain.clone(), mapping).unwrap()
    }

    #[test]
    fn random_cospans_factor_every_competitor() {
        let mut rng = StdRng::seed_from_u64(42);
        let category = FinSet;

        for _ in 0..50 {
            let x = FiniteSet::range(0, rng.gen_range(1..5));
            let y = FiniteSet::range(10, 10 + rng.gen_range(1..5));
            let z = FiniteSet::range(20, 20 + rng.gen_range(1..4));

            let f = random_function(&mut rng, &x, &z);
            let g = random_function(&mut rng, &y, &z);
            let diagram = CospanDiagram::new(&category, f, g).unwrap();
            let witness = category.pullback(&diagram).unwrap();

            if witness.apex().cardinality() == 0 {
                continue;
            }

            // Any function into the apex, post-composed with the legs,
            // is a competitor; its mediator must be that function again.
            let w = FiniteSet::range(30, 30 + rng.gen_range(1..4));
            let into_apex = random_function(&mut rng, &w, witness.apex());
            let left = category
                .compose(&into_apex, witness.cone().left_leg())
                .unwrap();
            let right = category
                .compose(&into_apex, witness.cone().right_leg())
                .unwrap();
            let competitor = PullbackCone::new(&category, &diagram, left, right).unwrap();

            let mediator = witness.factor_through(&category, &competitor).unwrap();
            assert_eq!(mediator, into_apex);
            witness
                .mediator_agrees(&category, &competitor, &into_apex)
                .unwrap();
        }
    }
}
