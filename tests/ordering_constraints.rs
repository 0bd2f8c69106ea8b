#[cfg(test)]
mod test {
    use rate_tuning::{
        column::{
            column_ordering_constraints, column_scorer, column_tuning_specs,
            EXCITATORY_POPULATIONS, INHIBITORY_POPULATIONS,
        },
        constraints::RateConstraint,
        error::FitnessError,
        fitness::ObservedRates,
    };


    fn rates(pairs: &[(&str, f32)]) -> ObservedRates {
        pairs.iter()
            .map(|(population, rate)| (population.to_string(), *rate))
            .collect()
    }

    // interneurons outpace intratelencephalic cells, parvalbumin outpaces
    // somatostatin, and excitatory activity falls off with depth
    fn healthy_column_rates() -> ObservedRates {
        let mut observed = rates(&[
            ("IT2", 2.), ("IT4", 5.),
            ("IT5A", 6.), ("IT5B", 6.), ("PT5B", 6.),
            ("IT6", 4.), ("CT6", 4.),
        ]);

        for population in INHIBITORY_POPULATIONS.iter() {
            let rate = if population.starts_with("PV") { 12. } else { 11. };
            observed.insert(population.to_string(), rate);
        }

        observed
    }

    #[test]
    fn test_exceeds_holds_on_strictly_higher_rate() {
        let constraint = RateConstraint::exceeds("PV2", "IT2");

        let verdict = constraint.evaluate(&rates(&[("PV2", 11.), ("IT2", 4.)]))
            .expect("Could not evaluate check");
        assert!(verdict);
    }

    #[test]
    fn test_exceeds_fails_at_equal_rates() {
        let constraint = RateConstraint::exceeds("PV2", "IT2");

        let verdict = constraint.evaluate(&rates(&[("PV2", 4.), ("IT2", 4.)]))
            .expect("Could not evaluate check");
        assert!(!verdict);
    }

    #[test]
    fn test_exceeds_errors_on_missing_population() {
        let constraint = RateConstraint::exceeds("PV2", "IT2");

        match constraint.evaluate(&rates(&[("PV2", 11.)])) {
            Err(FitnessError::MissingPopulation(population)) => assert_eq!(population, "IT2"),
            _ => panic!("Expected a missing population error"),
        }
    }

    #[test]
    fn test_mean_exceeds_compares_group_means() {
        let constraint = RateConstraint::mean_exceeds(&["A", "B"], &["C"]);

        let verdict = constraint.evaluate(&rates(&[("A", 4.), ("B", 2.), ("C", 2.5)]))
            .expect("Could not evaluate check");
        assert!(verdict);

        // strict comparison, an exactly equal mean fails
        let verdict = constraint.evaluate(&rates(&[("A", 4.), ("B", 2.), ("C", 3.)]))
            .expect("Could not evaluate check");
        assert!(!verdict);
    }

    #[test]
    fn test_custom_check() {
        let constraint = RateConstraint::new(
            "total activity below 100",
            |observed| Ok(observed.values().sum::<f32>() < 100.),
        );

        let verdict = constraint.evaluate(&rates(&[("A", 40.), ("B", 50.)]))
            .expect("Could not evaluate check");
        assert!(verdict);

        let verdict = constraint.evaluate(&rates(&[("A", 40.), ("B", 70.)]))
            .expect("Could not evaluate check");
        assert!(!verdict);
    }

    #[test]
    fn test_constraint_names_describe_the_relationship() {
        assert_eq!(RateConstraint::exceeds("PV2", "IT2").name, "PV2 > IT2");
        assert_eq!(
            RateConstraint::mean_exceeds(&["A", "B"], &["C"]).name,
            "mean(A, B) > mean(C)",
        );
    }

    #[test]
    fn test_column_has_seventeen_tuned_populations() {
        let specs = column_tuning_specs();

        assert_eq!(specs.len(), EXCITATORY_POPULATIONS.len() + INHIBITORY_POPULATIONS.len());
        assert_eq!(specs["IT5A"].target, 5.);
        assert_eq!(specs["IT5A"].floor, 0.5);
        assert_eq!(specs["PV6"].target, 10.);
        assert_eq!(specs["PV6"].width, 15.);
    }

    #[test]
    fn test_column_checks_hold_for_healthy_column() {
        let observed = healthy_column_rates();

        for constraint in column_ordering_constraints().iter() {
            let verdict = constraint.evaluate(&observed)
                .expect("Could not evaluate check");
            assert!(verdict, "{} should hold for a healthy column", constraint.name);
        }
    }

    #[test]
    fn test_column_checks_catch_quiet_interneurons() {
        let mut observed = healthy_column_rates();
        observed.insert(String::from("PV5A"), 1.);

        let violations = column_ordering_constraints().iter()
            .filter(|constraint| {
                !constraint.evaluate(&observed).expect("Could not evaluate check")
            })
            .count();

        // PV5A > IT5A and PV5A > SOM5A both break
        assert_eq!(violations, 2);
    }

    #[test]
    fn test_column_scorer_scores_targets_at_unit_loss() {
        let mut observed = ObservedRates::new();
        for population in EXCITATORY_POPULATIONS.iter() {
            observed.insert(population.to_string(), 5.);
        }
        for population in INHIBITORY_POPULATIONS.iter() {
            observed.insert(population.to_string(), 10.);
        }

        let result = column_scorer(false).score(&observed)
            .expect("Could not score run");

        assert_eq!(result.loss, 1.);
        assert_eq!(result.penalties.len(), 17);
    }

    #[test]
    fn test_column_scorer_scales_loss_when_layer_ordering_breaks() {
        let observed = healthy_column_rates();

        let plain_loss = column_scorer(false).score(&observed)
            .expect("Could not score run")
            .loss;
        let checked_loss = column_scorer(true).score(&observed)
            .expect("Could not score run")
            .loss;

        // a healthy column passes every check so the loss is untouched
        assert_eq!(checked_loss, plain_loss);

        // swapping the interneuron ordering breaks the parvalbumin checks
        let mut violated = observed.clone();
        for population in INHIBITORY_POPULATIONS.iter() {
            let rate = if population.starts_with("PV") { 11. } else { 12. };
            violated.insert(population.to_string(), rate);
        }

        let plain_violated_loss = column_scorer(false).score(&violated)
            .expect("Could not score run")
            .loss;
        let checked_violated_loss = column_scorer(true).score(&violated)
            .expect("Could not score run")
            .loss;

        assert!(checked_violated_loss > plain_violated_loss);
    }
}
