#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use proptest::sample::select;

    use crate::domain::comparison::*;
    use crate::domain::foundation::ClusterId;
    use crate::domain::population::PopulationIndex;
    use crate::domain::survey::{
        AgeBracket, ClusterAssignment, EducationLevel, FavouriteAnimals, FavouritePlace, Gender,
        SurveyAttribute, SurveyRecord,
    };

    fn id(label: &str) -> ClusterId {
        ClusterId::new(label).unwrap()
    }

    fn record(age: AgeBracket, gender: Gender) -> SurveyRecord {
        SurveyRecord::new(
            age,
            EducationLevel::Higher,
            FavouriteAnimals::Dogs,
            FavouritePlace::ByTheWater,
            gender,
        )
    }

    fn index_of(labels: &[&str]) -> PopulationIndex {
        labels
            .iter()
            .map(|label| ClusterAssignment::new(record(AgeBracket::From25To34, Gender::Male), id(label)))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scenarios
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn six_a_four_b_targeting_a() {
        let index = index_of(&["A", "A", "A", "A", "A", "A", "B", "B", "B", "B"]);
        let partition = ClusterComparisonEngine::partition(&index, &id("A"));

        assert_eq!(ClusterComparisonEngine::size_comparison(&partition), (6, 4));

        let proportions = ClusterComparisonEngine::group_proportions(&partition);
        assert_eq!(proportions.total(), 10);
        assert_eq!(proportions.get(Group::Target), 6);
        assert_eq!(proportions.get(Group::Other), 4);
        assert!((proportions.share_of_target() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn unseen_target_yields_empty_target_group() {
        let index = index_of(&["A", "A", "A", "A", "A"]);
        let partition = ClusterComparisonEngine::partition(&index, &id("B"));

        assert_eq!(ClusterComparisonEngine::size_comparison(&partition), (0, 5));
        assert_eq!(partition.target_cluster(), &id("B"));
    }

    #[test]
    fn whole_population_in_target_leaves_other_empty() {
        let index = index_of(&["A", "A", "A"]);
        let partition = ClusterComparisonEngine::partition(&index, &id("A"));

        assert_eq!(ClusterComparisonEngine::size_comparison(&partition), (3, 0));
        let distribution =
            ClusterComparisonEngine::attribute_distribution(&partition, SurveyAttribute::Gender);
        assert!(distribution.other.is_empty());
    }

    #[test]
    fn empty_index_has_zero_share() {
        let index = PopulationIndex::default();
        let partition = ClusterComparisonEngine::partition(&index, &id("A"));
        let proportions = ClusterComparisonEngine::group_proportions(&partition);

        assert_eq!(proportions.total(), 0);
        assert_eq!(proportions.share_of_target(), 0.0);
    }

    #[test]
    fn distribution_counts_each_group_independently() {
        let index: PopulationIndex = vec![
            ClusterAssignment::new(record(AgeBracket::Under18, Gender::Female), id("A")),
            ClusterAssignment::new(record(AgeBracket::Under18, Gender::Female), id("A")),
            ClusterAssignment::new(record(AgeBracket::Over65, Gender::Male), id("A")),
            ClusterAssignment::new(record(AgeBracket::Unknown, Gender::Male), id("B")),
        ]
        .into_iter()
        .collect();

        let partition = ClusterComparisonEngine::partition(&index, &id("A"));
        let age = ClusterComparisonEngine::attribute_distribution(&partition, SurveyAttribute::Age);

        assert_eq!(age.attribute, SurveyAttribute::Age);
        assert_eq!(age.categories(Group::Target), vec!["<18", ">=65"]);
        assert_eq!(age.count(Group::Target, "<18"), Some(2));
        assert_eq!(age.count(Group::Target, ">=65"), Some(1));
        assert_eq!(age.categories(Group::Other), vec!["unknown"]);
        // Not observed in the target group, so not reported there.
        assert_eq!(age.count(Group::Target, "unknown"), None);
    }

    #[test]
    fn distribution_follows_domain_order() {
        let index: PopulationIndex = vec![
            ClusterAssignment::new(record(AgeBracket::Unknown, Gender::Male), id("A")),
            ClusterAssignment::new(record(AgeBracket::From45To54, Gender::Male), id("A")),
            ClusterAssignment::new(record(AgeBracket::Under18, Gender::Male), id("A")),
        ]
        .into_iter()
        .collect();

        let partition = ClusterComparisonEngine::partition(&index, &id("A"));
        let age = ClusterComparisonEngine::attribute_distribution(&partition, SurveyAttribute::Age);

        assert_eq!(age.categories(Group::Target), vec!["<18", "45-54", "unknown"]);
    }

    #[test]
    fn compare_bundles_every_attribute() {
        let index = index_of(&["A", "B", "B"]);
        let comparison = ClusterComparisonEngine::compare(&index, &id("B"));

        assert_eq!(comparison.target_cluster, id("B"));
        assert_eq!((comparison.target_count, comparison.other_count), (2, 1));
        let attributes: Vec<_> = comparison.distributions.iter().map(|d| d.attribute).collect();
        assert_eq!(attributes, SurveyAttribute::all().to_vec());
    }

    #[test]
    fn group_encodings_match_legend() {
        assert_eq!(Group::Target.color(), "green");
        assert_eq!(Group::Other.color(), "gray");
        assert_eq!(Group::Target.label(), "Your community");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────

    fn record_strategy() -> impl Strategy<Value = SurveyRecord> {
        (
            select(AgeBracket::all()),
            select(EducationLevel::all()),
            select(FavouriteAnimals::all()),
            select(FavouritePlace::all()),
            select(Gender::all()),
        )
            .prop_map(|(age, edu, animals, place, gender)| {
                SurveyRecord::new(age, edu, animals, place, gender)
            })
    }

    fn index_strategy() -> impl Strategy<Value = PopulationIndex> {
        prop::collection::vec((record_strategy(), select(vec!["A", "B", "C", "D"])), 0..60)
            .prop_map(|rows| {
                rows.into_iter()
                    .map(|(record, label)| ClusterAssignment::new(record, id(label)))
                    .collect()
            })
    }

    fn target_strategy() -> impl Strategy<Value = ClusterId> {
        select(vec!["A", "B", "C", "D", "E"]).prop_map(id)
    }

    proptest! {
        #[test]
        fn partition_is_disjoint_and_complete(index in index_strategy(), target in target_strategy()) {
            let partition = ClusterComparisonEngine::partition(&index, &target);
            let (target_count, other_count) = ClusterComparisonEngine::size_comparison(&partition);
            prop_assert_eq!(target_count + other_count, index.len());

            let target_rows: HashSet<*const ClusterAssignment> =
                partition.target().iter().map(|row| *row as *const _).collect();
            let other_rows: HashSet<*const ClusterAssignment> =
                partition.other().iter().map(|row| *row as *const _).collect();

            prop_assert!(target_rows.is_disjoint(&other_rows));
            for row in index.iter() {
                let ptr = row as *const ClusterAssignment;
                prop_assert!(target_rows.contains(&ptr) ^ other_rows.contains(&ptr));
            }
            for row in partition.target() {
                prop_assert_eq!(row.cluster_id(), &target);
            }
            for row in partition.other() {
                prop_assert_ne!(row.cluster_id(), &target);
            }
        }

        #[test]
        fn absent_target_leaves_everyone_in_other(index in index_strategy()) {
            let partition = ClusterComparisonEngine::partition(&index, &id("Z"));
            prop_assert_eq!(ClusterComparisonEngine::size_comparison(&partition), (0, index.len()));
        }

        #[test]
        fn proportions_sum_to_population(index in index_strategy(), target in target_strategy()) {
            let partition = ClusterComparisonEngine::partition(&index, &target);
            let proportions = ClusterComparisonEngine::group_proportions(&partition);
            prop_assert_eq!(proportions.target + proportions.other, index.len());
        }

        #[test]
        fn distributions_report_only_observed_categories(
            index in index_strategy(),
            target in target_strategy(),
        ) {
            let partition = ClusterComparisonEngine::partition(&index, &target);
            for attribute in SurveyAttribute::all() {
                let distribution = ClusterComparisonEngine::attribute_distribution(&partition, *attribute);
                for group in Group::all() {
                    let rows = partition.group(*group);
                    for entry in distribution.group(*group) {
                        let actual = rows
                            .iter()
                            .filter(|row| row.record().label(*attribute) == entry.category)
                            .count();
                        prop_assert!(entry.count > 0);
                        prop_assert_eq!(entry.count, actual);
                    }
                    prop_assert_eq!(distribution.total(*group), rows.len());
                }
            }
        }

        #[test]
        fn compare_is_deterministic(index in index_strategy(), target in target_strategy()) {
            let first = ClusterComparisonEngine::compare(&index, &target);
            let second = ClusterComparisonEngine::compare(&index, &target);
            prop_assert_eq!(first, second);
        }
    }
}
