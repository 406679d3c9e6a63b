use fuzzy_names::{MatchTier, Matcher, MatcherConfig, NicknamePolicy, Person};

fn reference() -> Vec<Person> {
    [
        ("1000", "Saurabh", "Shah"),
        ("1001", "Andrew", "Zamler Carhart"),
        ("1002", "Cheuk", "Kwan Chan"),
        ("1003", "Theodore", "Rose"),
        ("1004", "YVONNE", "WANG"),
        ("1005", "Henry", "E. Warren"),
        ("1006", "Alice (미선)", "Yoon"),
        ("1007", "Bartłomiej", "Karmilowicz"),
        ("1008", "Angel Anibal", "Dionisio Castillo"),
        ("1009", "Yao", "Ding"),
        ("1010", "Evan B.", "Compton"),
        ("1011", "Samantha", "Grone, Esq."),
        ("1012", "Maria", "Malygina, PhD"),
        ("1013", "Ronald", "Pena"),
    ]
    .into_iter()
    .map(|(id, first, last)| Person::with_id(id, first, last))
    .collect()
}

/// Query spelling, expected reference id and the tier expected to find it.
fn queries() -> Vec<(Person, &'static str, MatchTier)> {
    use MatchTier::*;
    [
        ("100", "Saurabh", "Shah", "1000", ExactFullName),
        ("101", "Andrew", "Zamler-Carhart", "1001", ExactFullName),
        ("102", "Cheuk Kwan", "Chan", "1002", ExactFullName),
        ("103", "Theo", "Rose", "1003", Nickname),
        ("104", "Yvonne", "Wang", "1004", ExactFullName),
        ("105", "Henry E.", "Warren", "1005", ExactFullName),
        ("106", "Alice", "Yoon", "1006", ExactFullName),
        ("107", "bart", "karmilowicz", "1007", Nickname),
        ("108", "Angel", "Dionisio", "1008", ExactFullName),
        ("109", "Yao (丁尧)", "Ding", "1009", CompoundVariation),
        ("110", "Evan", "Compton", "1010", ExactFullName),
        ("111", "Sam", "Grone", "1011", Nickname),
        ("112", "Masha", "Malygina", "1012", Nickname),
        ("113", "Ronny", "Peña", "1013", Nickname),
    ]
    .into_iter()
    .map(|(id, first, last, expected, tier)| (Person::with_id(id, first, last), expected, tier))
    .collect()
}

fn assert_every_query_matches(matcher: &Matcher) {
    for (query, expected, tier) in queries() {
        let outcome = matcher
            .resolve(&query)
            .unwrap_or_else(|| panic!("no match for {}", query.display_name()));
        assert_eq!(
            outcome.person.id().map(|id| id.as_str()),
            Some(expected),
            "wrong match for {}",
            query.display_name()
        );
        assert_eq!(outcome.tier, tier, "wrong tier for {}", query.display_name());
    }
}

#[test]
fn every_sample_query_resolves_with_default_policy() {
    assert_every_query_matches(&Matcher::new(reference()));
}

#[test]
fn every_sample_query_resolves_with_unique_policy() {
    let matcher = Matcher::with_config(
        reference(),
        MatcherConfig {
            nickname_policy: NicknamePolicy::UniqueCandidate,
        },
    );
    assert_every_query_matches(&matcher);
}

#[test]
fn batch_report_matches_all_sample_queries() {
    let matcher = Matcher::new(reference());
    let queries: Vec<Person> = queries().into_iter().map(|(query, _, _)| query).collect();

    let batch = matcher.resolve_all(&queries);
    let summary = batch.summary();

    assert_eq!(summary.matched, 14);
    assert_eq!(summary.total, 14);
    assert_eq!(summary.by_tier.exact_full_name, 8);
    assert_eq!(summary.by_tier.compound_variation, 1);
    assert_eq!(summary.by_tier.nickname, 5);
    assert_eq!(batch.id_mapping().len(), 14);
}

#[test]
fn matcher_serves_queries_from_several_threads() {
    let matcher = Matcher::new(reference());
    let queries = queries();

    std::thread::scope(|scope| {
        for (query, expected, _) in &queries {
            let matcher = &matcher;
            scope.spawn(move || {
                let found = matcher.match_person(query).expect("query matches");
                assert_eq!(found.id().map(|id| id.as_str()), Some(*expected));
            });
        }
    });
}
