use crate::matching::{Matcher, MatcherConfig, NicknamePolicy, Person};

pub(super) fn person(id: &str, first: &str, last: &str) -> Person {
    Person::with_id(id, first, last)
}

pub(super) fn matcher(reference: Vec<Person>) -> Matcher {
    Matcher::new(reference)
}

pub(super) fn unique_matcher(reference: Vec<Person>) -> Matcher {
    Matcher::with_config(
        reference,
        MatcherConfig {
            nickname_policy: NicknamePolicy::UniqueCandidate,
        },
    )
}

pub(super) fn matched_id(matcher: &Matcher, query: &Person) -> Option<String> {
    matcher
        .match_person(query)
        .and_then(|found| found.id())
        .map(|id| id.to_string())
}

/// Two Rose households sharing a nickname-equivalent first name.
pub(super) fn ambiguous_roses() -> Vec<Person> {
    vec![
        person("1003", "Theodore", "Rose"),
        person("2003", "Teddy", "Rose"),
        person("3003", "Margaret", "Rose"),
    ]
}
