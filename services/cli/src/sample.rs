use fuzzy_names::NameRecord;

const REFERENCE: &[(&str, &str, &str)] = &[
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
];

const QUERIES: &[(&str, &str, &str)] = &[
    ("100", "Saurabh", "Shah"),
    ("101", "Andrew", "Zamler-Carhart"),
    ("102", "Cheuk Kwan", "Chan"),
    ("103", "Theo", "Rose"),
    ("104", "Yvonne", "Wang"),
    ("105", "Henry E.", "Warren"),
    ("106", "Alice", "Yoon"),
    ("107", "bart", "karmilowicz"),
    ("108", "Angel", "Dionisio"),
    ("109", "Yao (丁尧)", "Ding"),
    ("110", "Evan", "Compton"),
    ("111", "Sam", "Grone"),
    ("112", "Masha", "Malygina"),
    ("113", "Ronny", "Peña"),
];

pub(crate) fn reference_records() -> Vec<NameRecord> {
    to_records(REFERENCE)
}

pub(crate) fn query_records() -> Vec<NameRecord> {
    to_records(QUERIES)
}

fn to_records(rows: &[(&str, &str, &str)]) -> Vec<NameRecord> {
    rows.iter()
        .map(|&(id, first, last)| NameRecord::new(Some(id), first, last))
        .collect()
}
