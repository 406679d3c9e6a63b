use super::normalizer::normalize_name;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static STANDARD_TABLE: OnceLock<Arc<NicknameTable>> = OnceLock::new();

/// First names treated as interchangeable, e.g. `robert`, `bob`, `rob`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameGroup {
    names: Vec<String>,
}

impl NicknameGroup {
    fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let normalized = normalize_name(name.as_ref());
            if !normalized.is_empty() && !unique.contains(&normalized) {
                unique.push(normalized);
            }
        }
        Self { names: unique }
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.names.iter().any(|name| name == normalized)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Static collection of nickname groups with a reverse lookup by name.
///
/// Groups may overlap (`ted` belongs to both the `edward` and `theodore` groups); lookups
/// return groups in table order.
#[derive(Debug, Clone, Default)]
pub struct NicknameTable {
    groups: Vec<NicknameGroup>,
    by_name: HashMap<String, Vec<usize>>,
}

impl NicknameTable {
    /// The compiled-in table, built on first use and shared afterwards.
    pub fn standard() -> Arc<NicknameTable> {
        STANDARD_TABLE
            .get_or_init(|| Arc::new(Self::from_groups(STANDARD_GROUPS.iter().copied())))
            .clone()
    }

    /// Builds a table from raw groups; names are normalized on the way in.
    pub fn from_groups<G, I, S>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for group in groups {
            let group = NicknameGroup::new(group);
            if group.is_empty() {
                continue;
            }

            let position = table.groups.len();
            for name in group.names() {
                table.by_name.entry(name.clone()).or_default().push(position);
            }
            table.groups.push(group);
        }
        table
    }

    /// Every group containing `normalized`, in table order. Empty when the name is unknown.
    pub fn groups_containing(&self, normalized: &str) -> Vec<&NicknameGroup> {
        self.by_name
            .get(normalized)
            .map(|positions| positions.iter().map(|&pos| &self.groups[pos]).collect())
            .unwrap_or_default()
    }

    /// The first group in table order that contains `normalized`.
    pub fn first_group_containing(&self, normalized: &str) -> Option<&NicknameGroup> {
        self.by_name
            .get(normalized)
            .and_then(|positions| positions.first())
            .map(|&pos| &self.groups[pos])
    }

    pub fn are_equivalent(&self, left: &str, right: &str) -> bool {
        self.groups_containing(left)
            .iter()
            .any(|group| group.contains(right))
    }

    pub fn groups(&self) -> &[NicknameGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

const STANDARD_GROUPS: &[&[&str]] = &[
    &["abigail", "abbey", "abby"],
    &["albert", "al"],
    &["alex", "alejandro", "alexander", "alexandar", "alexandra", "ali", "sasha"],
    &["alison", "allison", "ali", "allie", "ally"],
    &["amanda", "mandy"],
    &["ana", "annie"],
    &["andrew", "andy", "drew"],
    &["anthony", "tony"],
    &["arthur", "art", "arty"],
    &["bartholomew", "bartlomiej", "bart"],
    &["benjamin", "ben"],
    &["bernard", "bernie", "bern"],
    &["bradley", "brad"],
    &["caroline", "carolyn"],
    &["cassie", "catherine"],
    &["cat", "catherine", "cathie"],
    &[
        "cait", "catherine", "cathy", "ekaterina", "kait", "kaitlin", "kat", "kate", "katelyn",
        "katerina", "katharine", "katherine", "katheryn", "kathleen", "kathryn", "kathy",
        "katie", "katrina", "katy", "yekaterina",
    ],
    &["charles", "charlie", "chuck"],
    &[
        "christopher", "christina", "christine", "chris", "chrissy", "chrissie", "tina",
    ],
    &["cindi", "cynthia", "cindee"],
    &["cynthia", "cindy", "cynth"],
    &["daniel", "dan", "danny", "dani", "danielle"],
    &["david", "dave"],
    &["deb", "debra", "debbi", "debbie", "deborah"],
    &["dennis", "denny"],
    &["donald", "don", "donnie", "donny"],
    &["dyanne", "dee dee"],
    &["edward", "ed", "eddie", "ted", "eduardo"],
    &["elena", "yelena"],
    &["eli", "eliezer", "elias"],
    &[
        "elizabeth", "betty", "beth", "liz", "lizzy", "lizzie", "lisbeth", "lizbeth", "lisa",
        "lizz",
    ],
    &["eugene", "gene"],
    &["florence", "flo"],
    &["frances", "fran", "francie", "francis", "frank"],
    &["frederick", "fred", "freddy"],
    &["gabby", "gabriela", "gabi", "gabrielle", "gaby"],
    &["giannina", "gina"],
    &["gregory", "greg"],
    &["henry", "hank"],
    &["irving", "irv"],
    &["jacci", "jacqueline", "jacki", "jackie", "jaclyn"],
    &["jake", "jacob"],
    &["james", "jim", "jimmy"],
    &["janet", "janice", "jan"],
    &["jed", "jedediah", "jebediah"],
    &["jeffrey", "jeff"],
    &["jennifer", "jenny", "jenn", "jen"],
    &["joanie", "joan"],
    &["joey", "joel"],
    &["john", "jonathan", "jonny", "johnny", "jony", "jack", "jon"],
    &["joseph", "joe"],
    &["joshua", "josh"],
    &["judith", "judy", "judi"],
    &["kenneth", "ken", "kenny"],
    &["kimberley", "kimberly", "kim"],
    &["lawrence", "larry"],
    &["laura", "lauren", "laurie", "laurine", "laurene"],
    &["leonard", "leo"],
    &["lily", "lil", "lillian", "lili", "liliana", "lilly"],
    &["margaret", "maggie", "margy", "margie", "meg", "megan"],
    &["maria", "masha"],
    &["matthew", "matt"],
    &["michael", "mike"],
    &["nancy", "nan"],
    &["nathan", "nat", "nate"],
    &["nicholas", "nick"],
    &["norman", "norm"],
    &["pamela", "pam"],
    &["patrick", "patricia", "patrice", "paddy", "patty", "pat", "patti"],
    &["peter", "pete"],
    &["philip", "phillip", "phil"],
    &["rammy", "ram"],
    &["raymond", "ray"],
    &["renée", "renee"],
    &["richard", "dick", "rick", "rich"],
    &["robert", "bob", "bobby", "rob", "roberta", "bobbie", "robby", "robbie"],
    &["rodrigo", "rod"],
    &["ronald", "ron", "ronny", "ronnie", "veronica"],
    &["russell", "russ"],
    &["samuel", "sam", "sammy", "sammie", "samantha"],
    &["sophia", "sophie"],
    &["stephen", "steven", "steve"],
    &["stuart", "stu"],
    &["susan", "sue", "suzie"],
    &["svetlana", "sveta", "lana"],
    &["tammy", "tamara", "tammie", "tamala"],
    &["teresa", "terry", "terrence", "teri", "theresa", "therese"],
    &["theodore", "theo", "ted", "teddy"],
    &["thomas", "tom", "thom", "tommy", "tommie"],
    &["timothy", "tim", "timmy", "timmie"],
    &["toby", "tobin"],
    &["tori", "victoria", "tory", "vickie", "vicky"],
    &["tracy", "traci"],
    &["trisha", "patricia", "trish"],
    &["valerie", "val"],
    &["vincent", "vince"],
    &["walter", "walt", "wally"],
    &["william", "will", "willy", "bill", "billy"],
    &["wolf", "wolfgang"],
    &["yianni", "ioannis"],
    &["zachary", "zac", "zach", "zack"],
];
