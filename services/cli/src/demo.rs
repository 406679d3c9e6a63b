use crate::sample;
use clap::{Args, ValueEnum};
use fuzzy_names::config::AppConfig;
use fuzzy_names::error::AppError;
use fuzzy_names::matching::{people_from_records, ResolvedQueryView};
use fuzzy_names::{
    normalize_name, BatchResolution, Matcher, MatcherConfig, NicknamePolicy, Person,
    ResolutionSummary,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Nickname tier policy (overrides FUZZY_NAMES_NICKNAME_POLICY)
    #[arg(long)]
    pub(crate) policy: Option<NicknamePolicy>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    /// Raw names to normalize
    #[arg(required = true)]
    pub(crate) names: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Query first name
    #[arg(long)]
    pub(crate) first: String,
    /// Query last name
    #[arg(long)]
    pub(crate) last: String,
    /// Nickname tier policy (overrides FUZZY_NAMES_NICKNAME_POLICY)
    #[arg(long)]
    pub(crate) policy: Option<NicknamePolicy>,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    policy: NicknamePolicy,
    summary: ResolutionSummary,
    results: Vec<ResolvedQueryView>,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let policy = args.policy.unwrap_or(config.matching.nickname_policy);
    let matcher = sample_matcher(policy)?;
    let queries = people_from_records(sample::query_records())?;
    let batch = matcher.resolve_all(&queries);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&batch),
        OutputFormat::Json => render_json(&batch, policy)?,
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_normalize(args: NormalizeArgs) {
    for name in &args.names {
        println!("{name} -> {}", normalize_name(name));
    }
}

pub(crate) fn run_match(args: MatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let policy = args.policy.unwrap_or(config.matching.nickname_policy);
    let matcher = sample_matcher(policy)?;
    let query = Person::new(None, args.first, args.last);

    match matcher.resolve(&query) {
        Some(outcome) => println!(
            "{} / {} = {} / {} ({})",
            query.first_name(),
            query.last_name(),
            outcome.person.first_name(),
            outcome.person.last_name(),
            outcome.tier.label()
        ),
        None => println!("no match for {}", query.display_name()),
    }
    Ok(())
}

fn sample_matcher(policy: NicknamePolicy) -> Result<Matcher, AppError> {
    let reference = people_from_records(sample::reference_records())?;
    Ok(Matcher::with_config(
        reference,
        MatcherConfig {
            nickname_policy: policy,
        },
    ))
}

fn render_text(batch: &BatchResolution<'_>) -> String {
    let mut lines: Vec<String> = batch
        .iter()
        .map(|entry| match entry.matched() {
            Some(target) => format!(
                "{} / {} = {} / {}",
                entry.query.first_name(),
                entry.query.last_name(),
                target.first_name(),
                target.last_name()
            ),
            None => format!("no match for {}", entry.query.display_name()),
        })
        .collect();

    let summary = batch.summary();
    lines.push(String::new());
    lines.push(format!("matched {} of {}", summary.matched, summary.total));
    lines.join("\n")
}

fn render_json(batch: &BatchResolution<'_>, policy: NicknamePolicy) -> Result<String, AppError> {
    let report = DemoReport {
        policy,
        summary: batch.summary(),
        results: batch.views(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
