use std::env;
use std::error::Error;
use std::process::ExitCode;

use bdcorr::{BdcorrConfig, Correlator, Dataset, JobCorrelation};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: bdcorr <jobs.json> <programs.json> <contacts.json> [config.yaml]";
const TOP_CORRELATIONS: usize = 10;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if env::var("BDCORR_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn summarize(correlation: &JobCorrelation) -> serde_json::Value {
    json!({
        "job_id": correlation.job.id,
        "title": correlation.job.title,
        "company": correlation.job.company,
        "overall_confidence": correlation.overall_confidence,
        "band": correlation.band().as_str(),
        "primary_program": correlation.primary_program().map(|p| json!({
            "id": p.program.id,
            "name": p.program.display_name(),
            "confidence": p.confidence,
        })),
        "contacts": correlation.contacts.iter().take(3).map(|c| json!({
            "name": c.contact.name,
            "role": c.role.label(),
            "confidence": c.confidence,
        })).collect::<Vec<_>>(),
        "related_jobs": correlation.related_jobs.len(),
    })
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let config = match args.get(3) {
        Some(path) => BdcorrConfig::from_file(path)?,
        None => BdcorrConfig::default(),
    };
    let dataset = Dataset::from_json_files(&args[0], &args[1], &args[2])?;

    let correlator = Correlator::with_cache(
        dataset.jobs,
        dataset.programs,
        dataset.contacts,
        config.correlation_options().with_auto_correlate(true),
        config.build_cache().into(),
    )?;
    if let Some(err) = correlator.error() {
        return Err(err.into());
    }

    let mut ranked: Vec<&JobCorrelation> = correlator.correlations().iter().collect();
    ranked.sort_by(|a, b| b.overall_confidence.cmp(&a.overall_confidence));

    let report = json!({
        "config": config.name,
        "stats": correlator.stats(),
        "top": ranked
            .into_iter()
            .take(TOP_CORRELATIONS)
            .map(summarize)
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bdcorr: {err}");
            ExitCode::FAILURE
        }
    }
}
