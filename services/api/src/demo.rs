use crate::infra::{
    CannedTranscriber, CannedVisualAnalyzer, HeuristicGrammarChecker, InMemoryAnalysisRepository,
    SidecarMediaExtractor,
};
use clap::Args;
use podium::analysis::{
    compose_report, AnalysisReport, AnalysisService, AnalysisServiceError, GrammarChecker,
    ProgressSummary, VideoSubmission,
};
use podium::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Transcript file to score
    #[arg(long)]
    pub(crate) transcript: PathBuf,
    /// Emit the report as JSON instead of the rendered summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the canned transcript alongside each take's report
    #[arg(long)]
    pub(crate) include_transcripts: bool,
    /// Emit raw JSON payloads instead of rendered summaries
    #[arg(long)]
    pub(crate) json: bool,
}

/// First rehearsal take: filler-heavy delivery with a commanding tone.
const FIRST_TAKE: &str = "Um, so this quarter we, uh, basically missed the the \
launch window. You must approve the budget now, and we need to move fast. \
i think we should ship the fix immediately.";

/// Second take after coaching: courteous and far fewer hesitations.
const SECOND_TAKE: &str = "Thank you for joining today. I would like to walk \
you through the launch plan, and I could use your feedback on the rollout \
timeline. Please share questions at the end.";

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let transcript = std::fs::read_to_string(&args.transcript)?;
    let issues = HeuristicGrammarChecker
        .check(&transcript)
        .map_err(AnalysisServiceError::from)?;
    let report = compose_report(&transcript, &issues, None);

    if args.json {
        println!("{}", to_pretty_json(&report)?);
    } else {
        println!("Report for {}", args.transcript.display());
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Presentation coaching demo");

    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let takes = [
        ("rehearsal-take-1.mp4", FIRST_TAKE),
        ("rehearsal-take-2.mp4", SECOND_TAKE),
    ];

    for (filename, transcript) in takes {
        let service = demo_service(transcript, repository.clone());
        let record = service.submit(VideoSubmission {
            filename: filename.to_string(),
            video_path: PathBuf::from(format!("/tmp/podium-demo/{filename}")),
        })?;
        let processed = service.process(&record.analysis_id)?;

        println!("\nScored {filename} as {}", processed.analysis_id.0);
        if args.include_transcripts {
            println!("  Transcript: {transcript}");
        }
        if args.json {
            println!("{}", to_pretty_json(&processed.detail_view())?);
        } else if let Some(report) = processed.report.as_ref() {
            render_report(report);
        }
    }

    let service = demo_service(SECOND_TAKE, repository);
    let progress = service.progress()?;
    if args.json {
        println!("{}", to_pretty_json(&progress)?);
    } else {
        render_progress(&progress);
    }

    Ok(())
}

type DemoService = AnalysisService<
    SidecarMediaExtractor,
    CannedTranscriber,
    HeuristicGrammarChecker,
    CannedVisualAnalyzer,
    InMemoryAnalysisRepository,
>;

fn demo_service(transcript: &str, repository: Arc<InMemoryAnalysisRepository>) -> DemoService {
    AnalysisService::new(
        Arc::new(SidecarMediaExtractor),
        Arc::new(CannedTranscriber::new(transcript)),
        Arc::new(HeuristicGrammarChecker),
        Some(Arc::new(CannedVisualAnalyzer::sample())),
        repository,
    )
}

fn render_report(report: &AnalysisReport) {
    println!("  Overall {} -> {}", report.overall_score, report.overall_message);
    for item in &report.detailed_feedback {
        println!(
            "  {} {} [{}]: {}",
            item.category.label(),
            item.score,
            item.status.label(),
            item.summary
        );
        for issue in &item.issues {
            println!("    {issue}");
        }
        for suggestion in &item.suggestions {
            println!("    > {suggestion}");
        }
    }

    if !report.resources.is_empty() {
        println!("  Suggested resources:");
        for group in &report.resources {
            for link in &group.items {
                println!(
                    "    - [{}] {} ({})",
                    group.category.label(),
                    link.title,
                    link.kind
                );
            }
        }
    }

    let stats = &report.stats;
    println!(
        "  Stats: {} words / {} sentences | {} grammar errors | {} fillers | {} polite expressions",
        stats.total_words,
        stats.total_sentences,
        stats.grammar_errors,
        stats.filler_words,
        stats.polite_expressions
    );
    if let Some(video) = &report.video_stats {
        println!(
            "  Video: eye contact {:.1}% | hand usage {:.1}% | smile {:.1}% | expression {}",
            video.eye_contact_pct,
            video.hand_usage_pct,
            video.smile_pct,
            video.dominant_expression.label()
        );
    }
}

fn render_progress(progress: &ProgressSummary) {
    println!("\nProgress across takes");
    match &progress.series {
        Some(series) => {
            println!(
                "  {} completed analyses ({})",
                series.total_analyses,
                series.dates.join(", ")
            );
            let trend: Vec<String> = series.overall.iter().map(i64::to_string).collect();
            println!("  Overall trend: {}", trend.join(" -> "));
            println!(
                "  Improvement since first take: grammar {:+.1} | fluency {:+.1} | politeness {:+.1} | overall {:+.1}",
                series.improvement.grammar,
                series.improvement.fluency,
                series.improvement.politeness,
                series.improvement.overall
            );
        }
        None => println!("  {}", progress.message.unwrap_or("No progress data")),
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Io(err.into()))
}
