use crate::cli::{ScoreArgs, ScoringArgs};
use crate::config;
use crate::error::Result;
use primerfit::core::models::sequence::Sequence;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: ScoreArgs) -> Result<()> {
    let stdout = io::stdout();
    score_sequences(&args, &mut stdout.lock())
}

fn score_sequences<W: Write>(args: &ScoreArgs, out: &mut W) -> Result<()> {
    let scoring = ScoringArgs {
        genome_length: args.genome_length,
        ..Default::default()
    };
    let scorer = config::build_scoring_config(&scoring, false)?.scorer();
    info!(
        "Scoring {} sequence(s) against a genome of {} bases.",
        args.sequences.len(),
        scorer.genome_length()
    );

    for raw in &args.sequences {
        let sequence = Sequence::parse(raw.trim())?;
        let score = scorer.score(sequence.as_str())?;
        writeln!(
            out,
            "{}\tTm: {} | prob: {:.10} | length: {}",
            sequence,
            score.melting_temperature,
            score.occurrence_probability,
            sequence.len()
        )?;
    }
    Ok(())
}
