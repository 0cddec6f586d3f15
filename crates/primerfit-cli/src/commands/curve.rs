use crate::cli::CurveArgs;
use crate::config;
use crate::error::Result;
use crate::report;
use primerfit::core::models::sequence::Sequence;
use primerfit::core::scoring::loss::LossModel;
use primerfit::engine::curve::{self, LossCurve};
use primerfit::workflows::select::normalize_orientation;
use std::fs::File;
use std::io;
use tracing::info;

pub fn run(args: CurveArgs) -> Result<()> {
    let curve = compute_curve(&args)?;

    match &args.output {
        Some(path) => {
            report::write_curve_csv(&curve, File::create(path)?)?;
            println!("Loss curve written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            report::write_curve_table(&curve, &mut stdout.lock())?;
        }
    }

    if let Some(best) = curve.minimum() {
        info!(
            "Lowest total loss {:.4} at prefix length {}.",
            best.total_loss, best.prefix_length
        );
    }
    Ok(())
}

/// `-p` sets the weight of the plotted probability term; without it the
/// curve default applies.
fn compute_curve(args: &CurveArgs) -> Result<LossCurve> {
    let config = config::build_scoring_config(&args.scoring, args.complement_backward)?;
    let model = LossModel::new(
        config.scoring.target_tm,
        args.scoring
            .probability_scale
            .unwrap_or(config.curve_probability_scale),
    );

    let sequence = Sequence::parse(args.sequence.trim())?;
    let template = normalize_orientation(&sequence, args.orientation, config.complement_backward);

    Ok(curve::loss_curve(
        template.as_str(),
        &config.scorer(),
        &model,
    )?)
}
