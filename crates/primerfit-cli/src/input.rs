use crate::cli::SelectArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::parse_orientation;
use primerfit::core::models::sequence::Orientation;
use primerfit::workflows::select::PrimerRequest;
use serde::Deserialize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct InputRecord {
    sequence: String,
    orientation: String,
}

/// Gathers requests from `--forward`/`--backward`, then `--input`, then the
/// interactive prompt. Keys are uppercased; validation is left to the core.
pub fn collect_requests(args: &SelectArgs) -> Result<Vec<PrimerRequest>> {
    let mut requests: Vec<PrimerRequest> = args
        .forward
        .iter()
        .map(|seq| request_from(seq, Orientation::Forward))
        .chain(
            args.backward
                .iter()
                .map(|seq| request_from(seq, Orientation::Backward)),
        )
        .collect();

    if let Some(path) = &args.input {
        info!("Reading input sequences from {:?}", path);
        requests.extend(read_csv(path)?);
    }

    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        requests.extend(prompt_requests(stdin.lock(), stdout.lock())?);
    }

    if requests.is_empty() {
        return Err(CliError::Argument(
            "No input sequences. Use --forward, --backward, --input or --interactive.".to_string(),
        ));
    }

    debug!("Collected {} request(s).", requests.len());
    Ok(requests)
}

fn request_from(sequence: &str, orientation: Orientation) -> PrimerRequest {
    PrimerRequest::new(sequence.trim().to_ascii_uppercase(), orientation)
}

pub fn read_csv(path: &Path) -> Result<Vec<PrimerRequest>> {
    let file_error = |source: anyhow::Error| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut requests = Vec::new();
    for record in reader.deserialize() {
        let record: InputRecord = record.map_err(|e| file_error(e.into()))?;
        let orientation =
            parse_orientation(&record.orientation).map_err(|e| file_error(e.into()))?;
        requests.push(request_from(&record.sequence, orientation));
    }
    Ok(requests)
}

/// Prompts for sequence/orientation pairs until a blank sequence or EOF.
pub fn prompt_requests<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<Vec<PrimerRequest>> {
    let mut requests = Vec::new();
    loop {
        let Some(sequence) = prompt_line(&mut input, &mut output, "Sequence (blank to finish): ")?
        else {
            break;
        };
        if sequence.is_empty() {
            break;
        }

        let orientation = loop {
            let Some(answer) =
                prompt_line(&mut input, &mut output, "Orientation [forward/backward]: ")?
            else {
                return Ok(requests);
            };
            match parse_orientation(&answer) {
                Ok(orientation) => break orientation,
                Err(e) => writeln!(output, "{}", e)?,
            }
        };

        requests.push(request_from(&sequence, orientation));
    }
    Ok(requests)
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
