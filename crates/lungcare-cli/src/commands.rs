use std::fs;

use anyhow::{Context, Result, bail};
use tracing::info;

use lungcare_imaging::{ImageClassifier, MockImageClassifier};
use lungcare_model::{Gender, PatientData};
use lungcare_risk::predict_lung_disease;

use crate::cli::{AnalyzeArgs, AssessArgs};
use crate::report;
use crate::types::{AnalyzeOutcome, AssessOutcome};

pub fn run_assess(args: &AssessArgs) -> Result<AssessOutcome> {
    let raw = fs::read_to_string(&args.patient_file)
        .with_context(|| format!("reading {}", args.patient_file.display()))?;
    let patient: PatientData = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.patient_file.display()))?;
    patient.validate()?;

    let result = predict_lung_disease(&patient);
    info!(
        probability = result.probability,
        risk_level = %result.risk_level,
        confidence = result.confidence,
        "questionnaire scored"
    );

    let report_path = match &args.output {
        Some(path) => {
            report::write_json(path, &report::assessment_report(&patient, &result))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(AssessOutcome {
        patient,
        result,
        report_path,
    })
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let metadata = fs::metadata(&args.image_file)
        .with_context(|| format!("reading {}", args.image_file.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a file", args.image_file.display());
    }
    let file_name = args
        .image_file
        .file_name()
        .and_then(|name| name.to_str())
        .context("image path has no usable file name")?
        .to_string();
    let byte_size = metadata.len();

    let mut classifier = match args.seed {
        Some(seed) => MockImageClassifier::with_seed(seed),
        None => MockImageClassifier::new(),
    };
    let result = classifier.classify(&file_name, byte_size);
    info!(
        file_name,
        byte_size,
        diagnosis = %result.diagnosis,
        "simulated analysis complete"
    );

    let report_path = match &args.output {
        Some(path) => {
            report::write_json(path, &report::analysis_report(&file_name, byte_size, &result))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(AnalyzeOutcome {
        file_name,
        byte_size,
        result,
        report_path,
    })
}

/// Prints a starter questionnaire document with every flag at its
/// default.
pub fn run_template() -> Result<()> {
    let starter = PatientData::baseline(55, Gender::Female);
    let json = serde_json::to_string_pretty(&starter).context("serializing template")?;
    println!("{json}");
    Ok(())
}
