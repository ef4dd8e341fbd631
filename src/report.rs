use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use survey_data::*;

use std::fs;
use std::path::PathBuf;

use text_diff::print_diff;

use crate::args::Args;
use crate::report::config_reader::*;
use crate::report::html::render_page;
use crate::report::io_common::{parse_segment, report_path, write_report};
use crate::report::io_csv::read_csv_table;

mod config_reader;
mod html;
mod io_common;
mod io_csv;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ReportError {
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of CSV file {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Error reading file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing settings file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Invalid setting {key}: {content}"))]
    InvalidSetting { key: String, content: String },
    #[snafu(display("Invalid segment {content}, expected COLUMN=VALUE"))]
    InvalidSegment { content: String },
    #[snafu(display("Invalid survey data ({stage})"))]
    Data { source: DataError, stage: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Where to read the survey from, and where to write the report.
#[derive(PartialEq, Debug, Clone)]
pub struct ReportOptions {
    pub survey_name: String,
    pub values_path: String,
    pub labels_path: String,
    pub variables_path: String,
    pub settings_path: String,
    pub segment: RowFilter,
    pub segment_name: String,
    pub output_path: String,
    pub reference_path: Option<String>,
}

impl ReportOptions {
    /// Uses the default layout of the data directory, unless the paths are given explicitly.
    pub fn from_args(args: &Args) -> ReportResult<ReportOptions> {
        let default_path = |suffix: &str| -> String {
            let p: PathBuf = [args.data_dir.clone(), format!("{}{}", args.survey, suffix)]
                .iter()
                .collect();
            p.display().to_string()
        };
        let mut segment = RowFilter::new();
        for s in args.segment.iter() {
            let (column, value) = parse_segment(s)?;
            segment.insert(column, value);
        }
        Ok(ReportOptions {
            survey_name: args.survey.clone(),
            values_path: args
                .values
                .clone()
                .unwrap_or_else(|| default_path("_values.csv")),
            labels_path: args
                .labels
                .clone()
                .unwrap_or_else(|| default_path("_labels.csv")),
            variables_path: args
                .variables
                .clone()
                .unwrap_or_else(|| default_path("_variables.txt")),
            settings_path: args
                .settings
                .clone()
                .unwrap_or_else(|| default_path(".json")),
            segment,
            segment_name: args.segment_name.clone(),
            output_path: report_path(&args.output_dir, &args.survey, &args.segment_name),
            reference_path: args.reference.clone(),
        })
    }
}

/// Loads the survey and applies the exclusions and the weights of the settings.
pub fn load_survey(options: &ReportOptions, settings: &ValidSettings) -> ReportResult<SurveyDataset> {
    let values = read_csv_table(&options.values_path)?;
    let labels = read_csv_table(&options.labels_path)?;
    let variables =
        fs::read_to_string(&options.variables_path).context(OpeningFileSnafu {
            path: options.variables_path.clone(),
        })?;
    debug!("load_survey: variables: {:?}", variables);

    let mut survey = SurveyDataset::new(&values, &labels, &variables).context(DataSnafu {
        stage: format!("{} and {}", options.values_path, options.labels_path),
    })?;

    // Dropping the bad answers
    survey
        .drop_rows(&settings.exclude_ids)
        .context(DataSnafu {
            stage: "excludeIds",
        })?;
    survey
        .drop_rows(&settings.suspicious_ids)
        .context(DataSnafu {
            stage: "suspiciousIds",
        })?;

    survey.set_weights(&settings.weights).context(DataSnafu {
        stage: "weights",
    })?;

    if options.segment.is_empty() {
        return Ok(survey);
    }
    let mut segment = survey.subset(&options.segment).context(DataSnafu {
        stage: format!("segment {}", options.segment_name),
    })?;
    // A subset starts again with uniform weights.
    segment.set_weights(&settings.weights).context(DataSnafu {
        stage: "weights",
    })?;
    if segment.num_rows() == 0 {
        warn!(
            "load_survey: segment {} ({:?}) is empty",
            options.segment_name, options.segment
        );
    }
    Ok(segment)
}

/// Renders the report of a survey as a complete HTML page.
pub fn build_report(survey: &SurveyDataset, title: &str) -> ReportResult<String> {
    let tallies = survey.question_tallies().context(DataSnafu {
        stage: "tallies",
    })?;
    render_page(title, &tallies).whatever_context("Error rendering the report")
}

pub fn run_report(options: &ReportOptions) -> ReportResult<()> {
    info!("run_report: options: {:?}", options);
    let settings = read_settings(&options.settings_path)?;
    let settings = validate_settings(&settings)?;

    let survey = load_survey(options, &settings)?;
    info!(
        "run_report: {} respondents, total weight {}",
        survey.num_rows(),
        survey.total_weight()
    );

    let title = format!("{} ({})", options.survey_name, options.segment_name);
    let page = build_report(&survey, &title)?;
    write_report(&options.output_path, &page)?;
    info!("run_report: report written to {}", options.output_path);

    // The reference report, if provided for comparison
    if let Some(reference_p) = options.reference_path.clone() {
        let reference = fs::read_to_string(&reference_p).context(OpeningFileSnafu {
            path: reference_p.clone(),
        })?;
        if reference != page {
            warn!("Found differences with the reference report {}", reference_p);
            print_diff(reference.as_str(), page.as_str(), "\n");
            whatever!("Difference detected between the generated report and the reference report")
        }
    }

    Ok(())
}
