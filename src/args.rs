use clap::Parser;

/// This is a survey reporting program: it cleans and reweights the responses exported from PSPP
/// and draws the distribution of the answers to every question as a static HTML page.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (default privacy) The name of the survey. It is used to find the input files
    /// (<data-dir>/<survey>_values.csv, <survey>_labels.csv, <survey>_variables.txt, <survey>.json)
    /// and to name the output directory.
    #[clap(short, long, value_parser, default_value = "privacy")]
    pub survey: String,

    /// (default data) The directory containing the input files.
    #[clap(long, value_parser, default_value = "data")]
    pub data_dir: String,

    /// (default output) The directory in which the report is written, as <output-dir>/<survey>/<segment-name>.html
    #[clap(short, long, value_parser, default_value = "output")]
    pub output_dir: String,

    /// (file path, optional) Overrides the file with the numerical responses.
    #[clap(long, value_parser)]
    pub values: Option<String>,

    /// (file path, optional) Overrides the file with the text responses.
    #[clap(long, value_parser)]
    pub labels: Option<String>,

    /// (file path, optional) Overrides the file with the description of the variables.
    #[clap(long, value_parser)]
    pub variables: Option<String>,

    /// (file path, optional) Overrides the settings file. A missing settings file is not an error.
    #[clap(long, value_parser)]
    pub settings: Option<String>,

    /// (COLUMN=VALUE, may be repeated) Only reports the respondents that gave this answer.
    /// When repeated, all the constraints must hold.
    #[clap(long, value_parser)]
    pub segment: Vec<String>,

    /// (default all) The name of the segment, used to name the output file.
    #[clap(long, value_parser, default_value = "all")]
    pub segment_name: String,

    /// (file path) A reference report. If provided, surveyrep will check that the generated page
    /// matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
