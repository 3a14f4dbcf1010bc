use clap::Parser;

/// Arguments for the manifest command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  List every manifest entry:\n    shotsync manifest\n\n\
                  List one category with its caption rules:\n    shotsync manifest --category questionnaire --rules")]
pub struct ManifestArgs {
    /// Only show this category (e.g. questionnaire)
    #[arg(long, value_name = "SLUG")]
    pub category: Option<String>,

    /// Also show caption rules in priority order
    #[arg(long)]
    pub rules: bool,
}
