//! Command-line interface definitions.
//!
//! All options carry defaults, so `reajuste_news` runs with no arguments
//! when a `subjects.txt` sits next to it; the search endpoint can also be
//! supplied via environment variable.

use clap::Parser;

/// Command-line arguments for the salary-adjustment news pipeline.
///
/// # Examples
///
/// ```sh
/// # Default run: subjects.txt in, salary_adjustment_news.csv out
/// reajuste_news
///
/// # Explicit paths plus a JSON export
/// reajuste_news -s names.txt -o out/news.csv --json-output out/news.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the line-delimited subject names file
    #[arg(short, long, default_value = "subjects.txt")]
    pub subjects_file: String,

    /// Path for the CSV output artifact
    #[arg(short, long, default_value = "salary_adjustment_news.csv")]
    pub output: String,

    /// Optional path for a JSON export of the same rows
    #[arg(long)]
    pub json_output: Option<String>,

    /// Base search endpoint; the topical query and subject name are appended
    #[arg(
        long,
        env = "SEARCH_BASE_URL",
        default_value = "https://news.google.com/search?hl=pt-BR&gl=BR&ceid=BR:pt-419"
    )]
    pub base_url: String,

    /// Topical query combined with each subject name
    #[arg(short, long, default_value = "reajuste salarial")]
    pub query: String,

    /// Upper bound in seconds on each page fetch
    #[arg(long, default_value_t = 60)]
    pub fetch_timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["reajuste_news"]);
        assert_eq!(cli.subjects_file, "subjects.txt");
        assert_eq!(cli.output, "salary_adjustment_news.csv");
        assert_eq!(cli.json_output, None);
        assert_eq!(cli.query, "reajuste salarial");
        assert_eq!(cli.fetch_timeout_secs, 60);
    }

    #[test]
    fn test_cli_explicit_paths() {
        let cli = Cli::parse_from([
            "reajuste_news",
            "--subjects-file",
            "names.txt",
            "--output",
            "out/news.csv",
            "--json-output",
            "out/news.json",
        ]);
        assert_eq!(cli.subjects_file, "names.txt");
        assert_eq!(cli.output, "out/news.csv");
        assert_eq!(cli.json_output.as_deref(), Some("out/news.json"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["reajuste_news", "-s", "names.txt", "-o", "news.csv", "-q", "reajuste"]);
        assert_eq!(cli.subjects_file, "names.txt");
        assert_eq!(cli.output, "news.csv");
        assert_eq!(cli.query, "reajuste");
    }
}
