//! semigroup-hilbert: print the level polynomials of a numerical semigroup.

use anyhow::Context;
use clap::Parser;
use semigroup_hilbert::prelude::*;

const DEFAULT_GENERATORS: [i64; 3] = [4, 6, 13];

#[derive(Parser, Debug)]
#[command(name = "semigroup-hilbert")]
#[command(version)]
#[command(about = "Gaps, Frobenius number and level polynomials of a numerical semigroup", long_about = None)]
struct Cli {
    /// Generators (coprime positive integers); defaults to 4 6 13
    #[arg(value_name = "GENERATOR", allow_negative_numbers = true)]
    generators: Vec<i64>,

    /// Generators as an option list; takes precedence over positional values
    #[arg(
        long = "list_all",
        visible_alias = "list-all",
        value_name = "GENERATOR",
        num_args = 0..,
        allow_negative_numbers = true
    )]
    list_all: Option<Vec<i64>>,

    /// Membership bound for the semigroup sweep (default: max generator squared)
    #[arg(long, value_name = "N")]
    limit: Option<u64>,

    /// Print the full report as JSON instead of one line per level
    #[arg(long)]
    json: bool,

    /// Also print level c, which is computed but omitted by default
    #[arg(long)]
    all_levels: bool,
}

impl Cli {
    fn raw_generators(&self) -> Vec<i64> {
        match &self.list_all {
            Some(list) => list.clone(),
            None if !self.generators.is_empty() => self.generators.clone(),
            None => DEFAULT_GENERATORS.to_vec(),
        }
    }

    fn config(&self) -> HilbertConfig {
        HilbertConfig {
            semigroup_limit: self.limit,
        }
    }
}

fn render(raw: &[i64], report: &HilbertReport, all_levels: bool) -> String {
    let shown: Vec<(usize, &HilbertPolynomial)> = if all_levels {
        report.polynomials.iter().enumerate().map(|(i, p)| (i + 1, p)).collect()
    } else {
        report.printed_levels().collect()
    };
    let levels = shown
        .into_iter()
        .map(|(n, poly)| format!("{n}-th {poly}"));
    let lines = std::iter::once(format!("{raw:?}")).chain(levels);
    format!("{}\n", itertools::join(lines, "\n"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = cli.raw_generators();
    let generators =
        Generators::try_from(raw.as_slice()).context("validating generators")?;
    let pipeline = HilbertPipeline::new(&generators, cli.config())
        .context("analyzing semigroup")?;
    let report = pipeline.report().context("running Hilbert pipeline")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print!("{}", render(&raw, &report, cli.all_levels));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_four_six_thirteen() {
        let cli = Cli::try_parse_from(["semigroup-hilbert"]).unwrap();
        assert_eq!(cli.raw_generators(), vec![4, 6, 13]);
        assert_eq!(cli.config(), HilbertConfig::default());
    }

    #[test]
    fn list_all_takes_precedence() {
        let cli = Cli::try_parse_from(["semigroup-hilbert", "5", "7", "--list_all", "3", "4"])
            .unwrap();
        assert_eq!(cli.raw_generators(), vec![3, 4]);
        let cli = Cli::try_parse_from(["semigroup-hilbert", "--list-all", "3", "5"]).unwrap();
        assert_eq!(cli.raw_generators(), vec![3, 5]);
    }

    #[test]
    fn empty_list_all_is_kept_empty() {
        let cli = Cli::try_parse_from(["semigroup-hilbert", "--list_all"]).unwrap();
        assert!(cli.raw_generators().is_empty());
        assert!(Generators::try_from(cli.raw_generators().as_slice()).is_err());
    }

    #[test]
    fn flags_parse() {
        let cli =
            Cli::try_parse_from(["semigroup-hilbert", "3", "4", "--limit", "50", "--json", "--all-levels"])
                .unwrap();
        assert_eq!(cli.raw_generators(), vec![3, 4]);
        assert_eq!(cli.config().semigroup_limit, Some(50));
        assert!(cli.json && cli.all_levels);
    }

    #[test]
    fn renders_one_line_per_level() {
        let generators = Generators::new(vec![3, 4]).unwrap();
        let report = HilbertPipeline::new(&generators, HilbertConfig::default())
            .unwrap()
            .report()
            .unwrap();
        let text = render(&[3, 4], &report, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "[3, 4]");
        assert_eq!(lines[1], "1-th 1");
        assert_eq!(lines[6], "6-th 1 + 1·x + 2·x² + 1·x³");
        let all = render(&[3, 4], &report, true);
        assert_eq!(all.lines().count(), 8);
        assert_eq!(all.lines().last(), Some("7-th 1 + 1·x + 2·x²"));
        assert!(all.ends_with('\n'));
    }
}
