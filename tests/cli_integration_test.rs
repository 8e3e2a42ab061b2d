//! CLI integration tests.
//!
//! Tests cover:
//! - Config loading (load_config, ChartConfig, Palette)
//! - Tree outline formatting (format_tree)
//! - Subcommand dispatch with real CSV and INI files on disk

use clap::Parser;
use seqburst::adapters::csv_adapter::CsvAdapter;
use seqburst::cli::{self, Cli};
use seqburst::domain::chart_config::ChartConfig;
use seqburst::domain::error::SeqburstError;
use seqburst::domain::palette::Palette;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tempfile::TempDir;

const SEQUENCES: &str = "\
Sequence,Count,Deals,Amount,Equity,Valuation
Male~Automotive~>$1M~0%-25%~<$1M,10,2,500000,10,2000000
Male~Automotive~$0-$250k~25%-50%~<$1M,6,3,300000,90,900000
Female~Healthcare~$250k-$500k~25%-50%~$1M-$10M,4,1,250000,30,800000
";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

mod config_loading {
    use super::*;

    #[test]
    fn missing_config_path_gives_defaults() {
        let config = cli::load_config(None).unwrap();
        assert_eq!(ChartConfig::from_config(&config).unwrap(), ChartConfig::default());
        assert_eq!(Palette::from_config(&config).unwrap(), Palette::default());
    }

    #[test]
    fn unreadable_config_is_a_parse_error() {
        let err = cli::load_config(Some(&PathBuf::from("/nonexistent/seqburst.ini"))).unwrap_err();
        assert!(matches!(err, SeqburstError::ConfigParse { .. }));
        assert_eq!(ExitCode::from(&err), ExitCode::from(2));
    }

    #[test]
    fn config_file_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "seqburst.ini",
            "[chart]\nwidth = 700\nheight = 500\n\n[palette]\nHealthcare = 00FF00\n",
        );
        let config = cli::load_config(Some(&path)).unwrap();
        let chart = ChartConfig::from_config(&config).unwrap();
        assert_eq!(chart.radius(), 250.0);
        let palette = Palette::from_config(&config).unwrap();
        assert_eq!(palette.color("Healthcare"), Some("#00FF00"));
    }
}

mod tree_outline {
    use super::*;

    #[test]
    fn outline_sorted_by_size() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "sequences.csv", SEQUENCES);
        let h = cli::load_hierarchy(&CsvAdapter::new(data), '~').unwrap();

        let text = cli::format_tree(&h, Some(2));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "root (20)",
                "  Male (16, 80.0%)",
                "    Automotive (16, 80.0%)",
                "  Female (4, 20.0%)",
                "    Healthcare (4, 20.0%)",
            ]
        );
    }

    #[test]
    fn unlimited_depth_reaches_leaves() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "sequences.csv", SEQUENCES);
        let h = cli::load_hierarchy(&CsvAdapter::new(data), '~').unwrap();
        let text = cli::format_tree(&h, None);
        assert!(text.contains("          <$1M (10, 50.0%)"));
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn render_writes_svg() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "sequences.csv", SEQUENCES);
        let output = dir.path().join("chart.svg");

        let code = cli::run(Cli::parse_from([
            "seqburst",
            "render",
            "--data",
            data.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--path",
            "Male~Automotive",
        ]));
        assert_eq!(code, ExitCode::SUCCESS);

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("80.0% of total pitches"));
        assert!(svg.contains("<title>Automotive</title>"));
    }

    #[test]
    fn render_with_custom_template() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "sequences.csv", SEQUENCES);
        let template = write_file(&dir, "page.svg", "<svg>{{SUNBURST}}</svg>");
        let config = write_file(
            &dir,
            "seqburst.ini",
            &format!("[report]\ntemplate_path = {}\n", template.display()),
        );
        let output = dir.path().join("chart.svg");

        let code = cli::run(Cli::parse_from([
            "seqburst",
            "render",
            "-d",
            data.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ]));
        assert_eq!(code, ExitCode::SUCCESS);
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.starts_with("<svg><path"));
    }

    #[test]
    fn select_unknown_path_fails() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "sequences.csv", SEQUENCES);
        let code = cli::run(Cli::parse_from([
            "seqburst",
            "select",
            "--data",
            data.to_str().unwrap(),
            "--path",
            "Male~Fashion / Beauty",
        ]));
        assert_eq!(code, ExitCode::from(4));
    }

    #[test]
    fn select_known_path_succeeds() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "sequences.csv", SEQUENCES);
        let code = cli::run(Cli::parse_from([
            "seqburst",
            "select",
            "--data",
            data.to_str().unwrap(),
            "--path",
            "Female~Healthcare",
        ]));
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn missing_data_file_fails() {
        let code = cli::run(Cli::parse_from([
            "seqburst",
            "tree",
            "--data",
            "/nonexistent/sequences.csv",
        ]));
        assert_eq!(code, ExitCode::from(3));
    }

    #[test]
    fn validate_rejects_bad_config() {
        let dir = TempDir::new().unwrap();
        let config = write_file(&dir, "bad.ini", "[breadcrumb]\nwidth = -1\n");
        let code = cli::run(Cli::parse_from([
            "seqburst",
            "validate",
            "--config",
            config.to_str().unwrap(),
        ]));
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn validate_rejects_unreadable_template() {
        let dir = TempDir::new().unwrap();
        let config = write_file(
            &dir,
            "seqburst.ini",
            "[report]\ntemplate_path = /nonexistent/page.svg\n",
        );
        let code = cli::run(Cli::parse_from([
            "seqburst",
            "validate",
            "--config",
            config.to_str().unwrap(),
        ]));
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn load_template_reads_configured_file() {
        let dir = TempDir::new().unwrap();
        let template = write_file(&dir, "page.svg", "<svg>{{LEGEND}}</svg>");
        let config = write_file(
            &dir,
            "seqburst.ini",
            &format!("[report]\ntemplate_path = {}\n", template.display()),
        );
        let config = cli::load_config(Some(&config)).unwrap();
        assert_eq!(
            cli::load_template(&config).unwrap().as_deref(),
            Some("<svg>{{LEGEND}}</svg>")
        );
        assert_eq!(cli::load_template(&cli::load_config(None).unwrap()).unwrap(), None);
    }

    #[test]
    fn select_path_behind_same_named_leaf() {
        let dir = TempDir::new().unwrap();
        let data = write_file(&dir, "sequences.csv", "Male,1,0,0,0,0\nMale~A,1,1,0,0,0\n");
        let code = cli::run(Cli::parse_from([
            "seqburst",
            "select",
            "--data",
            data.to_str().unwrap(),
            "--path",
            "Male~A",
        ]));
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn validate_accepts_good_config() {
        let dir = TempDir::new().unwrap();
        let config = write_file(&dir, "good.ini", "[chart]\nwidth = 900\n\n[steps]\nGender = 123456\n");
        let code = cli::run(Cli::parse_from([
            "seqburst",
            "validate",
            "--config",
            config.to_str().unwrap(),
        ]));
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
