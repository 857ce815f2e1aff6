#[cfg(test)]
mod integration_tests {
    use crate::cli::{Cli, Commands};
    use crate::report;
    use crate::source::ArtifactSource;
    use clap::Parser;
    use common::DashboardConfig;
    use compute::CategorySelection;
    use std::io::Write;

    const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/analysis_data.json");

    #[tokio::test]
    async fn test_fixture_loads_from_path() {
        let source = ArtifactSource::parse(FIXTURE_PATH);
        let data = source.load().await.unwrap();

        assert_eq!(data.hotspots.len(), 5);
        assert_eq!(data.seasonal_patterns.len(), 12);
        assert_eq!(data.yearly_trends.len(), 5);
    }

    #[test]
    fn test_cli_parses_hotspots_category() {
        let cli = Cli::try_parse_from(["eonet-dashboard", "hotspots", "--category", "Ice"]).unwrap();
        match cli.command {
            Commands::Hotspots { category } => {
                assert_eq!(CategorySelection::parse(&category), CategorySelection::Only("Ice".into()));
            }
            _ => panic!("expected hotspots command"),
        }

        let cli = Cli::try_parse_from(["eonet-dashboard", "hotspots"]).unwrap();
        match cli.command {
            Commands::Hotspots { category } => assert_eq!(category, "all"),
            _ => panic!("expected hotspots command"),
        }
    }

    #[tokio::test]
    async fn test_run_with_source_from_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "source = '{}'\n\n[dashboard]\nmarker_limit = 1", FIXTURE_PATH).unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        for command in ["summary", "hotspots", "trends", "assets"] {
            let cli = Cli::try_parse_from(["eonet-dashboard", "--config", &config_path, command]).unwrap();
            cli.run().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_missing_artifact_reports_remediation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("analysis_data.json");

        let cli = Cli::try_parse_from([
            "eonet-dashboard",
            "--source",
            missing.to_str().unwrap(),
            "summary",
        ])
        .unwrap();

        let err = cli.run().await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("could not fetch analysis data"));
        assert!(message.contains("Run: python update_generate_with_images.py"));
    }

    #[tokio::test]
    async fn test_ice_hotspot_report_from_fixture() {
        let data = ArtifactSource::parse(FIXTURE_PATH).load().await.unwrap();
        let report = report::hotspots(
            &data,
            &CategorySelection::parse("Ice"),
            &DashboardConfig::default(),
        );

        // (-72, -30) projects to x = 41.67%, y = 90%; sqrt(16) * 2 = 8
        assert!(report.contains("Antarctic Shelf"));
        assert!(report.contains("41.67"));
        assert!(report.contains("90.00"));
        assert!(report.contains("8.0"));
        assert!(report.contains("Total events: 16 | Active hotspots: 1 | Avg per hotspot: 16 | Max intensity: 16"));
    }
}
