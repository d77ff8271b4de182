//! Unit tests for export configuration.

use rstest::rstest;

use crate::transcript::domain::ExportConfig;
use crate::transcript::error::TranscriptError;

#[rstest]
fn defaults_show_everything_but_the_calendar_date() {
    let config = ExportConfig::default();

    assert!(config.first_line_indent);
    assert!(config.display_dice_command);
    assert!(config.display_external_comment);
    assert!(config.display_image);
    assert!(config.display_datetime);
    assert!(config.display_account);
    assert!(!config.display_year_month_day);
}

#[rstest]
fn empty_document_yields_defaults() {
    let config = ExportConfig::from_toml_str("").expect("empty toml is valid");
    assert_eq!(config, ExportConfig::default());
}

#[rstest]
fn document_overrides_selected_keys() {
    let config = ExportConfig::from_toml_str(
        "display_dice_command = false\ndisplay_external_comment = false\n",
    )
    .expect("toml should load");

    assert_eq!(config, ExportConfig::story_only());
}

#[rstest]
#[case::wrong_type("display_image = \"no\"")]
#[case::broken_syntax("display_image = ")]
fn invalid_documents_report_config_errors(#[case] document: &str) {
    let err = ExportConfig::from_toml_str(document).expect_err("document is invalid");
    assert!(matches!(err, TranscriptError::Config(_)));
}
