use formsmith_export::{file_base_name, file_name, ExportFormat};

#[test]
fn titles_become_safe_base_names() {
    assert_eq!(file_base_name("Customer Feedback"), "customer_feedback");
    assert_eq!(file_base_name("Q3 Survey 2024"), "q3_survey_2024");
    assert_eq!(file_base_name("Résumé Review!"), "rsum_review");
}

#[test]
fn whitespace_runs_collapse_to_single_underscores() {
    assert_eq!(file_base_name("  My   Form  "), "my_form");
    assert_eq!(file_base_name("tabs\tand\nnewlines"), "tabs_and_newlines");
}

#[test]
fn unusable_titles_fall_back_to_export() {
    assert_eq!(file_base_name(""), "export");
    assert_eq!(file_base_name("!!!"), "export");
    assert_eq!(file_base_name("日本語"), "export");
}

#[test]
fn punctuated_titles_keep_their_digits() {
    assert_eq!(file_base_name("Contact Us!! 2024"), "contact_us_2024");
    assert_eq!(
        file_name("Contact Us!! 2024", ExportFormat::Csv),
        "contact_us_2024-responses.csv"
    );
}

#[test]
fn symbol_only_titles_export_under_the_fallback_name() {
    assert_eq!(
        file_name("???", ExportFormat::Csv),
        "export-responses.csv"
    );
}

#[test]
fn file_name_carries_format_extension() {
    assert_eq!(
        file_name("Customer Feedback", ExportFormat::Csv),
        "customer_feedback-responses.csv"
    );
    assert_eq!(
        file_name("", ExportFormat::Json),
        "export-responses.json"
    );
}
