use super::callback_loader::load_callback_cases;
use super::callback_runner::run_callback_cases;

#[test]
fn test_callback_fixtures() {
    let cases = load_callback_cases();
    assert!(!cases.is_empty());

    let result = run_callback_cases(&cases);
    result.print_failures();
    assert_eq!(result.failed, 0, "{} callback fixture(s) failed", result.failed);
    assert_eq!(result.passed, cases.len());
}

#[test]
fn test_callback_fixtures_rebuild() {
    // Re-encoding a parsed payload and parsing it again yields the same views
    for case in load_callback_cases() {
        let charset = case
            .charset
            .as_deref()
            .map(|label| qparam::Charset::for_label(label).expect("fixture charset resolves"));
        let parsed = qparam::ParsedQuery::parse(case.query.as_str(), charset);
        if charset.is_none() {
            continue;
        }
        let reparsed = qparam::ParsedQuery::parse(parsed.to_query_string(charset).as_str(), charset);
        assert_eq!(reparsed, parsed, "{}", case.name);
    }
}
