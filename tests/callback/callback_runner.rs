use std::collections::BTreeMap;

use super::callback_loader::{CallbackCase, CallbackFailure, CallbackResult};
/// Callback runner
///
/// Parses each fixture with the charset it names and checks both views.
use qparam::{Charset, ParsedQuery};

pub fn run_callback_cases(cases: &[CallbackCase]) -> CallbackResult {
    let mut result = CallbackResult::default();

    for case in cases {
        let charset = case
            .charset
            .as_deref()
            .map(|label| Charset::for_label(label).expect("fixture charset resolves"));
        let parsed = ParsedQuery::parse(case.query.as_str(), charset);

        let single: BTreeMap<String, String> = parsed.single_value_map().into_iter().collect();
        let array: BTreeMap<String, Vec<String>> =
            parsed.array_value_map().into_iter().collect();

        let mut case_passed = true;
        if single != case.single {
            case_passed = false;
            result.failures.push(CallbackFailure {
                name: case.name.clone(),
                view: "single",
                expected: format!("{:?}", case.single),
                actual: format!("{single:?}"),
            });
        }
        if array != case.array {
            case_passed = false;
            result.failures.push(CallbackFailure {
                name: case.name.clone(),
                view: "array",
                expected: format!("{:?}", case.array),
                actual: format!("{array:?}"),
            });
        }

        if case_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}
