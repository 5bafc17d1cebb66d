//! Optional rewrite of a binary-compatibility extraction into the declarative
//! keyword style, easing cross-format comparison.

use crate::model::{Api, ReadonlyKeyword};
use regex::Regex;

/// Rewrite keywords and enum case spellings in place
///
/// Drops `abstract`/`final`, turns `fun name (` into `func name(`, turns the
/// constructor marker into `init(`, switches the read-only property keyword
/// back to `let`, and respells enum cases from upper-snake to lower-camel.
pub fn normalize(api: &mut Api) {
    let keyword_style = Regex::new(r"(?:abstract )?(?:final )?fun (<?\w+>?) \(").unwrap();
    let segments = Regex::new(r"_?[A-Z0-9]+_?").unwrap();

    api.readonly_keyword = ReadonlyKeyword::Let;

    for ty in api.all_types_mut() {
        for function in &mut ty.functions {
            let rewritten = keyword_style
                .replace_all(&function.signature, "func ${1}(")
                .into_owned();
            function.signature = rewritten.replace("func <init>", "init");
        }
    }

    for enum_type in &mut api.enums {
        for case in &mut enum_type.cases {
            *case = camelize_screaming_case(case, &segments);
        }
    }
}

/// `NOT_SO_GOOD` → `notSoGood`; a doubled separator keeps one underscore
/// (`REALLY__UNCONVENTIONAL` → `really_Unconventional`)
fn camelize_screaming_case(case: &str, segments: &Regex) -> String {
    let mut result = String::new();
    for (index, segment) in segments.find_iter(case).enumerate() {
        let lowered = segment.as_str().trim_end_matches('_').to_lowercase();
        if index == 0 {
            result.push_str(&lowered);
            continue;
        }
        let (underscore, rest) = match lowered.strip_prefix('_') {
            Some(rest) => ("_", rest),
            None => ("", lowered.as_str()),
        };
        result.push_str(underscore);
        let mut chars = rest.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
