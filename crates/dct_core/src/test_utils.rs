//! Test utilities for `dct_core` (compiled only during testing).

use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use crate::finding::Finding;
use crate::pattern::{Catalog, Group, Origin, Pattern, Severity};
use crate::scanner::Scanner;

pub fn make_pattern(name: &str, regex: &str, keywords: &[&str]) -> Pattern {
    Pattern {
        name: Arc::from(name),
        group: Group::Generic,
        description: "test pattern".into(),
        severity: Severity::High,
        confidence: 0.9,
        regex: Regex::new(regex).unwrap(),
        keywords: keywords.iter().map(|&s| s.into()).collect(),
        origin: Origin::Builtin,
    }
}

pub fn make_user_pattern(name: &str, regex: &str) -> Pattern {
    Pattern {
        origin: Origin::User,
        group: Group::Custom,
        ..make_pattern(name, regex, &[])
    }
}

pub fn make_finding(file: &str, line: u32, kind: &str) -> Finding {
    Finding {
        file: Path::new(file).into(),
        line,
        kind: Arc::from(kind),
        key: "KEY".to_string(),
        value: "value".to_string(),
        severity: Severity::High,
    }
}

pub fn builtin_scanner() -> Scanner {
    Scanner::new(Catalog::builtin().unwrap())
}
