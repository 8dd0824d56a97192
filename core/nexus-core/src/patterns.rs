//! Compiled keyword patterns for quick-capture classification.
//!
//! Patterns match against lowercased capture text and are plain substring
//! alternations, so "building" counts as "build".

use once_cell::sync::Lazy;
use regex::Regex;

pub static RE_CAREER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"resume|internship|apply|interview").unwrap());
pub static RE_EC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"club|racing|committee|asme|pase").unwrap());
pub static RE_PROJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"project|build|prototype|vibration").unwrap());
pub static RE_URGENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"urgent|asap").unwrap());

/// Department prefix of a course code, e.g. `ma` in `MA 30300`.
pub static RE_COURSE_DEPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-z]+)\s*\d").unwrap());
