//! Planning intent registry: architecture-leaning vs. planning-leaning.
//!
//! The planning strategy is a two-way choice, so these tables only decide
//! *whether* each side matched; the strategy assigns the confidence. Rule
//! confidences mirror the strategy constants for table consistency.

use crate::pattern::PatternRule;

/// Vocabulary that leans toward architecture-level design work.
pub fn architecture_rules() -> Vec<PatternRule> {
    vec![
        PatternRule::new(r"아키텍처|(?i)\barchitecture\b", 0.9, "architecture vocabulary"),
        PatternRule::new(
            r"(시스템|마이크로서비스)\s*(설계|구조)|(?i)\b(system|microservice)\s+design\b",
            0.9,
            "system design vocabulary",
        ),
        PatternRule::new(
            r"(?i)\bapi\s+design\b|(api|인터페이스)\s*설계",
            0.9,
            "API design vocabulary",
        ),
        PatternRule::new(
            r"(설계해|구조\s*(잡|정리))|(?i)\bdesign\s+the\b",
            0.9,
            "design verb",
        ),
        PatternRule::new(
            r"(기술\s*스택|트레이드\s*오프)|(?i)(tech\s+stack|trade[- ]?offs?)",
            0.9,
            "technology trade-off vocabulary",
        ),
    ]
}

/// Vocabulary that leans toward step-by-step implementation planning.
pub fn planning_rules() -> Vec<PatternRule> {
    vec![
        PatternRule::new(
            r"(단계별|순서대로)|(?i)step[- ]by[- ]step",
            0.9,
            "step-by-step vocabulary",
        ),
        PatternRule::new(r"(?i)\btdd|테스트\s*주도", 0.9, "test-driven vocabulary"),
        PatternRule::new(
            r"(구현\s*(순서|계획))|(?i)implementation\s+(order|plan)",
            0.9,
            "implementation-order vocabulary",
        ),
        PatternRule::new(
            r"(작업|태스크)\s*(분해|분할|나누|쪼개)|(?i)task\s+breakdown",
            0.9,
            "task breakdown vocabulary",
        ),
        PatternRule::new(
            r"(계획\s*(세워|수립))|(?i)\bplan\s+out\b",
            0.9,
            "planning verb",
        ),
    ]
}
