//! Meta-discussion detection.
//!
//! Prompts that *talk about* agents or the routing subsystem (bug reports,
//! "why was X picked" questions) mention agent names without requesting
//! work from them. Matching category rules against such text produces
//! false positives, so the execution strategy consults this filter and
//! skips category matching when it fires.

use tracing::debug;

use crate::pattern::TextPattern;

/// Detects prompts that discuss agent behavior instead of requesting work.
pub struct MetaDiscussionFilter {
    rules: Vec<TextPattern>,
}

impl Default for MetaDiscussionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaDiscussionFilter {
    /// Create a filter with the built-in rule set.
    pub fn new() -> Self {
        let patterns = [
            // A handler-shaped token (role suffix) followed by a Korean
            // subject/object/topic marker: "backend-developer가 ...".
            // Restricting to role suffixes keeps tool names like
            // "docker-compose를" from tripping the filter.
            r"(?i)[a-z][a-z0-9-]*(developer|engineer|architect|planner|reviewer|specialist|expert)(가|이|은|는|을|를|의)",
            // Discussion of the selection subsystem itself.
            r"(?i)\bagent\s+(selection|activation|routing|matching)\b",
            r"(?i)\b(wrong|incorrect)\s+agent\b",
            r"(?i)\bagents?\b.{0,40}(bug|버그|오작동)",
            r"에이전트\s*(선택|매칭|활성화|라우팅|호출)",
            // Past-tense/bug register around selection verbs:
            // "잘못 매칭되었어", "선택이 안 돼".
            r"(선택|매칭|활성화)(되었|됐|이\s*안|이\s*잘못)",
        ];

        Self {
            rules: patterns
                .iter()
                .map(|p| TextPattern::new(p).unwrap())
                .collect(),
        }
    }

    /// Whether the text mentions agents/resolution in a discussion register
    /// rather than requesting work.
    pub fn is_meta_discussion(&self, text: &str) -> bool {
        for rule in &self.rules {
            if rule.matches(text) {
                debug!(pattern = rule.as_str(), "meta-discussion detected");
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_name_with_subject_marker() {
        let filter = MetaDiscussionFilter::new();
        assert!(filter.is_meta_discussion("backend-developer가 매칭되었어"));
        assert!(filter.is_meta_discussion("mobile-developer는 왜 선택 안 돼?"));
    }

    #[test]
    fn test_selection_subsystem_phrases() {
        let filter = MetaDiscussionFilter::new();
        assert!(filter.is_meta_discussion("agent selection seems broken"));
        assert!(filter.is_meta_discussion("에이전트 선택이 이상해"));
        assert!(filter.is_meta_discussion("wrong agent got activated"));
        assert!(filter.is_meta_discussion("잘못 매칭되었어"));
    }

    #[test]
    fn test_work_requests_pass_through() {
        let filter = MetaDiscussionFilter::new();
        assert!(!filter.is_meta_discussion("eslint 설정 변경해줘"));
        assert!(!filter.is_meta_discussion("docker-compose를 수정해줘"));
        assert!(!filter.is_meta_discussion("API 엔드포인트 추가해줘"));
        assert!(!filter.is_meta_discussion("add a login endpoint"));
    }
}
