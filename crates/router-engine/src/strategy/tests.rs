//! Tests for the per-phase strategies.

use super::*;
use router_core::{agents, ProjectConfig, ResolutionContext, Source};

fn roster() -> Vec<String> {
    agents::fallback_roster()
}

fn input<'a>(prompt: &'a str, agents: &'a [String]) -> StrategyInput<'a> {
    StrategyInput {
        prompt,
        context: None,
        recommended: None,
        agents,
        config: None,
    }
}

mod evaluation {
    use super::*;

    #[test]
    fn test_always_fixed_reviewer() {
        let strategy = EvaluationStrategy;
        let agents = roster();
        for prompt in ["", "use backend-developer", "시스템 아키텍처 설계해줘"] {
            let result = strategy.resolve(&input(prompt, &agents));
            assert_eq!(result.agent_name, agents::EVALUATION_AGENT);
            assert_eq!(result.source, Source::Default);
            assert_eq!(result.confidence, 1.0);
        }
    }

    #[test]
    fn test_ignores_recommendation_and_config() {
        let strategy = EvaluationStrategy;
        let agents = roster();
        let config = ProjectConfig {
            primary_agent: Some("ml-engineer".into()),
            exclude_agents: vec![],
        };
        let result = strategy.resolve(&StrategyInput {
            prompt: "리뷰해줘",
            context: None,
            recommended: Some("ml-engineer"),
            agents: &agents,
            config: Some(&config),
        });
        assert_eq!(result.agent_name, agents::EVALUATION_AGENT);
    }
}

mod planning {
    use super::*;

    #[test]
    fn test_architecture_intent() {
        let strategy = PlanningStrategy::new();
        let agents = roster();
        let result = strategy.resolve(&input("시스템 아키텍처 설계해줘", &agents));
        assert_eq!(result.agent_name, agents::SYSTEM_ARCHITECT);
        assert_eq!(result.source, Source::Intent);
        assert!((result.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_planning_intent() {
        let strategy = PlanningStrategy::new();
        let agents = roster();
        let result = strategy.resolve(&input("단계별 구현 계획 세워줘", &agents));
        assert_eq!(result.agent_name, agents::TASK_PLANNER);
        assert_eq!(result.source, Source::Intent);
        assert!((result.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_both_match_architecture_wins() {
        let strategy = PlanningStrategy::new();
        let agents = roster();
        let result =
            strategy.resolve(&input("아키텍처 정리하고 단계별 구현 순서도 잡아줘", &agents));
        assert_eq!(result.agent_name, agents::SYSTEM_ARCHITECT);
        assert_eq!(result.source, Source::Intent);
        assert!((result.confidence - 0.85).abs() < f64::EPSILON);
        assert!(result.reason.contains("precedence"));
    }

    #[test]
    fn test_neither_match_defaults_to_architect() {
        let strategy = PlanningStrategy::new();
        let agents = roster();
        let result = strategy.resolve(&input("로그인 기능 관련해서 봐줘", &agents));
        assert_eq!(result.agent_name, agents::SYSTEM_ARCHITECT);
        assert_eq!(result.source, Source::Default);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_architect_unavailable_falls_back_to_planner() {
        let strategy = PlanningStrategy::new();
        let agents: Vec<String> = roster()
            .into_iter()
            .filter(|a| a != agents::SYSTEM_ARCHITECT)
            .collect();
        let result = strategy.resolve(&input("아무 주제", &agents));
        assert_eq!(result.agent_name, agents::TASK_PLANNER);
        assert_eq!(result.source, Source::Default);
    }

    #[test]
    fn test_no_planning_agents_uses_global_default_literal() {
        let strategy = PlanningStrategy::new();
        let agents: Vec<String> = vec!["backend-developer".into()];
        let result = strategy.resolve(&input("시스템 아키텍처 설계해줘", &agents));
        assert_eq!(result.agent_name, agents::DEFAULT_AGENT);
        assert_eq!(result.source, Source::Default);
        assert!((result.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_planning_request() {
        let strategy = PlanningStrategy::new();
        let agents = roster();
        let result = strategy.resolve(&input("use task-planner for this one", &agents));
        assert_eq!(result.agent_name, agents::TASK_PLANNER);
        assert_eq!(result.source, Source::Explicit);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_execution_agent_is_not_planning_eligible() {
        let strategy = PlanningStrategy::new();
        let agents = roster();
        // Explicitly names an execution agent; planning must ignore it and
        // classify the text instead.
        let result = strategy.resolve(&input("use backend-developer. 아키텍처 설계해줘", &agents));
        assert_eq!(result.agent_name, agents::SYSTEM_ARCHITECT);
        assert_eq!(result.source, Source::Intent);
    }
}

mod execution {
    use super::*;

    #[test]
    fn test_explicit_beats_everything() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let config = ProjectConfig {
            primary_agent: Some("devops-engineer".into()),
            exclude_agents: vec![],
        };
        // Prompt also matches build-tooling; explicit still wins.
        let result = strategy.resolve(&StrategyInput {
            prompt: "use ml-engineer, eslint 설정도 같이 봐줘",
            context: Some(&ResolutionContext::with_file("/x/Component.tsx")),
            recommended: Some("mobile-developer"),
            agents: &agents,
            config: Some(&config),
        });
        assert_eq!(result.agent_name, agents::ML_ENGINEER);
        assert_eq!(result.source, Source::Explicit);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_recommendation_beats_config_and_intent() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let config = ProjectConfig {
            primary_agent: Some("devops-engineer".into()),
            exclude_agents: vec![],
        };
        let result = strategy.resolve(&StrategyInput {
            prompt: "eslint 설정 변경해줘",
            context: None,
            recommended: Some("database-specialist"),
            agents: &agents,
            config: Some(&config),
        });
        assert_eq!(result.agent_name, agents::DATABASE_SPECIALIST);
        assert_eq!(result.source, Source::Config);
        assert!(result.reason.contains("planning"));
    }

    #[test]
    fn test_primary_agent_beats_intent() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let config = ProjectConfig {
            primary_agent: Some("devops-engineer".into()),
            exclude_agents: vec![],
        };
        let result = strategy.resolve(&StrategyInput {
            prompt: "eslint 설정 변경해줘",
            context: None,
            recommended: None,
            agents: &agents,
            config: Some(&config),
        });
        assert_eq!(result.agent_name, agents::DEVOPS_ENGINEER);
        assert_eq!(result.source, Source::Config);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_unknown_primary_agent_falls_through() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let config = ProjectConfig {
            primary_agent: Some("retired-agent".into()),
            exclude_agents: vec![],
        };
        let result = strategy.resolve(&StrategyInput {
            prompt: "eslint 설정 변경해줘",
            context: None,
            recommended: None,
            agents: &agents,
            config: Some(&config),
        });
        assert_eq!(result.agent_name, agents::BUILD_ENGINEER);
        assert_eq!(result.source, Source::Intent);
    }

    #[test]
    fn test_tooling_category_beats_backend() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let result = strategy.resolve(&input("eslint 설정 변경해줘", &agents));
        assert_eq!(result.agent_name, agents::BUILD_ENGINEER);
        assert_eq!(result.source, Source::Intent);
        assert!(result.reason.contains("build-tooling"));
    }

    #[test]
    fn test_category_skipped_when_agent_missing() {
        let strategy = ExecutionStrategy::new();
        // Without the build engineer, an eslint prompt falls to the next
        // matching source; here nothing else matches, so default.
        let agents: Vec<String> = roster()
            .into_iter()
            .filter(|a| a != agents::BUILD_ENGINEER)
            .collect();
        let result = strategy.resolve(&input("eslint 좀 고쳐줘", &agents));
        assert_eq!(result.agent_name, agents::DEFAULT_AGENT);
        assert_eq!(result.source, Source::Default);
    }

    #[test]
    fn test_meta_discussion_suppresses_intent() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let result = strategy.resolve(&input("backend-developer가 매칭되었어", &agents));
        assert_eq!(result.agent_name, agents::DEFAULT_AGENT);
        assert_eq!(result.source, Source::Default);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_meta_discussion_does_not_block_explicit() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        // Explicit precedes the meta filter in the chain.
        let result = strategy.resolve(&input("ml-engineer한테 시켜줘. agent selection 버그 같아", &agents));
        assert_eq!(result.agent_name, agents::ML_ENGINEER);
        assert_eq!(result.source, Source::Explicit);
    }

    #[test]
    fn test_context_accepted_at_floor() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let context = ResolutionContext::with_file("deploy/main.tf");
        let result = strategy.resolve(&StrategyInput {
            prompt: "이 파일 수정해",
            context: Some(&context),
            recommended: None,
            agents: &agents,
            config: None,
        });
        assert_eq!(result.agent_name, agents::DEVOPS_ENGINEER);
        assert_eq!(result.source, Source::Context);
        assert!(result.confidence >= 0.8);
    }

    #[test]
    fn test_context_below_floor_falls_to_default() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let context = ResolutionContext::with_file("/x/Component.tsx");
        let result = strategy.resolve(&StrategyInput {
            prompt: "이 파일 수정해",
            context: Some(&context),
            recommended: None,
            agents: &agents,
            config: None,
        });
        assert_eq!(result.agent_name, agents::DEFAULT_AGENT);
        assert_eq!(result.source, Source::Default);
    }

    #[test]
    fn test_infrastructure_project_type_fallback() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let context = ResolutionContext::with_project_type("infrastructure");
        let result = strategy.resolve(&StrategyInput {
            prompt: "이것 좀 처리해줘",
            context: Some(&context),
            recommended: None,
            agents: &agents,
            config: None,
        });
        assert_eq!(result.agent_name, agents::DEVOPS_ENGINEER);
        assert_eq!(result.source, Source::Context);
        assert!((result.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exclusion_is_respected_end_to_end() {
        let strategy = ExecutionStrategy::new();
        // The exclusion filter runs before strategies; an excluded agent
        // is simply absent from the working catalog.
        let agents: Vec<String> = roster()
            .into_iter()
            .filter(|a| a != agents::ML_ENGINEER)
            .collect();
        let result = strategy.resolve(&input("use ml-engineer for the embedding work", &agents));
        assert_ne!(result.agent_name, agents::ML_ENGINEER);
    }

    #[test]
    fn test_default_excluded_uses_first_available() {
        let strategy = ExecutionStrategy::new();
        let agents: Vec<String> = vec!["mobile-developer".into()];
        let result = strategy.resolve(&input("아무 작업", &agents));
        assert_eq!(result.agent_name, "mobile-developer");
        assert_eq!(result.source, Source::Default);
        assert!((result.confidence - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_catalog_returns_literal_default() {
        let strategy = ExecutionStrategy::new();
        let agents: Vec<String> = Vec::new();
        let result = strategy.resolve(&input("아무 작업", &agents));
        assert_eq!(result.agent_name, agents::DEFAULT_AGENT);
        assert_eq!(result.source, Source::Default);
        assert!((result.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_planning_agent_is_not_execution_eligible() {
        let strategy = ExecutionStrategy::new();
        let agents = roster();
        let result = strategy.resolve(&input("use system-architect here", &agents));
        assert_ne!(result.agent_name, agents::SYSTEM_ARCHITECT);
        assert_ne!(result.source, Source::Explicit);
    }
}
