//! Execution category registry.
//!
//! Korean particles attach directly to the preceding token ("eslint를"),
//! and both Latin letters and Hangul count as word characters, so a
//! trailing `\b` never fires there. Tool-name rules therefore end with
//! `(\b|[가-힣])` instead of a bare boundary.

use crate::agents;
use crate::pattern::{CategoryCheck, PatternRule};

/// Build the ordered execution categories.
///
/// Categories are checked in order and the first category with any
/// matching rule wins. Agent meta-tooling comes first so that prompts
/// about creating or configuring agents are not swallowed by a generic
/// category that happens to share a keyword; backend-api sits near the end
/// because its vocabulary is the most generic.
pub fn execution_categories() -> Vec<CategoryCheck> {
    vec![
        CategoryCheck {
            handler: agents::AGENT_EXPERT,
            label: "agent-meta",
            rules: vec![
                PatternRule::new(
                    r"(서브\s*)?에이전트\s*(생성|만들|추가|등록|설정|수정)",
                    0.95,
                    "agent creation or setup request",
                ),
                PatternRule::new(
                    r"(?i)\b(create|add|register|configure|update)\b.{0,30}\b(sub)?-?agents?(\b|[가-힣])",
                    0.9,
                    "agent tooling request",
                ),
                PatternRule::new(
                    r"(?i)\b(sub)?-?agents?(\b|[가-힣]).{0,20}(만들|생성|추가|등록)",
                    0.9,
                    "agent creation request (mixed script)",
                ),
                PatternRule::new(
                    r"(?i)(새|custom|new)\s*(서브)?\s*-?(sub)?agent",
                    0.85,
                    "new custom agent",
                ),
            ],
        },
        CategoryCheck {
            handler: agents::BUILD_ENGINEER,
            label: "build-tooling",
            rules: vec![
                PatternRule::new(
                    r"(?i)\b(eslint|prettier|biome|stylelint)(\b|[가-힣])",
                    0.95,
                    "linter or formatter configuration",
                ),
                PatternRule::new(
                    r"(?i)\b(webpack|vite|rollup|esbuild|babel|swc|turbopack)(\b|[가-힣])",
                    0.9,
                    "bundler or transpiler configuration",
                ),
                PatternRule::new(
                    r"(?i)\b(tsconfig|package\.json|pnpm|yarn|npm)(\b|[가-힣])",
                    0.85,
                    "package or compiler configuration",
                ),
                PatternRule::new(
                    r"(린트|빌드\s*(설정|구성|스크립트|파이프라인))",
                    0.85,
                    "build setup request",
                ),
                PatternRule::new(
                    r"(?i)(github\s*actions|\bci\b.{0,20}(pipeline|workflow|워크플로))",
                    0.8,
                    "CI workflow maintenance",
                ),
            ],
        },
        CategoryCheck {
            handler: agents::DEVOPS_ENGINEER,
            label: "infra-as-code",
            rules: vec![
                PatternRule::new(
                    r"(?i)\b(terraform|pulumi|cloudformation|ansible)(\b|[가-힣])",
                    0.95,
                    "infrastructure-as-code tooling",
                ),
                PatternRule::new(
                    r"(?i)\b(kubernetes|k8s|helm|kustomize|istio)(\b|[가-힣])|쿠버네티스",
                    0.9,
                    "kubernetes work",
                ),
                PatternRule::new(
                    r"(?i)\b(dockerfile|docker[- ]?compose|docker|container)(\b|[가-힣])|컨테이너",
                    0.85,
                    "container work",
                ),
                PatternRule::new(
                    r"(인프라|배포\s*(환경|설정|파이프라인))",
                    0.85,
                    "infrastructure or deployment environment request",
                ),
                PatternRule::new(
                    r"(?i)\b(aws|gcp|azure)(\b|[가-힣]).{0,20}(provision|deploy|설정|배포|구성)",
                    0.8,
                    "cloud provisioning request",
                ),
            ],
        },
        CategoryCheck {
            handler: agents::DATABASE_SPECIALIST,
            label: "data/schema",
            rules: vec![
                PatternRule::new(r"(스키마|마이그레이션)", 0.9, "schema or migration request"),
                PatternRule::new(
                    r"(?i)\b(schemas?|migrations?)(\b|[가-힣])",
                    0.85,
                    "schema or migration request",
                ),
                PatternRule::new(
                    r"(?i)\b(postgres(ql)?|mysql|sqlite|mongodb|redis)(\b|[가-힣])",
                    0.85,
                    "database engine work",
                ),
                PatternRule::new(
                    r"(테이블|인덱스)\s*(설계|추가|변경|생성)",
                    0.85,
                    "table or index change",
                ),
                PatternRule::new(
                    r"(?i)\bsql(\b|[가-힣])|데이터베이스|\bdatabase(\b|[가-힣])",
                    0.8,
                    "general database request",
                ),
            ],
        },
        CategoryCheck {
            handler: agents::ML_ENGINEER,
            label: "AI/ML",
            rules: vec![
                PatternRule::new(
                    r"(모델\s*(학습|훈련|평가|서빙)|파인\s*튜닝)|(?i)fine[- ]?tun",
                    0.9,
                    "model training request",
                ),
                PatternRule::new(
                    r"(?i)\b(pytorch|tensorflow|huggingface|onnx|scikit)(\b|[가-힣])",
                    0.9,
                    "ML framework work",
                ),
                PatternRule::new(
                    r"(?i)\b(llm|embedding|rag)(\b|[가-힣])|프롬프트\s*(엔지니어링|튜닝)",
                    0.85,
                    "LLM or retrieval work",
                ),
                PatternRule::new(
                    r"(머신\s*러닝|딥\s*러닝)|(?i)\b(machine|deep)\s+learning(\b|[가-힣])",
                    0.85,
                    "general ML request",
                ),
            ],
        },
        CategoryCheck {
            handler: agents::BACKEND_DEVELOPER,
            label: "backend-api",
            rules: vec![
                PatternRule::new(
                    r"(?i)\bapi(\b|[가-힣]).{0,20}(엔드포인트|endpoint|구현|추가|수정|만들|design)",
                    0.85,
                    "API endpoint work",
                ),
                PatternRule::new(
                    r"(엔드포인트|라우트|미들웨어|인증)\s*(구현|추가|수정|변경)",
                    0.85,
                    "server route or middleware work",
                ),
                PatternRule::new(
                    r"(?i)\b(rest|graphql|grpc|websocket)(\b|[가-힣])",
                    0.8,
                    "API protocol work",
                ),
                PatternRule::new(
                    r"(서버|백엔드)|(?i)\bbackend(\b|[가-힣])",
                    0.8,
                    "general backend request",
                ),
            ],
        },
        CategoryCheck {
            handler: agents::MOBILE_DEVELOPER,
            label: "mobile",
            rules: vec![
                PatternRule::new(
                    r"(?i)\b(react\s*native|flutter|swiftui|jetpack\s+compose)(\b|[가-힣])",
                    0.9,
                    "cross-platform or native UI framework",
                ),
                PatternRule::new(
                    r"(?i)\b(ios|android)(\b|[가-힣])",
                    0.85,
                    "mobile platform work",
                ),
                PatternRule::new(
                    r"(모바일|앱\s*(화면|개발|출시))",
                    0.85,
                    "mobile app request",
                ),
            ],
        },
    ]
}
