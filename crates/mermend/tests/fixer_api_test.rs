//! Integration tests for `validate_and_fix` and the `Fixer` API.

use mermend::{Fixer, RuleCode, config::FixerConfig, validate_and_fix};

fn lowercase(fixes: &[String]) -> Vec<String> {
    fixes.iter().map(|f| f.to_lowercase()).collect()
}

fn any_fix_mentions(fixes: &[String], needle: &str) -> bool {
    lowercase(fixes).iter().any(|f| f.contains(needle))
}

#[test]
fn test_arrow_label_spacing_scenario() {
    let (fixed, fixes) = validate_and_fix("A -->| \"calls\" | B");
    assert_eq!(fixed, "A -->|\"calls\"| B");
    assert_eq!(fixes.len(), 1);
}

#[test]
fn test_identifier_rewrite_scenario() {
    let (fixed, fixes) = validate_and_fix("API-Gateway[API Gateway]\nAPI-Gateway --> Backend");
    assert!(fixed.contains("APIGateway[\"API Gateway\"]"));
    assert!(fixed.contains("APIGateway --> Backend"));
    assert!(!fixed.contains("API-Gateway"));
    assert!(any_fix_mentions(&fixes, "node id"));
}

#[test]
fn test_overlong_arrow_scenario() {
    let (fixed, _) = validate_and_fix("A ---> B");
    assert_eq!(fixed, "A --> B");
}

#[test]
fn test_missing_header_scenario() {
    let (fixed, fixes) = validate_and_fix("graph-like layout\nA --> B");
    assert!(fixed.starts_with("flowchart TD\n"));
    assert!(any_fix_mentions(&fixes, "diagram type"));
}

#[test]
fn test_empty_scenario() {
    let (fixed, fixes) = validate_and_fix("");
    assert_eq!(fixed, "");
    assert_eq!(fixes.len(), 1);
    assert!(any_fix_mentions(&fixes, "empty"));
}

#[test]
fn test_fence_scenario() {
    let (fixed, fixes) = validate_and_fix("```mermaid\nflowchart TD\n    A --> B\n```");
    assert!(!fixed.contains('`'));
    assert!(fixed.starts_with("flowchart TD"));
    assert_eq!(fixed, "flowchart TD\nA --> B");
    assert!(any_fix_mentions(&fixes, "fence"));
}

#[test]
fn test_fix_arrow_spacing() {
    let (fixed, fixes) = validate_and_fix("flowchart TD\n    A -->| \"calls API\" | B");
    assert!(fixed.contains("-->|\"calls API\"|"));
    assert!(any_fix_mentions(&fixes, "arrow label spacing"));
}

#[test]
fn test_fix_arrow_spacing_all_glyphs() {
    let input = "flowchart TD\nA <-->| \"x\" | B\nB ==> |\"y\"| C\nC -.->|  \"z\"| D\nD <-. |\"w\" | E";
    let (fixed, _) = validate_and_fix(input);
    assert_eq!(
        fixed,
        "flowchart TD\nA <-->|\"x\"| B\nB ==>|\"y\"| C\nC -.->|\"z\"| D\nD <-.|\"w\"| E"
    );
}

#[test]
fn test_fix_subgraph_styling() {
    let (fixed, fixes) =
        validate_and_fix("flowchart TD\n    subgraph \"Frontend Layer\":::frontend\n        A[\"Component\"]\n    end");
    assert!(fixed.contains("subgraph \"Frontend Layer\""));
    assert!(!fixed.lines().nth(1).unwrap_or_default().contains(":::frontend"));
    assert!(any_fix_mentions(&fixes, "subgraph"));
}

#[test]
fn test_fix_node_ids_with_special_chars() {
    let (fixed, fixes) = validate_and_fix(
        "flowchart TD\n    API-Gateway[\"API Gateway\"]\n    user.service[\"User Service\"]\n    API-Gateway --> user.service",
    );
    assert!(fixed.contains("APIGateway"));
    assert!(fixed.contains("user_service"));
    assert!(!fixed.contains("API-Gateway"));
    assert!(!fixed.contains("user.service"));
    assert!(any_fix_mentions(&fixes, "node id"));
}

#[test]
fn test_add_quotes_to_node_labels() {
    let (fixed, fixes) = validate_and_fix("flowchart TD\n    A[/api/endpoint]\n    B[Process (Backend)]");
    assert!(fixed.contains("A[\"/api/endpoint\"]"));
    assert!(fixed.contains("B[\"Process (Backend)\"]"));
    assert!(any_fix_mentions(&fixes, "node label"));
}

#[test]
fn test_add_quotes_to_arrow_labels() {
    let (fixed, fixes) =
        validate_and_fix("flowchart TD\n    A -->|calls func()| B\n    B -->|sends /data| C");
    assert!(fixed.contains("-->|\"calls func()\"|"));
    assert!(fixed.contains("-->|\"sends /data\"|"));
    assert!(any_fix_mentions(&fixes, "arrow label"));
}

#[test]
fn test_fix_wrong_arrow_syntax() {
    let (fixed, fixes) = validate_and_fix("flowchart TD\n    A ---> B\n    C <--- D\n    E ===> F");
    assert_eq!(fixed, "flowchart TD\nA --> B\nC <-- D\nE ==> F");
    assert!(any_fix_mentions(&fixes, "arrow syntax"));
}

#[test]
fn test_fix_underscore_and_single_dash_arrows() {
    let (fixed, fixes) = validate_and_fix("flowchart LR\nA __> B\nB <__ C\nC _._> D\nD -> E");
    assert_eq!(fixed, "flowchart LR\nA --> B\nB <-- C\nC -.-> D\nD --> E");
    assert_eq!(
        fixes.iter().filter(|f| f.contains("arrow syntax")).count(),
        2
    );
}

#[test]
fn test_single_dash_kept_in_sequence_diagram() {
    let input = "sequenceDiagram\nAlice->>Bob: Hello\nBob->Alice: Hi";
    let (fixed, fixes) = validate_and_fix(input);
    assert_eq!(fixed, input);
    assert!(fixes.is_empty());
}

#[test]
fn test_header_not_added_without_graph_mention() {
    let (fixed, fixes) = validate_and_fix("A[\"Node A\"]\n    B[\"Node B\"]\n    A --> B");
    assert!(fixed.starts_with("A[\"Node A\"]"));
    assert!(fixes.is_empty());
}

#[test]
fn test_remove_markdown_fences() {
    let (fixed, fixes) = validate_and_fix("```mermaid\nflowchart TD\n    A --> B\n```");
    assert!(!fixed.contains("```"));
    assert!(fixed.contains("flowchart TD"));
    assert!(any_fix_mentions(&fixes, "markdown") || any_fix_mentions(&fixes, "fence"));
}

#[test]
fn test_single_quotes_normalized() {
    let (fixed, fixes) = validate_and_fix("flowchart TD\nA['Start'] -->|'go'| B('End')");
    assert_eq!(fixed, "flowchart TD\nA[\"Start\"] -->|\"go\"| B(\"End\")");
    assert_eq!(fixes.len(), 1);
}

#[test]
fn test_subgraph_id_prefix_removed() {
    let (fixed, fixes) =
        validate_and_fix("flowchart TD\nsubgraph backend \"Backend Services\"\nA\nend\nsubgraph api[API]\nend");
    assert_eq!(
        fixed,
        "flowchart TD\nsubgraph \"Backend Services\"\nA\nend\nsubgraph \"API\"\nend"
    );
    assert!(any_fix_mentions(&fixes, "subgraph"));
}

#[test]
fn test_class_def_warning_without_rewrite() {
    let input = "flowchart TD\nA:::bad\nclassDef bad color:#fff";
    let (fixed, fixes) = validate_and_fix(input);
    assert_eq!(fixed, input);
    assert_eq!(
        fixes,
        vec!["Warning: classDef 'bad' may be missing fill/stroke/color properties".to_string()]
    );
}

#[test]
fn test_complex_diagram_with_multiple_issues() {
    let input = "```mermaid
flowchart TD
    API-Gateway[/api/gateway]
    subgraph \"Backend\":::backend
        user.service[\"User Service\"]
        API-Gateway -->| \"calls service\" | user.service
    end
    user.service ---> Database
```";
    let (fixed, fixes) = validate_and_fix(input);

    assert!(!fixed.contains("```"));
    assert!(fixed.contains("APIGateway[\"/api/gateway\"]"));
    assert!(fixed.contains("user_service"));
    assert!(fixed.contains("APIGateway -->|\"calls service\"| user_service"));
    assert!(fixed.contains("user_service --> Database"));
    assert!(!fixed.contains("--->"));
    assert!(fixed.contains("subgraph \"Backend\"\n"));
    assert!(!fixed.contains(":::backend"));
    assert!(fixes.len() >= 4);
}

#[test]
fn test_preserves_valid_syntax() {
    let input = "flowchart TD
    A[\"Node A\"]:::style1
    B[\"Node B\"]:::style2

    subgraph \"Layer 1\"
        C[\"Component C\"]
    end

    A -->|\"connects to\"| B
    B --> C

    click A \"src/a.js\"

    classDef style1 fill:#6366f1,stroke:#4f46e5,color:#fff";
    let (fixed, fixes) = validate_and_fix(input);

    assert!(fixed.contains("A[\"Node A\"]:::style1"));
    assert!(fixed.contains("subgraph \"Layer 1\""));
    assert!(fixed.contains("-->|\"connects to\"|"));
    assert!(fixed.contains("click A \"src/a.js\""));
    assert!(fixed.contains("classDef style1"));
    assert!(fixes.is_empty());
}

#[test]
fn test_quoted_text_is_left_alone() {
    let input = "flowchart TD\nA[\"uses a-b.c ---> x\"] --> B[\"see 'docs'\"]";
    let (fixed, fixes) = validate_and_fix(input);
    assert_eq!(fixed, input);
    assert!(fixes.is_empty());
}

#[test]
fn test_fix_is_idempotent_on_messy_input() {
    let input = "```mermaid\nflowchart TD\n  api-gw[/gateway]\n  api-gw -->| 'route /x' | svc.core\n  svc.core[Core (v2)] ---> db[(Postgres)]\n  subgraph infra \"Infra\":::dark\n  end\n```";
    let fixer = Fixer::default();
    let first = fixer.fix(input);
    let second = fixer.fix(first.text());

    assert_eq!(second.text(), first.text());
    assert!(!second.changed());
    assert!(first.record().contains(RuleCode::M003));
    assert!(first.text().contains("db[(Postgres)]"));
}

#[test]
fn test_custom_header_and_plain_label_setting() {
    let config = FixerConfig::default()
        .with_header("graph LR")
        .with_quote_plain_labels(false);
    let fixed = Fixer::new(config).fix("my graph\nA[Plain] --> B");
    assert_eq!(fixed.text(), "graph LR\nmy graph\nA[Plain] --> B");
}

#[test]
fn test_crlf_input_is_fixed_in_one_pass() {
    let input = "flowchart TD\r\nsubgraph api \"API\"\r\nA --> B\r\nend\r\n";
    let fixer = Fixer::default();
    let first = fixer.fix(input);
    assert_eq!(first.text(), "flowchart TD\nsubgraph \"API\"\nA --> B\nend");
    assert!(first.record().contains(RuleCode::M011));

    let second = fixer.fix(first.text());
    assert_eq!(second.text(), first.text());
    assert!(!second.changed());
}

#[test]
fn test_sequence_diagram_brackets_untouched() {
    let input = "sequenceDiagram\nAlice->>Bob: fetch items[0/1]";
    let (fixed, fixes) = validate_and_fix(input);
    assert_eq!(fixed, input);
    assert!(fixes.is_empty());
}

#[test]
fn test_arrow_text_inside_shape_label_untouched() {
    let (fixed, fixes) = validate_and_fix("flowchart TD\nA[(a->b)] -> B");
    assert_eq!(fixed, "flowchart TD\nA[(a->b)] --> B");
    assert_eq!(fixes.len(), 1);
}
