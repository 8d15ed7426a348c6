//! Property tests for argument routing.

use proptest::prelude::*;

use elm_live::args::{route, SEPARATOR};

/// Tokens that look like compiler input: never a tool flag, never `--`.
fn compiler_token() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z][A-Za-z0-9./ ]{0,16}").unwrap(),
        proptest::string::string_regex("--(warn|yes|output=[a-z.]{1,8}|report=json)").unwrap(),
    ]
}

/// Complete tool flags (no separate value token).
fn tool_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--open".to_string()),
        Just("--verbose".to_string()),
        (1u16..=u16::MAX).prop_map(|port| format!("--port={}", port)),
        proptest::string::string_regex("--host=[a-z0-9.]{1,12}").unwrap(),
        proptest::string::string_regex("--dir=[a-z/]{1,12}").unwrap(),
    ]
}

#[derive(Debug, Clone)]
enum Token {
    Tool(String),
    Compiler(String),
}

fn token() -> impl Strategy<Value = Token> {
    prop_oneof![
        tool_token().prop_map(Token::Tool),
        compiler_token().prop_map(Token::Compiler)
    ]
}

fn text(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| match t {
            Token::Tool(s) | Token::Compiler(s) => s.clone(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without `--`, routing is an order-preserving partition of argv.
    #[test]
    fn property_partition_preserves_order(tokens in proptest::collection::vec(token(), 0..24)) {
        let args = text(&tokens);
        let routed = route(&args);

        let expected_tool: Vec<String> = tokens.iter().filter_map(|t| match t {
            Token::Tool(s) => Some(s.clone()),
            Token::Compiler(_) => None,
        }).collect();
        let expected_compiler: Vec<String> = tokens.iter().filter_map(|t| match t {
            Token::Compiler(s) => Some(s.clone()),
            Token::Tool(_) => None,
        }).collect();

        prop_assert_eq!(routed.tool_args, expected_tool);
        prop_assert_eq!(routed.compiler_args_before_separator, expected_compiler);
        prop_assert!(routed.compiler_args_after_separator.is_empty());
    }

    /// PROPERTY: everything after the first `--` reaches the compiler verbatim.
    #[test]
    fn property_separator_passes_everything_through(
        before in proptest::collection::vec(token(), 0..12),
        after in proptest::collection::vec(
            prop_oneof![tool_token(), compiler_token(), Just(SEPARATOR.to_string())],
            0..12,
        ),
    ) {
        let mut args = text(&before);
        args.push(SEPARATOR.to_string());
        args.extend(after.iter().cloned());

        let routed = route(&args);

        prop_assert_eq!(&routed.compiler_args_after_separator, &after);
        prop_assert!(!routed.tool_args.iter().any(|t| t == SEPARATOR));
        prop_assert!(!routed.compiler_args_before_separator.iter().any(|t| t == SEPARATOR));
    }

    /// PROPERTY: routing never loses or invents tokens, whatever the input.
    #[test]
    fn property_token_count_is_conserved(args in proptest::collection::vec("(?s).{0,12}", 0..24)) {
        let routed = route(&args);
        let total = routed.tool_args.len()
            + routed.compiler_args_before_separator.len()
            + routed.compiler_args_after_separator.len();
        let separator = usize::from(args.iter().any(|a| a == SEPARATOR));
        prop_assert_eq!(total + separator, args.len());
    }
}
