use super::*;

mod equals_ignore_case {
    use super::*;

    #[test]
    fn should_return_true_when_ascii_values_match_case_insensitively_then_detect_equality() {
        let result = equals_ignore_case("x-pwnfox-color", "X-PWNFOX-COLOR");

        assert!(result);
    }

    #[test]
    fn should_return_false_when_ascii_values_differ_then_detect_inequality() {
        let result = equals_ignore_case("X-Pwnfox-Color", "X-Pwnfox-Colour");

        assert!(!result);
    }

    #[test]
    fn should_return_true_when_unicode_values_match_case_insensitively_then_detect_equality() {
        let result = equals_ignore_case("X-ÉTIQUETTE", "x-étiquette");

        assert!(result);
    }

    #[test]
    fn should_return_false_when_unicode_values_differ_then_detect_inequality() {
        let result = equals_ignore_case("Ápp", "Ápd");

        assert!(!result);
    }
}

mod is_http_token {
    use super::*;

    #[test]
    fn should_return_true_when_value_contains_valid_token_characters_then_accept_value() {
        assert!(is_http_token("X-Pwnfox-Color"));
        assert!(is_http_token("Content-Type"));
    }

    #[test]
    fn should_return_false_when_value_contains_invalid_character_then_reject_value() {
        assert!(!is_http_token("Header:Value"));
        assert!(!is_http_token("X-Pwnfox Color"));
    }

    #[test]
    fn should_return_false_when_value_empty_then_reject_value() {
        assert!(!is_http_token(""));
    }
}

mod split_list {
    use super::*;

    #[test]
    fn should_trim_tokens_given_whitespace_after_commas() {
        let tokens: Vec<&str> = split_list("X-Pwnfox-Color,  X-Foo ,X-Bar").collect();

        assert_eq!(tokens, vec!["X-Pwnfox-Color", "X-Foo", "X-Bar"]);
    }

    #[test]
    fn should_skip_empty_tokens_given_trailing_or_repeated_commas() {
        let tokens: Vec<&str> = split_list(" , X-Foo,, ").collect();

        assert_eq!(tokens, vec!["X-Foo"]);
    }

    #[test]
    fn should_yield_nothing_given_blank_value() {
        assert_eq!(split_list("   ").count(), 0);
    }
}

mod join_list {
    use super::*;

    #[test]
    fn should_join_with_comma_space_given_multiple_tokens() {
        let joined = join_list(["GET", "PUT"]);

        assert_eq!(joined, "GET, PUT");
    }

    #[test]
    fn should_return_empty_string_given_no_tokens() {
        let joined = join_list(Vec::<String>::new());

        assert!(joined.is_empty());
    }
}
