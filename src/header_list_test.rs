use super::*;

mod parse {
    use super::*;

    #[test]
    fn should_preserve_order_and_casing_given_mixed_tokens() {
        let list = HeaderList::parse("x-pwnfox-color, X-Foo,content-type");

        let tokens: Vec<&str> = list.iter().collect();

        assert_eq!(tokens, vec!["x-pwnfox-color", "X-Foo", "content-type"]);
    }

    #[test]
    fn should_be_empty_given_blank_value() {
        let list = HeaderList::parse("");

        assert!(list.is_empty());
    }
}

mod remove_ignore_case {
    use super::*;

    #[test]
    fn should_remove_and_report_given_token_in_other_case() {
        let mut list = HeaderList::parse("X-PWNFOX-COLOR, X-Foo");

        let removed = list.remove_ignore_case("X-Pwnfox-Color");

        assert!(removed);
        assert_eq!(list.to_header_value(), "X-Foo");
    }

    #[test]
    fn should_remove_every_occurrence_given_duplicates() {
        let mut list = HeaderList::parse("X-Pwnfox-Color, x-pwnfox-color");

        let removed = list.remove_ignore_case("X-Pwnfox-Color");

        assert!(removed);
        assert!(list.is_empty());
    }

    #[test]
    fn should_report_false_and_keep_tokens_given_no_match() {
        let mut list = HeaderList::parse("X-Foo, X-Bar");

        let removed = list.remove_ignore_case("X-Pwnfox-Color");

        assert!(!removed);
        assert_eq!(list.len(), 2);
    }
}

mod contains {
    use super::*;

    #[test]
    fn should_match_ignoring_case_given_header_names() {
        let list = HeaderList::parse("Content-Type");

        assert!(list.contains_ignore_case("content-type"));
    }

    #[test]
    fn should_match_exactly_given_methods() {
        let list = HeaderList::parse("GET, PUT");

        assert!(list.contains_exact("PUT"));
        assert!(!list.contains_exact("put"));
    }
}

mod to_header_value {
    use super::*;

    #[test]
    fn should_join_with_comma_space_given_pushed_token() {
        let mut list = HeaderList::parse("GET");
        list.push("PUT");

        let value = list.to_header_value();

        assert_eq!(value, "GET, PUT");
    }
}
