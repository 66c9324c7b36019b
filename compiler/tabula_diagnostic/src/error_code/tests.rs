use super::*;

#[test]
fn phases_partition_all_codes() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_semantic_error(),
            code.is_internal_error(),
        ];
        assert_eq!(
            phases.iter().filter(|&&p| p).count(),
            1,
            "{code} must belong to exactly one phase"
        );
    }
}

#[test]
fn phase_matches_leading_digit() {
    for code in ErrorCode::ALL {
        let digit = code.as_str().as_bytes()[1];
        match digit {
            b'0' => assert!(code.is_lexer_error()),
            b'1' => assert!(code.is_parser_error()),
            b'2' => assert!(code.is_semantic_error()),
            b'9' => assert!(code.is_internal_error()),
            _ => panic!("unexpected phase digit in {code}"),
        }
    }
}

#[test]
fn display_and_parse_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("e1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("E4242".parse::<ErrorCode>(), Err(()));
}

#[test]
fn descriptions_are_non_empty() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty());
    }
}
