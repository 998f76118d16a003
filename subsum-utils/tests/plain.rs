use subsum_utils::{format_plain_output, parse_plain_input, PlainInput};

#[test]
fn test_parse_plain_input() {
    assert_eq!(
        parse_plain_input("17 4\n2 5 6 8\n").unwrap(),
        PlainInput {
            capacity: 17,
            weights: vec![2, 5, 6, 8],
        }
    );
    // line breaks carry no meaning
    assert_eq!(
        parse_plain_input("  5\t3 1\n 2\n4").unwrap(),
        PlainInput {
            capacity: 5,
            weights: vec![1, 2, 4],
        }
    );
    assert_eq!(
        parse_plain_input("9 0\n").unwrap(),
        PlainInput {
            capacity: 9,
            weights: vec![],
        }
    );
}

#[test]
fn test_parse_plain_input_errors() {
    assert!(parse_plain_input("").is_err());
    assert!(parse_plain_input("10").is_err());
    assert!(parse_plain_input("10 3\n1 2").is_err());
    assert!(parse_plain_input("10 2\n1 -2").is_err());
    assert!(parse_plain_input("ten 1\n1").is_err());
    assert!(parse_plain_input("10 1\n1 2").is_err());
}

#[test]
fn test_format_plain_output() {
    assert_eq!(format_plain_output(&[0, 2]), "2\n0 2\n");
    assert_eq!(format_plain_output(&[]), "0\n\n");
}
