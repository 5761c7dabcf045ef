//! Large-repetition tests: repetition combinators must be iterative, so an
//! input with tens of thousands of matches completes without exhausting the
//! stack and yields the full output list.

use textcomb::map::MapExt;
use textcomb::{literal, many, one_of, parse, pattern, separated_list, sequence, some};

const COUNT: usize = 10_000;

#[test]
fn test_many_handles_ten_thousand_matches() {
    let input = "a".repeat(COUNT);

    let output = parse(&many(literal("a")), &input).unwrap();
    assert_eq!(output.len(), COUNT);
}

#[test]
fn test_some_handles_ten_thousand_matches() {
    let input = "x".repeat(COUNT);

    let output = parse(&some(literal("x")), &input).unwrap();
    assert_eq!(output.len(), COUNT);
}

#[test]
fn test_repeated_sequences() {
    let input = "ab".repeat(COUNT);
    let parser = many(sequence((literal("a"), literal("b"))));

    let output = parse(&parser, &input).unwrap();
    assert_eq!(output.len(), COUNT);
}

#[test]
fn test_large_separated_list() {
    let input = vec!["9"; COUNT].join(",");
    let parser = separated_list(pattern("[0-9]").unwrap(), literal(","));

    let output = parse(&parser, &input).unwrap();
    assert_eq!(output.len(), COUNT);
}

#[test]
fn test_large_repetition_with_mapping() {
    let input = "1".repeat(COUNT);
    let parser = many(pattern("[0-9]").unwrap().map(|d: &str| d.len()));

    let output = parse(&parser, &input).unwrap();
    assert_eq!(output.iter().sum::<usize>(), COUNT);
}

#[test]
fn test_order_is_preserved() {
    let input = "ab".repeat(2_000);
    let parser = many(one_of((literal("a"), literal("b"))));

    let output = parse(&parser, &input).unwrap();
    assert_eq!(output.len(), 4_000);
    for (index, item) in output.iter().enumerate() {
        let expected = if index % 2 == 0 { "a" } else { "b" };
        assert_eq!(item, expected);
    }
}
