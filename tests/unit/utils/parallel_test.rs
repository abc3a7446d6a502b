use super::*;

#[test]
fn can_collect_in_parallel() {
    let source = (0..128).collect::<Vec<i32>>();

    let result = parallel_collect(&source, |item| item * 2);

    assert_eq!(result, source.iter().map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_collect_empty_source() {
    let source: Vec<i32> = vec![];

    let result = parallel_collect(&source, |item| item + 1);

    assert!(result.is_empty());
}
