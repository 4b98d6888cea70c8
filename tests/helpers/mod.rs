#![allow(dead_code)]

use std::fmt::Debug;

use dataseries::{DataPoint, Series, UnionResult};

pub type Expected = Vec<DataPoint<i32, (Option<i64>, Option<u32>)>>;

pub fn to_options<L, R>(x: UnionResult<L, R>) -> (Option<L>, Option<R>) {
    match x {
        UnionResult::LeftOnly(left) => (Some(left), None),
        UnionResult::RightOnly(right) => (None, Some(right)),
        UnionResult::Both(left, right) => (Some(left), Some(right)),
    }
}

/// Checks the union of `left` and `right`, and the union with swapped arguments
pub fn check_union(expected: Expected, left: Vec<DataPoint<i32, i64>>, right: Vec<DataPoint<i32, u32>>) {
    let actual = left
        .clone()
        .into_iter()
        .union(right.clone().into_iter(), to_options)
        .collect::<Vec<_>>();
    assert_eq!(
        expected, actual,
        "\n---- inputs\n1/\n left:{left:?}\nright:{right:?}\n"
    );

    let actual = right
        .clone()
        .into_iter()
        .union(left.clone().into_iter(), |x| {
            let (r, l) = to_options(x);
            (l, r)
        })
        .collect::<Vec<_>>();
    assert_eq!(
        expected, actual,
        "\n---- inputs\n2/\n left:{right:?}\nright:{left:?}\n"
    );
}

/// Points of a series must never decrease
pub fn assert_ordered<P: PartialOrd + Debug, T: Debug>(series: &[DataPoint<P, T>]) {
    for pair in series.windows(2) {
        assert!(pair[0].point() <= pair[1].point(), "unordered: {pair:?}");
    }
}
