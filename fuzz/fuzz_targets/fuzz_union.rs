#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate dataseries;
use dataseries::tests::properties::{assert_union_properties, sanitize};

fuzz_target!(|data: (Vec<(i8, i16)>, Vec<(i8, u8)>)| {
    let (left, right) = data;
    assert_union_properties(&sanitize(left), &sanitize(right));
});
