#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate dataseries;
use dataseries::tests::properties::{assert_merge_properties, sanitize};

fuzz_target!(|data: Vec<(i8, u8)>| {
    // narrow values so that runs of equal values are common
    let samples = data.into_iter().map(|(point, value)| (point, value % 4));
    assert_merge_properties(&sanitize(samples));
});
