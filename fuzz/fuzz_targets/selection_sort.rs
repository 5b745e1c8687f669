#![no_main]

use libfuzzer_sys::fuzz_target;

use desc_sort::selection as test_sort;

fuzz_target!(|data: &[u8]| {
    desc_sort_fuzz::check_sort_range(data, test_sort::sort_range_by);
});
