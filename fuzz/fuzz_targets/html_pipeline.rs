#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let tokens = html::tokenize(&input);
    let mut dom = html::build_dom(&tokens);
    html::assign_node_ids(&mut dom);
    let _ = html::serialize(&dom);
});
