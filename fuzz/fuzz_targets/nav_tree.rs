#![no_main]

use libfuzzer_sys::fuzz_target;
use nav::NavTree;
use url::Url;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let (mut dom, mut tree) = NavTree::from_markup(&input);
    let Ok(page) = Url::parse("https://docs.example/book/guide/page.html") else {
        return;
    };

    tree.rewrite_links("../", &page);
    if let Some(id) = tree.locate(&page, "../", "index.html", true) {
        assert!(tree.activate(id));
        for ancestor in tree.ancestors(id) {
            assert!(tree.entry(ancestor).is_some_and(|e| e.is_expanded()));
        }
    }
    assert!(tree.entries().iter().filter(|e| e.is_active()).count() <= 1);

    tree.apply_to_dom(&mut dom);
    let _ = html::serialize(&dom);
});
