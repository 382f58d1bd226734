use platform::{HeadlessPlatform, Viewport};
use sidebar::{
    ClickOutcome, EntryId, Platform, ScrollBlock, ScrollRestore, SidebarConfig, SidebarController,
};

const TOC: &str = r#"<ol class="chapter">
<li class="chapter-item "><a href="index.html">Intro</a></li>
<li class="chapter-item "><a href="guide/index.html">Guide</a><a class="toggle"><div>&#x276F;</div></a></li>
<li><ol class="section">
  <li class="chapter-item "><a href="guide/install.html">Install</a></li>
</ol></li>
<li class="chapter-item "><a href="faq.html">FAQ</a></li>
</ol>"#;

#[test]
fn scroll_offset_survives_navigation() {
    let mut platform = HeadlessPlatform::new("https://docs.example/book/faq.html");
    let mut controller =
        SidebarController::connect(TOC, SidebarConfig::new(""), &mut platform).expect("connect");
    assert_eq!(controller.active(), Some(EntryId(3)));
    platform.set_scroll_top(80.0);

    let target = controller.target_for_href("guide/install.html");
    let ClickOutcome::Navigate { destination, .. } = controller.handle_click(target, &mut platform)
    else {
        panic!("expected navigation");
    };
    assert_eq!(destination, "https://docs.example/book/guide/install.html");

    platform.navigate(destination);
    assert_eq!(platform.scroll_top(), 0.0);
    let controller =
        SidebarController::connect(TOC, SidebarConfig::new("../"), &mut platform).expect("connect");

    assert_eq!(controller.active(), Some(EntryId(2)));
    assert_eq!(controller.scroll_restore(), ScrollRestore::Restored(80.0));
    assert_eq!(platform.scroll_top(), 80.0);
    assert!(platform.scrolled_into_view().is_empty());
    assert!(platform.storage().is_empty());
    assert!(platform.content().contains(r#"<a href="../faq.html">FAQ</a>"#));
}

#[test]
fn fresh_session_centres_the_active_entry() {
    let viewport = Viewport {
        height: 40.0,
        row_height: 20.0,
    };
    let mut platform =
        HeadlessPlatform::new("https://docs.example/book/faq.html").with_viewport(viewport);
    let controller =
        SidebarController::connect(TOC, SidebarConfig::new(""), &mut platform).expect("connect");

    assert_eq!(controller.scroll_restore(), ScrollRestore::IntoView(EntryId(3)));
    assert_eq!(
        platform.scrolled_into_view(),
        [(EntryId(3), ScrollBlock::Center)]
    );
    // Row 3 spans 60..80; centring it in a 40px viewport starts at 50.
    assert_eq!(platform.scroll_top(), 50.0);
}
