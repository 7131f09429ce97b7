use helpshell::{
    apply_rewrites, content_dimensions, plan_frame_load, FrameMetrics, FrameSnapshot,
    LayoutAction, LinkRecord, PageContext, RewriteAction,
};

fn snapshot_with_links(hrefs: &[&str]) -> FrameSnapshot {
    FrameSnapshot {
        title: "Sales Orders".to_string(),
        url: "http://localhost/help/en/sales-orders.htm".to_string(),
        body_scroll_height: 2400,
        body_scroll_width: 960,
        links: hrefs.iter().copied().map(LinkRecord::with_href).collect(),
    }
}

#[test]
fn plan_carries_layout_then_per_link_actions() {
    let snapshot = snapshot_with_links(&["./posting.htm", "http://example.com"]);
    let host = PageContext::new("", "/main.aspx?lang=da-dk&content=sales-orders.htm");
    let plan = plan_frame_load(&snapshot, &host);

    assert_eq!(plan.layout.len(), 3);
    assert!(matches!(
        plan.layout[0],
        LayoutAction::InjectStylesheet { .. }
    ));
    assert_eq!(plan.layout[1], LayoutAction::ZeroBodyLeftMargin);
    assert_eq!(
        plan.layout[2],
        LayoutAction::ResizeFrame {
            height: 2400,
            width: 960,
        }
    );

    assert_eq!(
        plan.link_actions[0],
        RewriteAction::RewriteInternal {
            href: "/main.aspx?lang=da-dk&content=posting.htm".to_string(),
            target: "_parent".to_string(),
        }
    );
    assert!(matches!(
        plan.link_actions[1],
        RewriteAction::RewriteExternal { .. }
    ));
}

#[test]
fn host_without_lang_parameter_falls_back_to_sentinel_locale() {
    let snapshot = snapshot_with_links(&["./topic.htm"]);
    let host = PageContext::new("", "http://localhost/main.aspx");
    let plan = plan_frame_load(&snapshot, &host);

    assert_eq!(
        plan.link_actions[0],
        RewriteAction::RewriteInternal {
            href: "/main.aspx?lang=W1&content=topic.htm".to_string(),
            target: "_parent".to_string(),
        }
    );
}

#[test]
fn dimensions_report_matches_resize_action() {
    let snapshot = snapshot_with_links(&[]);
    let metrics = content_dimensions(&snapshot);
    assert_eq!(
        metrics,
        FrameMetrics {
            height: 2400,
            width: 960,
        }
    );

    let host = PageContext::new("", "/main.aspx?lang=en-us");
    let plan = plan_frame_load(&snapshot, &host);
    assert!(plan.layout.contains(&LayoutAction::ResizeFrame {
        height: metrics.height,
        width: metrics.width,
    }));
    assert!(plan.link_actions.is_empty());
}

#[test]
fn applying_the_plan_patches_the_snapshot_links() {
    let snapshot = snapshot_with_links(&["./a.htm", "unrelated.pdf"]);
    let host = PageContext::new("", "/main.aspx?lang=en-us");
    let plan = plan_frame_load(&snapshot, &host);

    let mut links = snapshot.links.clone();
    apply_rewrites(&mut links, &plan.link_actions);

    assert_eq!(
        links[0].href.as_deref(),
        Some("/main.aspx?lang=en-us&content=a.htm")
    );
    assert_eq!(links[1].href.as_deref(), Some("unrelated.pdf"));
    assert_eq!(links[1].target, None);
}
