use answerdoc_export::canvas::{FontFace, layout_pages};
use answerdoc_export::styles::CanvasStyles;

#[test]
fn bullets_are_indented_and_advance_by_eighteen() {
    let styles = CanvasStyles::default();
    let layout = layout_pages("- item one\n- item two", &styles);
    assert_eq!(layout.pages.len(), 1);

    let ops = &layout.pages[0].ops;
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].text, "\u{2022} item one");
    assert_eq!(ops[1].text, "\u{2022} item two");
    assert_eq!(ops[0].x, 70.0);
    assert_eq!(ops[1].x, 70.0);
    assert_eq!(ops[0].y, styles.page_height - 50.0);
    assert_eq!(ops[0].y - ops[1].y, 18.0);
}

#[test]
fn headings_use_bold_fonts_and_larger_advances() {
    let styles = CanvasStyles::default();
    let layout = layout_pages("# Title\n## Sub\nbody", &styles);
    let ops = &layout.pages[0].ops;

    assert_eq!(ops[0].font.face, FontFace::Bold);
    assert_eq!(ops[0].font.size, 20.0);
    assert_eq!(ops[1].font.face, FontFace::Bold);
    assert_eq!(ops[1].font.size, 16.0);
    assert_eq!(ops[2].font.face, FontFace::Regular);
    assert_eq!(ops[2].font.size, 12.0);

    assert_eq!(ops[0].y - ops[1].y, 30.0);
    assert_eq!(ops[1].y - ops[2].y, 25.0);
    assert!(ops.iter().all(|op| op.x == 50.0));
}

#[test]
fn bold_markers_are_flattened() {
    let layout = layout_pages("Plain **bold** end.\n- a **b**", &CanvasStyles::default());
    let texts: Vec<&str> = layout.ops().map(|op| op.text.as_str()).collect();
    assert_eq!(texts, vec!["Plain bold end.", "\u{2022} a b"]);
}

#[test]
fn long_text_breaks_across_pages() {
    let text = (0..100).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let layout = layout_pages(&text, &CanvasStyles::default());
    assert!(layout.pages.len() > 1);
    assert_eq!(layout.ops().count(), 100);
}

#[test]
fn never_draws_below_bottom_margin() {
    let styles = CanvasStyles::default();
    let text = (0..300)
        .map(|i| match i % 7 {
            0 => format!("# Title {i}"),
            3 => format!("## Sub {i}"),
            5 => format!("- bullet {i}"),
            _ => format!("body {i}"),
        })
        .collect::<Vec<_>>()
        .join("\n");
    let layout = layout_pages(&text, &styles);

    let (last, full) = layout.pages.split_last().unwrap();
    for page in full {
        assert_eq!(page.ops[0].y, styles.page_height - 50.0);
    }
    for page in full.iter().chain([last]) {
        for op in &page.ops {
            assert!(op.y >= 50.0, "drew at y={}", op.y);
        }
    }
}

#[test]
fn order_is_preserved_across_pages() {
    let text = (0..120).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n\n");
    let layout = layout_pages(&text, &CanvasStyles::default());
    let texts: Vec<String> = layout.ops().map(|op| op.text.clone()).collect();
    let expected: Vec<String> = (0..120).map(|i| format!("line {i}")).collect();
    assert_eq!(texts, expected);
}

#[test]
fn page_fill_matches_cursor_arithmetic() {
    let styles = CanvasStyles {
        page_height: 200.0,
        ..CanvasStyles::default()
    };
    // Draws at 150, 132, 114, 96, 78, 60; the cursor then sits at 42.
    let text = (0..7).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
    let layout = layout_pages(&text, &styles);
    assert_eq!(layout.pages.len(), 2);
    assert_eq!(layout.pages[0].ops.len(), 6);
    assert_eq!(layout.pages[1].ops.len(), 1);
}

#[test]
fn last_line_crossing_the_margin_still_breaks() {
    let styles = CanvasStyles {
        page_height: 200.0,
        ..CanvasStyles::default()
    };
    let text = (0..6).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
    let layout = layout_pages(&text, &styles);
    assert_eq!(layout.pages.len(), 2);
    assert_eq!(layout.pages[0].ops.len(), 6);
    assert!(layout.pages[1].ops.is_empty());
}

#[test]
fn last_line_above_the_margin_does_not_break() {
    let styles = CanvasStyles {
        page_height: 200.0,
        ..CanvasStyles::default()
    };
    let text = (0..5).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
    let layout = layout_pages(&text, &styles);
    assert_eq!(layout.pages.len(), 1);
}

#[test]
fn empty_text_is_one_blank_page() {
    let layout = layout_pages("", &CanvasStyles::default());
    assert_eq!(layout.pages.len(), 1);
    assert!(layout.pages[0].ops.is_empty());
}
