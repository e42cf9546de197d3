use prescription_cell::PrescriptionDocument;

fn render(items: Vec<String>) -> Vec<u8> {
    PrescriptionDocument::new("Clinic Desk", "Bob", "Dr. Reed", "Flu", items)
        .render()
        .expect("render")
}

#[test]
fn render_produces_a_pdf() {
    let bytes = render(vec!["Tamiflu".to_string()]);
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn empty_prescription_list_still_renders() {
    let bytes = render(Vec::new());
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn rendered_text_content_is_stable_across_runs() {
    let first = PrescriptionDocument::new("Clinic Desk", "Bob", "Dr. Reed", "Flu", vec![])
        .layout();
    let second = PrescriptionDocument::new("Clinic Desk", "Bob", "Dr. Reed", "Flu", vec![])
        .layout();
    assert_eq!(first, second);
}

#[test]
fn long_prescription_lines_do_not_fail_rendering() {
    let long_item = "Take one tablet every six hours with food and a full glass of water, \
                     and stop immediately if any rash or swelling appears"
        .to_string();
    let bytes = render(vec![long_item]);
    assert!(bytes.starts_with(b"%PDF"));
}
