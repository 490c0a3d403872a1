use super::*;

#[test]
fn renders_headings_and_lists() {
    let html = render_markdown_html("## Eligibility\n\n- Admit letter\n- Co-applicant");
    assert!(html.contains("<h2>Eligibility</h2>"));
    assert!(html.contains("<li>Admit letter</li>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("Hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("Hello"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| Lender | Rate |\n|---|---|\n| SBI | 9.15% |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>SBI</td>"));
}

#[test]
fn script_links_are_neutralized() {
    let html = render_markdown_html("[Apply now](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"), "{html}");
    assert!(html.contains(r##"<a href="#">Apply now</a>"##), "{html}");
}

#[test]
fn obfuscated_schemes_are_neutralized() {
    for body in ["[x](JavaScript:alert(1))", "[x](data:text/html,hi)", "[x](vbscript:msgbox)"] {
        let html = render_markdown_html(body);
        assert!(html.contains(r##"href="#""##), "{body} rendered as {html}");
    }
}

#[test]
fn image_sources_are_checked_too() {
    let html = render_markdown_html("![pic](javascript:alert(1))");
    assert!(!html.contains("javascript:"), "{html}");
}

#[test]
fn web_mail_phone_and_relative_links_survive() {
    let html = render_markdown_html(
        "[a](https://example.com/x) [b](http://example.com) [c](mailto:hello@edulend.in) [d](tel:+918047102200) [e](/tools/emi-calculator) [f](#faq) [g](rates?bank=sbi:1)",
    );
    for href in [
        "https://example.com/x",
        "http://example.com",
        "mailto:hello@edulend.in",
        "tel:+918047102200",
        "/tools/emi-calculator",
        "#faq",
        "rates?bank=sbi:1",
    ] {
        assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href} in {html}");
    }
}

#[test]
fn safe_url_rules() {
    assert!(is_safe_url("https://example.com"));
    assert!(is_safe_url("guides/visa"));
    assert!(is_safe_url("/a:b"));
    assert!(!is_safe_url(" javascript:void(0)"));
    assert!(!is_safe_url("file:///etc/passwd"));
    assert!(!is_safe_url("java\tscript:alert(1)"));
}
