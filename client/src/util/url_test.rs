use super::*;

#[test]
fn web_urls_are_allowed() {
    assert_eq!(safe_href("https://acme.test/gauze"), Some("https://acme.test/gauze"));
    assert_eq!(safe_href("  http://acme.test "), Some("http://acme.test"));
    assert_eq!(safe_href("HTTPS://ACME.TEST"), Some("HTTPS://ACME.TEST"));
}

#[test]
fn root_relative_paths_are_allowed() {
    assert_eq!(safe_href("/logo.png"), Some("/logo.png"));
}

#[test]
fn script_and_other_schemes_are_rejected() {
    assert_eq!(safe_href("javascript:alert(1)"), None);
    assert_eq!(safe_href(" JavaScript:alert(1)"), None);
    assert_eq!(safe_href("data:text/html,<script>x</script>"), None);
    assert_eq!(safe_href("vbscript:msgbox"), None);
    assert_eq!(safe_href("//evil.test/x"), None);
    assert_eq!(safe_href("/\\evil.test"), None);
    assert_eq!(safe_href("acme.test"), None);
    assert_eq!(safe_href(""), None);
}

#[test]
fn unsafe_images_fall_back_to_placeholder() {
    assert_eq!(safe_image_src("javascript:alert(1)"), PLACEHOLDER_IMAGE);
    assert_eq!(safe_image_src(""), PLACEHOLDER_IMAGE);
    assert_eq!(safe_image_src("https://img.test/a.png"), "https://img.test/a.png");
}
