use super::*;

#[test]
fn repo_endpoint_formats_expected_path() {
    assert_eq!(
        repo_endpoint("octocat", "hello-world"),
        "https://api.github.com/repos/octocat/hello-world"
    );
}

#[test]
fn languages_endpoint_formats_expected_path() {
    assert_eq!(
        languages_endpoint("octocat", "hello-world"),
        "https://api.github.com/repos/octocat/hello-world/languages"
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(404), "request failed with status 404");
}

#[test]
fn colors_url_points_at_the_published_definitions() {
    assert!(LANGUAGE_COLORS_URL.ends_with("colors.json"));
}
