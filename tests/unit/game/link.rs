use super::*;

#[test]
fn external_links_use_the_url_as_argument() {
    let link = Link::external(6, 6, "osu.sh");
    assert_eq!(link.action, LinkAction::External);
    assert_eq!(link.argument, "osu.sh");
    assert_eq!(link.url.as_deref(), Some("osu.sh"));
    assert_eq!(link.end(), 12);
}

#[test]
fn details_decouple_target_from_display() {
    let details = LinkDetails::new(LinkAction::OpenUserProfile, "2");
    assert_eq!(details.action, LinkAction::OpenUserProfile);
    assert_eq!(details.argument, "2");
}

#[test]
fn headless_env_has_no_collaborators() {
    let env = LinkEnv::headless();
    assert!(env.dispatcher.is_none());
    assert!(env.opener.is_none());
}
