use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut notices = Notices::default();
    let a = notices.push(NoticeKind::Success, "one".to_owned());
    let b = notices.push(NoticeKind::Error, "two".to_owned());
    assert!(b > a);
    assert_eq!(notices.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut notices = Notices::default();
    let a = notices.push(NoticeKind::Success, "one".to_owned());
    let b = notices.push(NoticeKind::Error, "two".to_owned());
    notices.dismiss(a);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].id, b);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut notices = Notices::default();
    notices.push(NoticeKind::Success, "one".to_owned());
    notices.dismiss(99);
    assert_eq!(notices.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut notices = Notices::default();
    let a = notices.push(NoticeKind::Success, "one".to_owned());
    notices.dismiss(a);
    let b = notices.push(NoticeKind::Success, "two".to_owned());
    assert!(b > a);
}
