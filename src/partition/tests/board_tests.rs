//! Group board mutation and pass-tagging tests.

use crate::partition::{
    domain::{
        GroupBound, GroupDomainError, GroupField, GroupRange, GroupResult, GroupSequence,
        PartitionBounds, ResultSet, StatusEntry,
    },
    services::{GroupBoard, PassSettlement},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn board() -> GroupBoard {
    GroupBoard::default()
}

fn results_for(ids: &[&[i64]]) -> ResultSet {
    let groups = ids
        .iter()
        .map(|group| group.iter().map(|id| StatusEntry::new(*id, true)).collect())
        .collect::<Vec<GroupResult>>();
    ResultSet::new(groups, &DefaultClock)
}

#[rstest]
fn new_board_starts_with_one_full_group(board: GroupBoard) {
    assert_eq!(board.groups().as_slice(), &[GroupRange::bounded(1, 10)]);
    assert!(board.results().is_none());
    assert!(!board.is_loading());
    assert_eq!(board.latest_pass(), None);
}

#[rstest]
fn board_honours_custom_bounds() {
    let bounds = PartitionBounds::new(2, 7).expect("valid bounds");
    let board = GroupBoard::new(bounds);
    assert_eq!(board.groups().as_slice(), &[GroupRange::bounded(2, 7)]);
}

#[rstest]
fn clones_share_state(board: GroupBoard) {
    let handle = board.clone();
    handle.add_group(GroupRange::empty());
    assert_eq!(board.groups().len(), 2);
}

#[rstest]
fn deleting_the_only_group_is_refused(board: GroupBoard) {
    assert_eq!(board.delete_group(0), Err(GroupDomainError::LastGroup));
    assert_eq!(board.groups().len(), 1);
    assert_eq!(
        GroupDomainError::LastGroup.to_string(),
        "At least one group must be present!"
    );
}

#[rstest]
fn deleting_an_unknown_index_leaves_state_unchanged(board: GroupBoard) {
    board.add_group(GroupRange::bounded(3, 4));
    assert_eq!(
        board.delete_group(7),
        Err(GroupDomainError::IndexOutOfRange { index: 7, len: 2 })
    );
    assert_eq!(board.groups().len(), 2);
}

#[rstest]
fn delete_prunes_the_matching_group_result(board: GroupBoard) {
    board
        .update_group(0, GroupField::To, "5")
        .expect("group exists");
    board.add_group(GroupRange::bounded(6, 10));
    let tag = board.begin_pass();
    board.complete_pass(tag, results_for(&[&[1, 2], &[6, 7]]));

    let removed = board.delete_group(0).expect("two groups present");

    assert_eq!(removed, GroupRange::bounded(1, 5));
    assert_eq!(board.groups().as_slice(), &[GroupRange::bounded(6, 10)]);
    let results = board.results().expect("results stay visible");
    assert_eq!(results.len(), 1);
    assert_eq!(results.group(0).map(GroupResult::ids), Some(vec![6, 7]));
}

#[rstest]
fn update_collapses_malformed_input(board: GroupBoard) {
    let stored = board
        .update_group(0, GroupField::From, "abc")
        .expect("group exists");
    assert_eq!(stored, GroupBound::EMPTY);
    assert_eq!(
        board.groups(),
        GroupSequence::single(GroupRange::new(GroupBound::EMPTY, GroupBound::new(10)))
    );
}

#[rstest]
fn pass_tags_increase(board: GroupBoard) {
    let first = board.begin_pass();
    let second = board.begin_pass();
    assert!(second > first);
    assert_eq!(second.value(), first.value() + 1);
    assert_eq!(board.latest_pass(), Some(second));
}

#[rstest]
fn latest_pass_results_are_applied(board: GroupBoard) {
    let tag = board.begin_pass();
    assert!(board.is_loading());

    let settlement = board.complete_pass(tag, results_for(&[&[1, 2, 3]]));

    assert_eq!(settlement, PassSettlement::Applied);
    assert!(!board.is_loading());
    assert_eq!(
        board.results().and_then(|results| results.group(0).map(GroupResult::len)),
        Some(3)
    );
}

#[rstest]
fn stale_pass_results_are_discarded(board: GroupBoard) {
    let stale = board.begin_pass();
    let fresh = board.begin_pass();

    assert_eq!(
        board.complete_pass(fresh, results_for(&[&[1]])),
        PassSettlement::Applied
    );
    assert_eq!(
        board.complete_pass(stale, results_for(&[&[9, 9]])),
        PassSettlement::Superseded { latest: fresh }
    );

    let results = board.results().expect("fresh results visible");
    assert_eq!(results.group(0).map(GroupResult::ids), Some(vec![1]));
}

#[rstest]
fn stale_pass_does_not_clear_loading_of_newer_pass(board: GroupBoard) {
    let stale = board.begin_pass();
    let fresh = board.begin_pass();

    board.complete_pass(stale, results_for(&[&[1]]));
    assert!(board.is_loading());
    assert!(board.results().is_none());

    assert_eq!(board.fail_pass(fresh), PassSettlement::Applied);
    assert!(!board.is_loading());
}

#[rstest]
fn failed_pass_keeps_previous_results(board: GroupBoard) {
    let first = board.begin_pass();
    board.complete_pass(first, results_for(&[&[4, 5]]));
    let previous = board.results();

    let second = board.begin_pass();
    assert_eq!(board.fail_pass(second), PassSettlement::Applied);

    assert!(!board.is_loading());
    assert_eq!(board.results(), previous);
}

#[rstest]
fn stale_pass_failure_leaves_newer_pass_untouched(board: GroupBoard) {
    let first = board.begin_pass();
    board.complete_pass(first, results_for(&[&[4, 5]]));
    let previous = board.results();

    let stale = board.begin_pass();
    let fresh = board.begin_pass();

    assert_eq!(
        board.fail_pass(stale),
        PassSettlement::Superseded { latest: fresh }
    );
    assert!(board.is_loading());
    assert_eq!(board.results(), previous);
    assert_eq!(board.latest_pass(), Some(fresh));
}
