//! Then steps for group partition status BDD scenarios.

use super::world::PartitionWorld;
use groupstatus::partition::{domain::ResultSet, services::ShowStatusOutcome};
use rstest_bdd_macros::then;

fn visible_results(world: &PartitionWorld) -> Result<ResultSet, eyre::Report> {
    world
        .board
        .results()
        .ok_or_else(|| eyre::eyre!("no results are visible"))
}

#[then("the status pass is applied")]
fn status_pass_applied(world: &PartitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_show_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("status was never shown"))?;

    if !matches!(result, Ok(ShowStatusOutcome::Applied { .. })) {
        return Err(eyre::eyre!("expected an applied pass, got {result:?}"));
    }
    if world.board.is_loading() {
        return Err(eyre::eyre!("board still reports loading"));
    }
    Ok(())
}

#[then("there are {count:usize} group results")]
fn group_result_count(world: &PartitionWorld, count: usize) -> Result<(), eyre::Report> {
    let results = visible_results(world)?;
    if results.len() != count {
        return Err(eyre::eyre!(
            "expected {count} group results, found {}",
            results.len()
        ));
    }
    Ok(())
}

#[then("group result {index:usize} covers items {from:i64} to {to:i64}")]
fn group_result_covers(
    world: &PartitionWorld,
    index: usize,
    from: i64,
    to: i64,
) -> Result<(), eyre::Report> {
    let results = visible_results(world)?;
    let group = index
        .checked_sub(1)
        .and_then(|position| results.group(position))
        .ok_or_else(|| eyre::eyre!("missing group result {index}"))?;

    let expected: Vec<i64> = (from..=to).collect();
    if group.ids() != expected {
        return Err(eyre::eyre!(
            "group result {index} covers {:?}, expected {expected:?}",
            group.ids()
        ));
    }
    Ok(())
}

#[then(r#"group result {index:usize} reads "{text}""#)]
fn group_result_reads(
    world: &PartitionWorld,
    index: usize,
    text: String,
) -> Result<(), eyre::Report> {
    let results = visible_results(world)?;
    let group = index
        .checked_sub(1)
        .and_then(|position| results.group(position))
        .ok_or_else(|| eyre::eyre!("missing group result {index}"))?;

    let rendered = group.to_string();
    if rendered != text {
        return Err(eyre::eyre!("group result {index} reads {rendered:?}"));
    }
    Ok(())
}

#[then(r#"status fails with the message "{message}""#)]
fn status_fails_with(world: &PartitionWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_show_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("status was never shown"))?;

    match result {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected failure {message:?}, got {other:?}")),
    }
}

#[then("no item status was requested")]
fn no_item_status_requested(world: &PartitionWorld) -> Result<(), eyre::Report> {
    let requested = world.provider.requested_ids();
    if !requested.is_empty() {
        return Err(eyre::eyre!("unexpected lookups: {requested:?}"));
    }
    Ok(())
}

#[then(r#"the deletion is refused with "{message}""#)]
fn deletion_refused(world: &PartitionWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_delete_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no group was deleted"))?;

    match result {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected refusal {message:?}, got {other:?}")),
    }
}

#[then("there are {count:usize} groups")]
fn group_count(world: &PartitionWorld, count: usize) -> Result<(), eyre::Report> {
    let len = world.board.groups().len();
    if len != count {
        return Err(eyre::eyre!("expected {count} groups, found {len}"));
    }
    Ok(())
}
