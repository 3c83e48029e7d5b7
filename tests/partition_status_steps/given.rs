//! Given steps for group partition status BDD scenarios.

use super::world::{PartitionWorld, run_async};
use eyre::WrapErr;
use groupstatus::partition::domain::{GroupBound, GroupField, GroupRange};
use rstest_bdd_macros::given;

#[given("a status provider where even items are completed")]
fn even_items_completed(world: &mut PartitionWorld) {
    for id in 1..=10 {
        world.provider.set_status(id, id % 2 == 0);
    }
}

#[given(r#"group {index:usize} is set to "{from}" through "{to}""#)]
fn group_is_set(
    world: &mut PartitionWorld,
    index: usize,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let position = index
        .checked_sub(1)
        .ok_or_else(|| eyre::eyre!("group numbers start at 1"))?;
    world
        .board
        .update_group(position, GroupField::From, &from)
        .wrap_err("set group start")?;
    world
        .board
        .update_group(position, GroupField::To, &to)
        .wrap_err("set group end")?;
    Ok(())
}

#[given(r#"a group is added spanning "{from}" through "{to}""#)]
fn group_is_added(world: &mut PartitionWorld, from: String, to: String) {
    world.board.add_group(GroupRange::new(
        GroupBound::parse_lenient(&from),
        GroupBound::parse_lenient(&to),
    ));
}

#[given("status has been shown once")]
fn status_shown_once(world: &mut PartitionWorld) -> Result<(), eyre::Report> {
    run_async(world.service.show_status()).wrap_err("initial status pass")?;
    Ok(())
}

#[given("the status provider loses item {id:i64}")]
fn provider_loses_item(world: &mut PartitionWorld, id: i64) {
    world.provider.forget(id);
}
