//! When steps for group partition status BDD scenarios.

use super::world::{PartitionWorld, run_async};
use rstest_bdd_macros::when;

#[when("status is shown")]
fn status_is_shown(world: &mut PartitionWorld) {
    let result = run_async(world.service.show_status());
    world.last_show_result = Some(result);
}

#[when("group {index:usize} is deleted")]
fn group_is_deleted(world: &mut PartitionWorld, index: usize) -> Result<(), eyre::Report> {
    let position = index
        .checked_sub(1)
        .ok_or_else(|| eyre::eyre!("group numbers start at 1"))?;
    world.last_delete_result = Some(world.board.delete_group(position));
    Ok(())
}
