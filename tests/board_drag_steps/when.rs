//! When steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use docket::board::domain::{CardId, DragEvent, TaskStatus};
use rstest_bdd_macros::when;

#[when(r#"the task "{card}" is dropped on the "{status}" column"#)]
fn drop_task_on_column(
    world: &mut BoardWorld,
    card: String,
    status: String,
) -> Result<(), eyre::Report> {
    let destination = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid destination status in scenario: {err}"))?;

    let outcome = run_async(
        world
            .board
            .handle_drop(DragEvent::dropped_on(CardId::new(card), destination)),
    );
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the drag of task "{card}" is released outside every column"#)]
fn release_drag_outside(world: &mut BoardWorld, card: String) {
    let outcome = run_async(
        world
            .board
            .handle_drop(DragEvent::released_outside(CardId::new(card))),
    );
    world.last_outcome = Some(outcome);
}
