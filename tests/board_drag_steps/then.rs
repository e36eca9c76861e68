//! Then steps for board drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use docket::board::{
    adapters::memory::NotificationEvent,
    domain::{CardId, TaskStatus},
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the task "{card}" is shown only in the "{status}" column"#)]
fn task_shown_only_in_column(
    world: &BoardWorld,
    card: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    for view in world.board.columns() {
        let present = view.cards().iter().any(|shown| shown.id().as_str() == card);
        let should_be_present = view.column().status() == expected;
        if present != should_be_present {
            return Err(eyre::eyre!(
                "card {card} presence in column '{}' was {present}, expected {should_be_present}",
                view.column().title()
            ));
        }
    }
    Ok(())
}

#[then(r#"the backend received a status update "{status}" for "{card}""#)]
fn backend_received_update(
    world: &BoardWorld,
    status: String,
    card: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let log = world.gateway.update_log().wrap_err("read update log")?;
    if log != vec![(CardId::new(card), expected)] {
        return Err(eyre::eyre!("unexpected update log: {log:?}"));
    }
    Ok(())
}

#[then("the backend received no status update")]
fn backend_received_no_update(world: &BoardWorld) -> Result<(), eyre::Report> {
    let log = world.gateway.update_log().wrap_err("read update log")?;
    if !log.is_empty() {
        return Err(eyre::eyre!("expected no status updates, got {log:?}"));
    }
    Ok(())
}

#[then("a failure notification was emitted for the pending update")]
fn failure_notification_emitted(world: &BoardWorld) -> Result<(), eyre::Report> {
    let events = world.notifier.events();
    let [
        NotificationEvent::Updating { token, .. },
        NotificationEvent::Failed {
            token: failed_token,
            ..
        },
    ] = events.as_slice()
    else {
        return Err(eyre::eyre!(
            "expected an updating notification replaced by a failure, got {events:?}"
        ));
    };

    if token != failed_token {
        return Err(eyre::eyre!(
            "failure notification replaced a different pending token"
        ));
    }
    Ok(())
}
