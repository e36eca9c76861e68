//! Given steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use docket::board::{
    domain::CardId,
    ports::{DocumentKind, DocumentRecord},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a board loaded with a "{status}" task "{card}""#)]
fn board_loaded_with_task(
    world: &mut BoardWorld,
    status: String,
    card: String,
) -> Result<(), eyre::Report> {
    world
        .gateway
        .push_document(DocumentRecord {
            id: CardId::new(card.clone()),
            kind: DocumentKind::Task,
            title: format!("Task {card}"),
            description: None,
            priority: None,
            status,
        })
        .wrap_err("seed backend document")?;
    run_async(world.board.load());
    Ok(())
}

#[given("the backend rejects status updates with status {code:u16}")]
fn backend_rejects_updates(world: &mut BoardWorld, code: u16) -> Result<(), eyre::Report> {
    world
        .gateway
        .reject_updates(code)
        .wrap_err("inject update rejection")?;
    Ok(())
}
