use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use shared_screens::{Entity, ListMode, ListScreen};

use crate::terminal::Terminal;

/// How an entity renders into the console table.
pub trait TableRow: Entity {
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Drives the create/edit dialog for one entity: prompts the fields, runs
/// the form screen, and hands back the normalized payload (or None on
/// cancel).
#[async_trait]
pub trait Editor<E: Entity>: Send + Sync {
    async fn compose(&self, existing: Option<&E>) -> Option<Value>;
}

/// Screen-specific commands beyond the shared CRUD set (the user screen's
/// change-password and toggle-active). Returns true when it consumed the
/// command.
#[async_trait]
pub trait ExtraActions<E: Entity>: Send + Sync {
    fn menu_hint(&self) -> &'static str {
        ""
    }

    async fn handle(&self, _command: &str, _id: Option<String>, _screen: &mut ListScreen<E>) -> bool {
        false
    }
}

pub struct NoExtras;

#[async_trait]
impl<E: Entity> ExtraActions<E> for NoExtras {}

/// The Excel export surface differs per entity; this captures the three
/// shapes the backend exposes.
pub enum ExportSpec {
    None,
    Simple {
        path: &'static str,
        filename: &'static str,
    },
    DateRange {
        path: &'static str,
        start_param: &'static str,
        end_param: &'static str,
        filename: &'static str,
    },
    PerPatient {
        // "/bills/patient/{id}/export/excel" split around the id
        prefix: &'static str,
        suffix: &'static str,
        filename_prefix: &'static str,
    },
}

pub struct ScreenConfig {
    pub export: ExportSpec,
    pub has_pdf: bool,
}

fn render<E: TableRow>(screen: &ListScreen<E>) {
    println!();
    let columns = E::columns();
    println!("  #  {}", columns.join(" | "));
    for (i, row) in screen.rows().iter().enumerate() {
        println!("  {}  {}", i + 1, row.cells().join(" | "));
    }
    match screen.mode() {
        ListMode::Paged => println!(
            "  page {}/{} ({} total)",
            screen.page().page + 1,
            screen.total_pages().max(1),
            screen.total_elements()
        ),
        ListMode::Search { query } => {
            println!("  search results for {:?} ({} matches)", query, screen.rows().len())
        }
    }
}

fn pick_row_id<E: TableRow>(screen: &ListScreen<E>, arg: &str) -> Option<String> {
    arg.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| screen.rows().get(n))
        .map(|row| row.id().to_string())
}

/// The interactive loop for one entity screen. Mirrors the list screen's
/// surface one key per action; everything stateful lives in `ListScreen`.
pub async fn browse<E: TableRow>(
    screen: &mut ListScreen<E>,
    editor: &dyn Editor<E>,
    extras: &dyn ExtraActions<E>,
    config: &ScreenConfig,
    terminal: &Arc<Terminal>,
) {
    screen.refresh().await;

    loop {
        render(screen);
        let prompt = format!(
            "  [a]dd [e]dit# [d]elete# [s]earch [n]ext [p]rev [x]port [f]pdf#{} [q]uit > ",
            extras.menu_hint()
        );
        let input = terminal.read_line(&prompt);
        let (command, arg) = match input.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (input.as_str(), ""),
        };

        match command {
            "q" => {
                screen.lifetime().cancel();
                return;
            }
            "n" => screen.next_page().await,
            "p" => screen.prev_page().await,
            "s" => {
                let query = if arg.is_empty() {
                    terminal.read_line("  search query (blank to clear): ")
                } else {
                    arg.to_string()
                };
                screen.submit_search(&query).await;
            }
            "a" => {
                screen.begin_create();
                if let Some(payload) = editor.compose(None).await {
                    screen.save(&payload).await;
                } else {
                    screen.close_dialog();
                }
            }
            "e" => {
                let Some(id) = pick_row_id(screen, arg) else {
                    terminal.say("  no such row");
                    continue;
                };
                let existing = screen.begin_edit(&id).cloned();
                match existing {
                    Some(entity) => {
                        if let Some(payload) = editor.compose(Some(&entity)).await {
                            screen.save(&payload).await;
                        } else {
                            screen.close_dialog();
                        }
                    }
                    None => screen.close_dialog(),
                }
            }
            "d" => {
                let Some(id) = pick_row_id(screen, arg) else {
                    terminal.say("  no such row");
                    continue;
                };
                screen.delete(&id).await;
            }
            "f" if config.has_pdf => {
                let Some(id) = pick_row_id(screen, arg) else {
                    terminal.say("  no such row");
                    continue;
                };
                screen.open_pdf(&id).await;
            }
            "x" => export(screen, &config.export, terminal).await,
            other => {
                let id = pick_row_id(screen, arg);
                if !extras.handle(other, id, screen).await {
                    continue;
                }
            }
        }

        if terminal.session_expired() {
            return;
        }
    }
}

async fn export<E: TableRow>(
    screen: &ListScreen<E>,
    spec: &ExportSpec,
    terminal: &Arc<Terminal>,
) {
    match spec {
        ExportSpec::None => terminal.say("  no export for this screen"),
        ExportSpec::Simple { path, filename } => {
            screen.export_excel(path, &[], filename).await;
        }
        ExportSpec::DateRange {
            path,
            start_param,
            end_param,
            filename,
        } => {
            let start = terminal.read_line("  start date (YYYY-MM-DD): ");
            let end = terminal.read_line("  end date (YYYY-MM-DD): ");
            screen
                .export_excel(path, &[(*start_param, start), (*end_param, end)], filename)
                .await;
        }
        ExportSpec::PerPatient {
            prefix,
            suffix,
            filename_prefix,
        } => {
            let patient_id = terminal.read_line("  patient id: ");
            if patient_id.is_empty() {
                return;
            }
            let path = format!("{}{}{}", prefix, patient_id, suffix);
            let filename = format!("{}-{}.xlsx", filename_prefix, patient_id);
            screen.export_excel(&path, &[], &filename).await;
        }
    }
}
