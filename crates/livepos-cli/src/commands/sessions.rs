//! One-shot commands over saved session files: files, show, summary, export.

use serde_json::json;

use livepos_core::{summary, Session, SessionStore};

use crate::app::AppContext;
use crate::ui::tables::{order_table, pivot_table, totals_lines, triplet_table};
use crate::ui::{badge, header, hint, Badge};

fn load_session(store: &SessionStore, name: &str) -> anyhow::Result<Session> {
    let mut session = Session::new();
    store.load(name, &mut session)?;
    Ok(session)
}

pub fn handle_files(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let names = store.list()?;
    let ui = ctx.ui_context(json, None);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if !ctx.quiet() {
        println!(
            "{}",
            header(&ui, "files", Some(&store.dir().display().to_string()))
        );
    }
    if names.is_empty() {
        println!("{}", badge(&ui, Badge::Info, "no saved sessions"));
        return Ok(());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub fn handle_show(
    ctx: &AppContext,
    name: &str,
    json: bool,
    format: Option<&str>,
) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let session = load_session(&store, name)?;
    let ui = ctx.ui_context(json, format);

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(session.ledger().records())?
        );
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui, "show", Some(name)));
    }
    println!("{}", order_table(&ui, session.ledger().records()));
    if ui.mode.is_pretty() {
        println!("{}", hint(&ui, &format!("livepos summary {}", name)));
    }
    Ok(())
}

pub fn handle_summary(
    ctx: &AppContext,
    name: &str,
    json: bool,
    format: Option<&str>,
) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let session = load_session(&store, name)?;
    let ui = ctx.ui_context(json, format);

    let records = session.ledger().records();
    let counts = summary::triplet_counts(records);
    let pivot = summary::size_pivot(records);
    let totals = summary::totals(records, session.price_book());

    if ui.mode.is_json() {
        let payload = json!({
            "counts": counts,
            "pivot": pivot,
            "totals": {
                "records": totals.records,
                "revenue": totals.revenue,
                "cost": totals.cost,
                "profit": totals.profit(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui, "summary", Some(name)));
    }
    println!("{}", triplet_table(&ui, &counts));
    println!("{}", pivot_table(&ui, &pivot));
    println!("{}", totals_lines(&ui, &totals));
    Ok(())
}

pub fn handle_export(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let session = load_session(&store, name)?;
    println!(
        "{}",
        serde_json::to_string_pretty(session.ledger().records())?
    );
    Ok(())
}
