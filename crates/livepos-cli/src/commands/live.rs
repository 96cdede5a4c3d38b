//! The interactive live-session loop.
//!
//! One `Session` is created at start and driven one action at a time:
//! read a command, mutate state, re-render the board. Every error is
//! reported at the prompt boundary and the loop keeps going, so a typo
//! never costs the operator their ledger mid-stream.

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use livepos_core::{summary, OrderField, Session, SessionStore, VocabKind};

use crate::app::AppContext;
use crate::ui::tables::{order_table, pivot_table, price_line, totals_lines, triplet_table};
use crate::ui::{badge, header, hint, print_error, Badge, UiContext};

/// Trailing menu entry that switches a vocabulary pick to free-text input.
const TYPE_NEW: &str = "(type a new value)";

pub fn handle_live(ctx: &AppContext, resume: Option<&str>) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    if !ui.is_interactive() {
        anyhow::bail!(
            "live mode needs an interactive terminal; use `livepos files/show/summary` instead"
        );
    }

    let theme = ColorfulTheme::default();
    let store = ctx.store()?;
    let mut session = Session::new();
    if let Some(name) = resume {
        let count = store.load(name, &mut session)?;
        println!(
            "{}",
            badge(&ui, Badge::Ok, &format!("loaded {} ({} orders)", name, count))
        );
    }

    println!("{}", header(&ui, "live", Some(&store.dir().display().to_string())));

    loop {
        render_board(&ui, &session);

        let actions = [
            "Add order",
            "Undo last",
            "Edit a row",
            "Set price",
            "Summary",
            "Save",
            "Load",
            "Quit",
        ];
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => add_order(&ui, &mut session),
            1 => undo(&ui, &mut session),
            2 => edit_row(&ui, &mut session),
            3 => set_price(&ui, &mut session),
            4 => show_summary(&ui, &session),
            5 => save(&ui, &store, &session),
            6 => load(&ui, &store, &mut session),
            _ => break,
        };
        if let Err(err) = result {
            print_error(&ui, &err.to_string(), None);
        }
    }

    if !session.ledger().is_empty() {
        let wants_save = Confirm::with_theme(&theme)
            .with_prompt("Save this session before quitting?")
            .default(true)
            .interact()?;
        if wants_save {
            save(&ui, &store, &session)?;
        }
    }
    Ok(())
}

fn render_board(ui: &UiContext, session: &Session) {
    println!();
    if session.ledger().is_empty() {
        println!("{}", badge(ui, Badge::Info, "no orders yet"));
        return;
    }
    println!("{}", order_table(ui, session.ledger().records()));
    let totals = summary::totals(session.ledger().records(), session.price_book());
    println!(
        "{}",
        badge(
            ui,
            Badge::Info,
            &format!(
                "{} orders \u{00B7} revenue {} \u{00B7} profit {}",
                totals.records,
                totals.revenue,
                totals.profit()
            )
        )
    );
}

/// Pick a value from defaults + history, or type a new one.
fn prompt_vocab(session: &Session, kind: VocabKind, prompt: &str) -> anyhow::Result<String> {
    let theme = ColorfulTheme::default();
    let options = session.vocabulary().options(kind);
    if options.is_empty() {
        let value: String = Input::with_theme(&theme)
            .with_prompt(prompt)
            .interact_text()?;
        return Ok(value);
    }

    let mut items: Vec<&str> = options.iter().map(String::as_str).collect();
    items.push(TYPE_NEW);
    let pick = Select::with_theme(&theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    if pick == options.len() {
        let value: String = Input::with_theme(&theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(value)
    } else {
        Ok(options[pick].clone())
    }
}

fn add_order(ui: &UiContext, session: &mut Session) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let item_code = prompt_vocab(session, VocabKind::Item, "貨號 / Kode")?;
    let customer: String = Input::with_theme(&theme)
        .with_prompt("客人 / Nama")
        .interact_text()?;
    let color = prompt_vocab(session, VocabKind::Color, "顏色 / Warna")?;
    let size = prompt_vocab(session, VocabKind::Size, "尺寸 / Ukuran")?;

    let record = session.submit(&item_code, &customer, &color, &size)?;
    println!(
        "{}",
        badge(
            ui,
            Badge::Ok,
            &format!("added {} / {}", record.item_code, record.customer_name)
        )
    );
    if session.price_book().get(&record.item_code).price == 0 {
        println!("{}", hint(ui, &format!("no price set for {} yet", record.item_code)));
    }
    Ok(())
}

fn undo(ui: &UiContext, session: &mut Session) -> anyhow::Result<()> {
    match session.retract_last() {
        Some(record) => println!(
            "{}",
            badge(
                ui,
                Badge::Ok,
                &format!("removed {} / {}", record.item_code, record.customer_name)
            )
        ),
        None => println!("{}", badge(ui, Badge::Warn, "nothing to undo")),
    }
    Ok(())
}

fn edit_row(ui: &UiContext, session: &mut Session) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let len = session.ledger().len();
    if len == 0 {
        println!("{}", badge(ui, Badge::Warn, "no orders to edit"));
        return Ok(());
    }

    let row: usize = Input::with_theme(&theme)
        .with_prompt(format!("Row number (1-{})", len))
        .validate_with(|value: &usize| {
            if (1..=len).contains(value) {
                Ok(())
            } else {
                Err("row out of range")
            }
        })
        .interact_text()?;

    let labels: Vec<&str> = OrderField::ALL.iter().map(|f| f.label()).collect();
    let field_pick = Select::with_theme(&theme)
        .with_prompt("Field")
        .items(&labels)
        .default(0)
        .interact()?;
    let field = OrderField::ALL[field_pick];

    let value: String = Input::with_theme(&theme)
        .with_prompt("New value")
        .interact_text()?;

    session.edit_cell(row - 1, field, &value)?;
    println!("{}", badge(ui, Badge::Ok, &format!("row {} updated", row)));
    Ok(())
}

fn set_price(ui: &UiContext, session: &mut Session) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let item_code = prompt_vocab(session, VocabKind::Item, "貨號 / Kode")?;
    let cost: u64 = Input::with_theme(&theme)
        .with_prompt("成本 / Modal")
        .interact_text()?;
    let price: u64 = Input::with_theme(&theme)
        .with_prompt("售價 / Harga")
        .interact_text()?;

    session.set_price(&item_code, cost, price)?;
    println!(
        "{}",
        badge(
            ui,
            Badge::Ok,
            &price_line(session.price_book(), item_code.trim())
        )
    );
    Ok(())
}

fn show_summary(ui: &UiContext, session: &Session) -> anyhow::Result<()> {
    let records = session.ledger().records();
    println!("{}", triplet_table(ui, &summary::triplet_counts(records)));
    println!("{}", pivot_table(ui, &summary::size_pivot(records)));
    println!(
        "{}",
        totals_lines(ui, &summary::totals(records, session.price_book()))
    );
    Ok(())
}

fn save(ui: &UiContext, store: &SessionStore, session: &Session) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let suggested = store.next_session_name(Local::now().date_naive())?;
    let name: String = Input::with_theme(&theme)
        .with_prompt("檔名 / Nama File")
        .default(suggested)
        .interact_text()?;

    let path = store.save(&name, session)?;
    println!(
        "{}",
        badge(ui, Badge::Ok, &format!("saved {}", path.display()))
    );
    Ok(())
}

fn load(ui: &UiContext, store: &SessionStore, session: &mut Session) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let names = store.list()?;
    if names.is_empty() {
        println!("{}", badge(ui, Badge::Info, "no saved sessions"));
        return Ok(());
    }

    let pick = Select::with_theme(&theme)
        .with_prompt("選擇檔案 / Pilih")
        .items(&names)
        .default(0)
        .interact()?;

    if !session.ledger().is_empty() {
        let proceed = Confirm::with_theme(&theme)
            .with_prompt("Replace the current orders with the loaded file?")
            .default(false)
            .interact()?;
        if !proceed {
            return Ok(());
        }
    }

    let count = store.load(&names[pick], session)?;
    println!(
        "{}",
        badge(
            ui,
            Badge::Ok,
            &format!("loaded {} ({} orders)", names[pick], count)
        )
    );
    Ok(())
}
