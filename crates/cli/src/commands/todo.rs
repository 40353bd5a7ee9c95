//! Dashboard todo page commands.

use clubdesk_portal::dom::{FormDocument, ListContainer, PageDocument};
use clubdesk_portal::error::Result;
use clubdesk_portal::pages::DashboardPage;
use clubdesk_portal::pages::dashboard::TODO_FIELDS;

use super::open_storage;

fn document() -> PageDocument {
    let mut doc = PageDocument::new();
    doc.todo_form = Some(FormDocument::from_schema(TODO_FIELDS));
    doc.todos_container = Some(ListContainer::new());
    doc
}

fn print_list(doc: &PageDocument) {
    if let Some(container) = doc.todos_container.as_ref() {
        if container.is_empty() {
            println!("(no todos)");
        } else {
            println!("{}", container.html());
        }
    }
}

/// Load the page and print the rendered todo list.
pub fn list() -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(mut page) = DashboardPage::activate(&storage, &mut doc) {
        page.load()?;
    }
    print_list(&doc);
    Ok(())
}

/// Fill the todo form and fire the submit event.
pub fn add(title: &str, description: &str, priority: &str, due_date: &str) -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(form) = doc.todo_form.as_mut() {
        form.insert_text("todo-title", title);
        form.insert_text("todo-description", description);
        form.insert_text("todo-priority", priority);
        form.insert_text("todo-due-date", due_date);
    }
    if let Some(mut page) = DashboardPage::activate(&storage, &mut doc) {
        page.submit()?;
    }
    print_list(&doc);
    Ok(())
}

/// Click the complete control of the block rendered for `id`.
pub fn complete(id: i64) -> Result<()> {
    click(id, "complete")
}

/// Click the delete control of the block rendered for `id`.
pub fn delete(id: i64) -> Result<()> {
    click(id, "delete")
}

/// Two page events: load (renders the list), then a delegated click on
/// the block carrying `id`. A stale id clicks nothing and the list is
/// simply re-printed.
fn click(id: i64, action: &str) -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(mut page) = DashboardPage::activate(&storage, &mut doc) {
        page.load()?;
    }
    let child_index = doc
        .todos_container
        .as_ref()
        .and_then(|container| container.position_of(id));
    if child_index.is_none() {
        tracing::warn!(id, "no rendered todo with that id");
    }
    if let Some(mut page) = DashboardPage::activate(&storage, &mut doc) {
        page.container_click(Some(action), child_index)?;
    }
    print_list(&doc);
    Ok(())
}
