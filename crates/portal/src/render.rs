//! List rendering: fixed askama templates, one block per record.
//!
//! Rendering always clears the container first and then appends one block
//! per record in the order given, so re-rendering the same list is
//! idempotent. Every interpolated field goes through askama's default HTML
//! escaping - the payment page included, not just todo text.

use askama::Template;

use crate::dom::ListContainer;
use crate::error::Result;
use crate::filters;
use crate::models::{Payment, Todo};

/// Payment view for templates.
#[derive(Debug, Clone)]
pub struct PaymentView {
    pub amount: String,
    pub currency: String,
    pub status: String,
    pub status_class: &'static str,
    pub reference: String,
    pub method: String,
    pub date: String,
    pub description: String,
}

impl From<&Payment> for PaymentView {
    fn from(payment: &Payment) -> Self {
        Self {
            amount: payment.amount.to_string(),
            currency: payment.currency.clone(),
            status: payment.status.to_string(),
            status_class: payment.status.css_class(),
            reference: payment.reference.clone(),
            method: payment.payment_method.clone(),
            date: payment.date.clone(),
            description: payment.description.clone(),
        }
    }
}

/// Payment history block template.
#[derive(Template)]
#[template(path = "payment_item.html")]
struct PaymentItemTemplate<'a> {
    payment: &'a PaymentView,
}

/// Todo view for templates.
#[derive(Debug, Clone)]
pub struct TodoView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority_label: &'static str,
    pub priority_class: &'static str,
    pub due_label: String,
    pub toggle_label: &'static str,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.as_i64(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed,
            priority_label: todo.priority.label(),
            priority_class: todo.priority.css_class(),
            due_label: if todo.due_date.is_empty() {
                String::new()
            } else {
                format!("Due: {}", todo.due_date)
            },
            toggle_label: if todo.completed { "Undo" } else { "Complete" },
        }
    }
}

/// Todo list block template.
#[derive(Template)]
#[template(path = "todo_item.html")]
struct TodoItemTemplate<'a> {
    todo: &'a TodoView,
}

/// Regenerate the payment history container, newest first.
///
/// # Errors
///
/// Returns `PortalError::Template` if a block fails to render.
pub fn render_payments(payments: &[Payment], container: &mut ListContainer) -> Result<()> {
    container.clear();
    for payment in payments {
        let view = PaymentView::from(payment);
        let html = PaymentItemTemplate { payment: &view }.render()?;
        container.append(None, html);
    }
    Ok(())
}

/// Regenerate the todo list container, newest first.
///
/// Each block is tagged with its record id for delegated click handling.
///
/// # Errors
///
/// Returns `PortalError::Template` if a block fails to render.
pub fn render_todos(todos: &[Todo], container: &mut ListContainer) -> Result<()> {
    container.clear();
    for todo in todos {
        let view = TodoView::from(todo);
        let html = TodoItemTemplate { todo: &view }.render()?;
        container.append(Some(todo.id.as_i64()), html);
    }
    Ok(())
}
