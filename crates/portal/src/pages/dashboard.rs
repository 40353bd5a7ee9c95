//! Dashboard todo page controller.

use tracing::instrument;

use clubdesk_core::{Priority, TodoId};

use crate::dom::PageDocument;
use crate::error::Result;
use crate::form::{FieldSpec, collect};
use crate::models::{Todo, next_todo_id};
use crate::render;
use crate::storage::Storage;
use crate::stores::TodoStore;

/// Field schema of the todo entry form.
pub const TODO_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("todo-title"),
    FieldSpec::text("todo-description"),
    FieldSpec::text("todo-priority"),
    FieldSpec::text("todo-due-date"),
];

/// In-place mutations reachable from the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    /// Flip the completed flag.
    Complete,
    /// Remove the record.
    Delete,
}

impl TodoAction {
    /// Resolve a control's action tag; unknown tags resolve to nothing.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "complete" => Some(Self::Complete),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Controller for the dashboard page: todo entry form plus the
/// newest-first list with delegated complete/delete actions.
pub struct DashboardPage<'a> {
    store: TodoStore<'a>,
    doc: &'a mut PageDocument,
}

impl<'a> DashboardPage<'a> {
    /// Activate the controller if both the todo form and the list
    /// container are present.
    pub fn activate(storage: &'a Storage, doc: &'a mut PageDocument) -> Option<Self> {
        doc.todo_form.as_ref()?;
        doc.todos_container.as_ref()?;
        Some(Self {
            store: TodoStore::new(storage),
            doc,
        })
    }

    /// Page-ready: render the current list.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Template` if a block fails to render.
    pub fn load(&mut self) -> Result<()> {
        self.render()
    }

    /// Submit: create a todo from the form and prepend it.
    ///
    /// A blank title (after trimming) drops the submission silently - no
    /// record, no reset, no error.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Template` if the list fails to render.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<()> {
        let data = {
            let Some(form) = self.doc.todo_form.as_ref() else {
                return Ok(());
            };
            collect(form, TODO_FIELDS)
        };
        let title = data.text("todo-title").trim();
        if title.is_empty() {
            tracing::debug!("blank todo title, submission dropped");
            return Ok(());
        }

        let todo = Todo {
            id: next_todo_id(),
            title: title.to_owned(),
            description: data.text("todo-description").trim().to_owned(),
            priority: Priority::from_field(data.text("todo-priority")),
            due_date: data.text("todo-due-date").to_owned(),
            completed: false,
        };

        // Re-read the stored list inside the handler before writing.
        let mut todos = self.store.get();
        todos.insert(0, todo);
        tracing::info!(count = todos.len(), "todo created");
        self.store.set(&todos);

        if let Some(form) = self.doc.todo_form.as_mut() {
            form.reset();
        }
        self.render()
    }

    /// Delegated click on the list container.
    ///
    /// `action_tag` is the clicked control's action attribute (if any);
    /// `child_index` is the position of the clicked child block (if the
    /// click landed inside one). An untagged control, unknown tag, or a
    /// click outside every block is a pure no-op. Once a block is
    /// resolved, the stored list is re-read, mutated when the id matches,
    /// and always saved and re-rendered - match found or not.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Template` if the list fails to render.
    #[instrument(skip(self))]
    pub fn container_click(
        &mut self,
        action_tag: Option<&str>,
        child_index: Option<usize>,
    ) -> Result<()> {
        let Some(action) = action_tag.and_then(TodoAction::from_tag) else {
            return Ok(());
        };
        let item_id = {
            let Some(container) = self.doc.todos_container.as_ref() else {
                return Ok(());
            };
            let Some(child) = child_index.and_then(|index| container.children().get(index))
            else {
                return Ok(());
            };
            child.item_id()
        };

        let mut todos = self.store.get();
        if let Some(id) = item_id.map(TodoId::new) {
            if let Some(position) = todos.iter().position(|todo| todo.id == id) {
                match action {
                    TodoAction::Delete => {
                        todos.remove(position);
                        tracing::info!(%id, "todo deleted");
                    }
                    TodoAction::Complete => {
                        if let Some(todo) = todos.get_mut(position) {
                            todo.completed = !todo.completed;
                            tracing::info!(%id, completed = todo.completed, "todo toggled");
                        }
                    }
                }
            }
        }
        self.store.set(&todos);
        self.render()
    }

    /// Regenerate the list container from storage, newest first.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Template` if a block fails to render.
    pub fn render(&mut self) -> Result<()> {
        let Some(container) = self.doc.todos_container.as_mut() else {
            return Ok(());
        };
        let todos = self.store.get();
        render::render_todos(&todos, container)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::{FormDocument, ListContainer};

    fn document() -> PageDocument {
        let mut doc = PageDocument::new();
        doc.todo_form = Some(FormDocument::from_schema(TODO_FIELDS));
        doc.todos_container = Some(ListContainer::new());
        doc
    }

    fn set_text(doc: &mut PageDocument, id: &str, value: &str) {
        doc.todo_form.as_mut().unwrap().insert_text(id, value);
    }

    fn add_todo(storage: &Storage, title: &str) {
        let mut doc = document();
        set_text(&mut doc, "todo-title", title);
        let mut page = DashboardPage::activate(storage, &mut doc).unwrap();
        page.submit().unwrap();
    }

    #[test]
    fn test_requires_both_form_and_container() {
        let storage = Storage::in_memory();
        let mut doc = PageDocument::new();
        doc.todo_form = Some(FormDocument::from_schema(TODO_FIELDS));
        assert!(DashboardPage::activate(&storage, &mut doc).is_none());
    }

    #[test]
    fn test_submit_applies_defaults_and_prepends() {
        let storage = Storage::in_memory();
        add_todo(&storage, "Buy milk");

        let todos = TodoStore::new(&storage).get();
        assert_eq!(todos.len(), 1);
        let todo = todos.first().unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.priority, Priority::Low);
        assert!(!todo.completed);
        assert_eq!(todo.due_date, "");

        add_todo(&storage, "Walk dog");
        let todos = TodoStore::new(&storage).get();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos.first().unwrap().title, "Walk dog");
    }

    #[test]
    fn test_blank_title_is_dropped() {
        let storage = Storage::in_memory();
        add_todo(&storage, "   ");
        assert!(TodoStore::new(&storage).get().is_empty());
    }

    #[test]
    fn test_title_is_trimmed() {
        let storage = Storage::in_memory();
        add_todo(&storage, "  Buy milk  ");
        assert_eq!(
            TodoStore::new(&storage).get().first().unwrap().title,
            "Buy milk"
        );
    }

    #[test]
    fn test_complete_toggles_in_place() {
        let storage = Storage::in_memory();
        add_todo(&storage, "toggle me");

        let mut doc = document();
        let mut page = DashboardPage::activate(&storage, &mut doc).unwrap();
        page.load().unwrap();
        page.container_click(Some("complete"), Some(0)).unwrap();

        let todos = TodoStore::new(&storage).get();
        assert_eq!(todos.len(), 1);
        assert!(todos.first().unwrap().completed);

        // Same control toggles back.
        page.container_click(Some("complete"), Some(0)).unwrap();
        assert!(!TodoStore::new(&storage).get().first().unwrap().completed);
    }

    #[test]
    fn test_delete_removes_by_id() {
        let storage = Storage::in_memory();
        add_todo(&storage, "keep");
        add_todo(&storage, "drop");

        let mut doc = document();
        let mut page = DashboardPage::activate(&storage, &mut doc).unwrap();
        page.load().unwrap();
        // Newest first: child 0 is "drop".
        page.container_click(Some("delete"), Some(0)).unwrap();

        let todos = TodoStore::new(&storage).get();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos.first().unwrap().title, "keep");
        assert_eq!(doc.todos_container.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_untagged_click_is_noop() {
        let storage = Storage::in_memory();
        add_todo(&storage, "stay");

        let mut doc = document();
        let mut page = DashboardPage::activate(&storage, &mut doc).unwrap();
        page.load().unwrap();
        page.container_click(None, Some(0)).unwrap();
        page.container_click(Some("edit"), Some(0)).unwrap();
        page.container_click(Some("delete"), None).unwrap();
        page.container_click(Some("delete"), Some(9)).unwrap();

        assert_eq!(TodoStore::new(&storage).get().len(), 1);
    }
}
