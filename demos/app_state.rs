//! App-wide state fanned out over per-field cells

use partyline::{Accessor, ContextBuilder};

#[derive(Clone, Debug)]
struct TodoItem {
    text: String,
    completed: bool,
}

#[derive(Clone, Debug)]
struct AppState {
    todos: Vec<TodoItem>,
    filter: String,
}

struct AppProps {
    seed: Vec<(&'static str, bool)>,
}

fn use_app_state(props: &AppProps) -> AppState {
    AppState {
        todos: props
            .seed
            .iter()
            .map(|(text, completed)| TodoItem {
                text: text.to_string(),
                completed: *completed,
            })
            .collect(),
        filter: "all".to_string(),
    }
}

// Each "component" depends on one slice of the state only
fn todo_list(use_todos: Accessor<Vec<TodoItem>>) {
    for todo in use_todos.get().unwrap_or_default() {
        let mark = if todo.completed { "x" } else { " " };
        println!("   [{}] {}", mark, todo.text);
    }
}

fn status_bar(use_remaining: Accessor<usize>, use_filter: Accessor<String>) {
    println!(
        "   {} item(s) left, showing: {}",
        use_remaining.get().unwrap_or(0),
        use_filter.get().unwrap_or_default()
    );
}

fn main() {
    println!("=== App State Example ===\n");

    let mut builder = ContextBuilder::new("app", use_app_state);
    let use_todos = builder.select("todos", |state: &AppState| state.todos.clone());
    let use_remaining = builder.select("remaining", |state: &AppState| {
        state.todos.iter().filter(|t| !t.completed).count()
    });
    let use_filter = builder.select("filter", |state: &AppState| state.filter.clone());
    let app = builder.finish();

    let props = AppProps {
        seed: vec![
            ("buy milk", true),
            ("write docs", false),
            ("ship release", false),
        ],
    };

    println!("Rendering inside the provider:");
    app.provide(&props, || {
        todo_list(use_todos);
        status_bar(use_remaining, use_filter);
    });
}
