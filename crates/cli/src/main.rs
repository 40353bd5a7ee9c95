//! Clubdesk CLI - drives the portal pages from the command line.
//!
//! The binary stands in for the page markup: each invocation builds the
//! page's element tree, fires exactly one UI event through the
//! controllers, then prints any notices and the rendered list container.
//! State lives in the file-backed store at `CLUBDESK_DATA_DIR`, so it
//! persists across invocations.
//!
//! # Usage
//!
//! ```bash
//! # Save the member profile
//! clubdesk member save --field first-name=Ama --field email=ama@example.com
//!
//! # Record a payment
//! clubdesk payment submit --field amount=12.3 --field terms-agreement=true
//!
//! # Save a payment draft, reload it later
//! clubdesk payment draft --field amount=45.5
//! clubdesk payment list
//!
//! # Work the todo list
//! clubdesk todo add --title "Buy milk" --priority high
//! clubdesk todo complete 1754468000000
//! clubdesk todo delete 1754468000000
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clubdesk")]
#[command(author, version, about = "Clubdesk portal pages from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Member profile page
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },
    /// Payment entry page
    Payment {
        #[command(subcommand)]
        action: PaymentAction,
    },
    /// Dashboard todo list
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },
}

#[derive(Subcommand)]
enum MemberAction {
    /// Print the profile form as loaded from storage
    Show,
    /// Fill the profile form and submit it
    Save {
        /// Form fields as id=value pairs (e.g. --field first-name=Ama)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Clear the form and remove the stored profile
    Reset,
}

#[derive(Subcommand)]
enum PaymentAction {
    /// Render the payment history
    List,
    /// Fill the payment form and submit it
    Submit {
        /// Form fields as id=value pairs (e.g. --field amount=12.3)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Save the form as the provisional draft without submitting
    Draft {
        /// Form fields as id=value pairs
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

#[derive(Subcommand)]
enum TodoAction {
    /// Render the todo list
    List,
    /// Add a todo
    Add {
        /// Todo title (required; blank titles are dropped by the page)
        #[arg(long)]
        title: String,

        /// Todo description
        #[arg(long, default_value = "")]
        description: String,

        /// Priority (`low`, `medium`, `high`)
        #[arg(long, default_value = "low")]
        priority: String,

        /// Due date (free-form, e.g. 2026-08-20)
        #[arg(long = "due-date", default_value = "")]
        due_date: String,
    },
    /// Toggle a todo's completed flag
    Complete {
        /// Todo id as shown in the rendered list
        id: i64,
    },
    /// Delete a todo
    Delete {
        /// Todo id as shown in the rendered list
        id: i64,
    },
}

/// Parse one `--field id=value` pair.
fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(id, value)| (id.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected id=value, got `{s}`"))
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Member { action } => match action {
            MemberAction::Show => commands::member::show()?,
            MemberAction::Save { fields } => commands::member::save(&fields)?,
            MemberAction::Reset => commands::member::reset()?,
        },
        Commands::Payment { action } => match action {
            PaymentAction::List => commands::payment::list()?,
            PaymentAction::Submit { fields } => commands::payment::submit(&fields)?,
            PaymentAction::Draft { fields } => commands::payment::draft(&fields)?,
        },
        Commands::Todo { action } => match action {
            TodoAction::List => commands::todo::list()?,
            TodoAction::Add {
                title,
                description,
                priority,
                due_date,
            } => commands::todo::add(&title, &description, &priority, &due_date)?,
            TodoAction::Complete { id } => commands::todo::complete(id)?,
            TodoAction::Delete { id } => commands::todo::delete(id)?,
        },
    }
    Ok(())
}
