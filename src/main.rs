use anyhow::Result;
use clap::{Parser, Subcommand};
use expense_tracker::commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory with an empty expense collection
    Init,
    /// Start the HTTP server and web UI
    Serve {
        /// Port to listen on (falls back to PORT, then 3000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Manage expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },
}

#[derive(Subcommand)]
enum ExpenseAction {
    /// Record a new expense
    Add {
        /// Amount spent, must be positive
        amount: f64,
        /// What the money went to
        description: String,
        /// Category label
        #[arg(long, default_value = "General")]
        category: String,
    },
    /// List expenses, newest last
    List {
        /// Only show one category
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete an expense by id
    Delete {
        /// Expense id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Init => commands::init::execute_init(),
        Commands::Serve { port } => commands::serve::execute_serve(*port).await,
        Commands::Expense { action } => match action {
            ExpenseAction::Add {
                amount,
                description,
                category,
            } => commands::expense::execute_add(*amount, description, category).await,
            ExpenseAction::List { category } => {
                commands::expense::execute_list(category.as_deref()).await
            }
            ExpenseAction::Delete { id } => commands::expense::execute_delete(id).await,
        },
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}
