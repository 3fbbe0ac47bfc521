use crate::export::ExportFormat;
use crate::models::drink::DrinkSize;
use clap::{Parser, Subcommand};

/// Command-line interface definition for watercooler
#[derive(Parser)]
#[command(
    name = "watercooler",
    version = env!("CARGO_PKG_VERSION"),
    about = "Office water-cooler ledger: who owes for the jugs, jug stock, and today's hydration ranking",
    long_about = None
)]
pub struct Cli {
    /// Override the ledger table path
    #[arg(global = true, long = "ledger", value_name = "FILE")]
    pub ledger: Option<String>,

    /// Override the inventory table path
    #[arg(global = true, long = "inventory", value_name = "FILE")]
    pub inventory: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration and both tables
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Show and edit the people ledger
    Ledger {
        #[command(subcommand)]
        action: LedgerAction,
    },

    /// Add debt to the selected people (clears their paid flag)
    Charge {
        /// Amount to add to each person (default from config)
        #[arg(long, short)]
        amount: Option<f64>,

        /// People to charge
        names: Vec<String>,
    },

    /// Mark people as paid (debt amounts are not changed)
    Pay {
        /// People who paid
        names: Vec<String>,

        /// Mark as not paid instead
        #[arg(long)]
        undo: bool,
    },

    /// Record a cup of water for someone
    Drink {
        /// Person who drank
        name: String,

        /// Cup size in ml: 200, 300 or 500
        #[arg(long, value_parser = parse_drink_size, default_value = "300")]
        ml: DrinkSize,
    },

    /// Reset everyone's daily counter to 0 ml
    #[command(name = "reset-day")]
    ResetDay,

    /// Show today's hydration ranking
    Rank,

    /// Show the jug stock, or update it when any option is given
    Stock {
        /// Price of one jug
        #[arg(long)]
        price: Option<f64>,

        /// Number of full jugs
        #[arg(long)]
        full: Option<u32>,

        /// Number of empty jugs
        #[arg(long)]
        empty: Option<u32>,

        /// A new order has been placed
        #[arg(long, conflicts_with = "not_ordered")]
        ordered: bool,

        /// No order pending
        #[arg(long = "not-ordered")]
        not_ordered: bool,
    },

    /// Export the ledger to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum LedgerAction {
    /// Print the ledger
    List,

    /// Add people with no debt
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Change cells of a person's row
    Set {
        name: String,

        #[arg(long)]
        debt: Option<f64>,

        #[arg(long)]
        paid: Option<bool>,

        #[arg(long)]
        ml: Option<u32>,
    },

    /// Delete people from the ledger
    Remove {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Edit the whole ledger in a text editor
    Edit {
        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Replace the ledger with an edited CSV file
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },
}

fn parse_drink_size(s: &str) -> Result<DrinkSize, String> {
    let ml: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number of ml"))?;
    DrinkSize::try_from(ml).map_err(|e| e.to_string())
}
